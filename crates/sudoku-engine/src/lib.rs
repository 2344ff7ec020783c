//! Core engine for validating, checking, and solving 9x9 Sudoku puzzles.
//!
//! Puzzles travel as 81-character strings of digits 1-9 and '.' for empty
//! cells, read row-major from the top-left corner (row A, column 1). The
//! engine is stateless: every operation builds its own [`Grid`] from the
//! caller's string and discards it when done, so concurrent callers never
//! interfere.
//!
//! The main entry points are [`validate`], [`solve`], and the per-axis
//! checks in [`placement`].

mod error;
mod grid;
pub mod placement;
mod solver;

pub use error::PuzzleError;
pub use grid::{Grid, Position};
pub use placement::Axis;
pub use solver::Solver;

/// Validate a candidate puzzle string.
///
/// Guard clauses run in a fixed order and the first failure wins:
/// presence, then length, then character set. Callers rely on length
/// being judged before content.
pub fn validate(puzzle: &str) -> Result<(), PuzzleError> {
    if puzzle.is_empty() {
        return Err(PuzzleError::MissingField);
    }
    if puzzle.chars().count() != 81 {
        return Err(PuzzleError::InvalidLength);
    }
    if puzzle.chars().any(|c| !matches!(c, '1'..='9' | '.')) {
        return Err(PuzzleError::InvalidCharacters);
    }
    Ok(())
}

/// Validate and solve a puzzle string, returning the 81-character
/// solution line.
///
/// Validation errors are propagated as-is; a structurally valid puzzle
/// with no legal completion reports [`PuzzleError::Unsolvable`].
pub fn solve(puzzle: &str) -> Result<String, PuzzleError> {
    validate(puzzle)?;
    let grid = Grid::from_puzzle(puzzle).ok_or(PuzzleError::InvalidLength)?;
    let solved = Solver::new().solve(&grid).ok_or(PuzzleError::Unsolvable)?;
    Ok(solved.to_line())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PUZZLE: &str =
        "1.5..2.84..63.12.7.2..5.....9..1....8.2.3674.3.7.2..9.47...8..1..16....926914.37.";
    const SOLUTION: &str =
        "135762984946381257728459613694517832812936745357824196473298561581673429269145378";

    #[test]
    fn test_validate_accepts_well_formed_puzzle() {
        assert_eq!(validate(PUZZLE), Ok(()));
    }

    #[test]
    fn test_validate_missing_input() {
        assert_eq!(validate(""), Err(PuzzleError::MissingField));
    }

    #[test]
    fn test_validate_wrong_length() {
        assert_eq!(validate(&"1".repeat(80)), Err(PuzzleError::InvalidLength));
        assert_eq!(validate(&"1".repeat(82)), Err(PuzzleError::InvalidLength));
    }

    #[test]
    fn test_validate_invalid_characters() {
        let puzzle = format!("{}x", "1".repeat(80));
        assert_eq!(validate(&puzzle), Err(PuzzleError::InvalidCharacters));
    }

    #[test]
    fn test_length_is_checked_before_content() {
        // 80 characters of garbage still report the length error.
        assert_eq!(validate(&"x".repeat(80)), Err(PuzzleError::InvalidLength));
    }

    #[test]
    fn test_solve_valid_puzzle() {
        assert_eq!(solve(PUZZLE).as_deref(), Ok(SOLUTION));
    }

    #[test]
    fn test_solve_propagates_validation_errors() {
        assert_eq!(solve(""), Err(PuzzleError::MissingField));
        assert_eq!(solve(&"1".repeat(80)), Err(PuzzleError::InvalidLength));
        let bad = format!("{}x", "1".repeat(80));
        assert_eq!(solve(&bad), Err(PuzzleError::InvalidCharacters));
    }

    #[test]
    fn test_solve_unsolvable_puzzle() {
        let poisoned = format!("9{}", &PUZZLE[1..]);
        assert_eq!(solve(&poisoned), Err(PuzzleError::Unsolvable));
    }

    #[test]
    fn test_solution_revalidates() {
        let solution = solve(PUZZLE).unwrap();
        assert_eq!(validate(&solution), Ok(()));
        assert_eq!(solution.chars().count(), 81);
    }
}
