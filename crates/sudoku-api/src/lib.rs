//! Thin translation layer between JSON-shaped check/solve requests and
//! the Sudoku engine.
//!
//! The two entry points mirror the reference deployment's `POST
//! /api/solve` and `POST /api/check` routes, minus the HTTP plumbing:
//! callers hand in a deserialized request body and get back a value that
//! serializes to the exact response payload. All errors are payload
//! data, never panics, and the adapter holds no state between calls.
//!
//! Field presence, coordinate, and value checks happen here; everything
//! about the puzzle itself is delegated to [`sudoku_engine`].

mod error;
mod message;

pub use error::ApiError;
pub use message::{CheckRequest, CheckResponse, SolveRequest, SolveResponse};

use sudoku_engine::{placement, Grid, Position, PuzzleError};

/// Solve a puzzle request.
///
/// An absent or empty `puzzle` field reports the same way as an empty
/// string handed to the engine; validator errors and the unsolvable
/// case come back verbatim as `{"error": ...}` payloads.
pub fn solve(req: &SolveRequest) -> SolveResponse {
    match sudoku_engine::solve(req.puzzle.as_deref().unwrap_or("")) {
        Ok(solution) => SolveResponse::Solution { solution },
        Err(err) => SolveResponse::error(err.into()),
    }
}

/// Check whether a single placement is legal.
///
/// Checks run in a fixed order and the first failure wins: field
/// presence, puzzle validation, coordinate, value. A value that already
/// sits at the target cell is trivially valid and short-circuits the
/// axis checks; otherwise all three axes are evaluated and every
/// violated one is reported.
pub fn check(req: &CheckRequest) -> CheckResponse {
    let (puzzle, coordinate, value) = match (
        req.puzzle.as_deref(),
        req.coordinate.as_deref(),
        req.value.as_deref(),
    ) {
        (Some(p), Some(c), Some(v)) if !p.is_empty() && !c.is_empty() && !v.is_empty() => {
            (p, c, v)
        }
        _ => return CheckResponse::error(ApiError::MissingFields),
    };

    if let Err(err) = sudoku_engine::validate(puzzle) {
        return CheckResponse::error(err.into());
    }

    let pos = match Position::parse(coordinate) {
        Some(pos) => pos,
        None => return CheckResponse::error(ApiError::InvalidCoordinate),
    };

    let digit = match parse_value(value) {
        Some(digit) => digit,
        None => return CheckResponse::error(ApiError::InvalidValue),
    };

    let grid = match Grid::from_puzzle(puzzle) {
        Some(grid) => grid,
        // Cannot fail once validate has accepted the string.
        None => return CheckResponse::error(PuzzleError::InvalidLength.into()),
    };

    if grid.get(pos) == Some(digit) {
        return CheckResponse::valid();
    }

    let conflict = placement::conflicts(&grid, pos, digit);
    if conflict.is_empty() {
        CheckResponse::valid()
    } else {
        CheckResponse::invalid(conflict)
    }
}

// A value is a single digit 1-9, as a string.
fn parse_value(value: &str) -> Option<u8> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c @ '1'..='9'), None) => Some(c as u8 - b'0'),
        _ => None,
    }
}
