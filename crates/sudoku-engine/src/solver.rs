use crate::Grid;

/// Backtracking Sudoku solver.
///
/// The search is deterministic: empty cells are visited in row-major
/// order and candidates tried in ascending order, so a given puzzle
/// always produces the same completion even when several exist.
#[derive(Debug, Clone, Copy, Default)]
pub struct Solver;

impl Solver {
    /// Create a new solver
    pub fn new() -> Self {
        Self
    }

    /// Solve the puzzle, returning the completed grid if one exists
    pub fn solve(&self, grid: &Grid) -> Option<Grid> {
        let mut working = grid.clone();
        if self.solve_recursive(&mut working) {
            Some(working)
        } else {
            None
        }
    }

    // Depth-first search over the empty cells, mutating the grid in
    // place and undoing each placement on backtrack.
    fn solve_recursive(&self, grid: &mut Grid) -> bool {
        let pos = match grid.first_empty() {
            Some(pos) => pos,
            // No empty cell left: the scan reached the end.
            None => return true,
        };

        for value in 1..=9 {
            if grid.placement_fits(pos, value) {
                grid.set(pos, Some(value));
                if self.solve_recursive(grid) {
                    return true;
                }
                grid.set(pos, None);
            }
        }

        false
    }
}
