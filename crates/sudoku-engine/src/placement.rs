//! Per-axis placement conflict checks.
//!
//! Each predicate answers "is placing `value` at `pos` in the existing
//! grid conflict-free along one axis?". The target cell is always excluded
//! by its position, never by value equality, so a digit already sitting at
//! the target cell does not count as a conflict with itself. The three
//! checks are independent: callers that need the full set of violated axes
//! use [`conflicts`], which always evaluates all of them.

use crate::{Grid, Position};
use serde::{Deserialize, Serialize};

/// One of the three uniqueness constraints on a placement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Row,
    Column,
    Region,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Row => write!(f, "row"),
            Axis::Column => write!(f, "column"),
            Axis::Region => write!(f, "region"),
        }
    }
}

/// True when no other column in the row of `pos` holds `value`
pub fn fits_row(grid: &Grid, pos: Position, value: u8) -> bool {
    for col in 0..9 {
        if col != pos.col && grid.get(Position::new(pos.row, col)) == Some(value) {
            return false;
        }
    }
    true
}

/// True when no other row in the column of `pos` holds `value`
pub fn fits_column(grid: &Grid, pos: Position, value: u8) -> bool {
    for row in 0..9 {
        if row != pos.row && grid.get(Position::new(row, pos.col)) == Some(value) {
            return false;
        }
    }
    true
}

/// True when no other cell in the 3x3 region of `pos` holds `value`
pub fn fits_region(grid: &Grid, pos: Position, value: u8) -> bool {
    let (band, stack) = pos.region();
    let start_row = band * 3;
    let start_col = stack * 3;
    for row in start_row..start_row + 3 {
        for col in start_col..start_col + 3 {
            let cell = Position::new(row, col);
            if cell != pos && grid.get(cell) == Some(value) {
                return false;
            }
        }
    }
    true
}

/// Violated axes for placing `value` at `pos`, in row/column/region order.
/// Empty means the placement is conflict-free.
pub fn conflicts(grid: &Grid, pos: Position, value: u8) -> Vec<Axis> {
    let mut violated = Vec::new();
    if !fits_row(grid, pos, value) {
        violated.push(Axis::Row);
    }
    if !fits_column(grid, pos, value) {
        violated.push(Axis::Column);
    }
    if !fits_region(grid, pos, value) {
        violated.push(Axis::Region);
    }
    violated
}
