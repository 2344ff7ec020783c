use serde::{Deserialize, Serialize};

/// A user-input error reported by the engine.
///
/// Every validation failure is an ordinary `Err` value; the engine never
/// panics on malformed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PuzzleError {
    /// The puzzle string was absent or empty
    MissingField,
    /// The puzzle string is not exactly 81 characters
    InvalidLength,
    /// The puzzle string contains a character other than 1-9 or '.'
    InvalidCharacters,
    /// The puzzle admits no legal completion
    Unsolvable,
}

// Message text is consumed verbatim by API clients; do not reword.
impl std::fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PuzzleError::MissingField => write!(f, "Required field missing"),
            PuzzleError::InvalidLength => {
                write!(f, "Expected puzzle to be 81 characters long")
            }
            PuzzleError::InvalidCharacters => write!(f, "Invalid characters in puzzle"),
            PuzzleError::Unsolvable => write!(f, "Puzzle cannot be solved"),
        }
    }
}

impl std::error::Error for PuzzleError {}
