use sudoku_engine::PuzzleError;

/// An input error detected at the API boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    /// One or more of puzzle/coordinate/value absent or empty
    MissingFields,
    /// Coordinate outside A1-I9
    InvalidCoordinate,
    /// Value outside 1-9
    InvalidValue,
    /// Error reported by the puzzle engine
    Puzzle(PuzzleError),
}

// Message text is part of the payload contract; do not reword.
impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::MissingFields => write!(f, "Required field(s) missing"),
            ApiError::InvalidCoordinate => write!(f, "Invalid coordinate"),
            ApiError::InvalidValue => write!(f, "Invalid value"),
            ApiError::Puzzle(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<PuzzleError> for ApiError {
    fn from(err: PuzzleError) -> Self {
        ApiError::Puzzle(err)
    }
}
