//! Error types for grid loading and geometry operations.

use thiserror::Error;

/// Result type alias using InvalidInputError.
pub type FieldResult<T> = Result<T, InvalidInputError>;

/// Failure to obtain a usable grid or feature set from an external source.
///
/// All variants are fatal at startup; the message always names the field or
/// file that was at fault.
#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("Missing required variable: {0}")]
    MissingVariable(String),

    #[error("Dimension mismatch for '{variable}': expected {expected}, found {found}")]
    DimensionMismatch {
        variable: String,
        expected: String,
        found: String,
    },

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
}

/// Empty or inconsistent arrays handed to a numeric routine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    #[error("Grid has no cells")]
    EmptyGrid,

    #[error("Axis '{0}' has no coordinates")]
    EmptyAxis(&'static str),

    #[error("Grid shape mismatch: {width}x{height} axes but {values} values")]
    ShapeMismatch {
        width: usize,
        height: usize,
        values: usize,
    },
}

/// A zero-width (or non-finite) normalization range.
///
/// Recoverable: the colormap falls back to a constant midpoint color.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("Degenerate display range [{low}, {high}]; using constant midpoint color")]
pub struct DegenerateRangeWarning {
    pub low: f64,
    pub high: f64,
}
