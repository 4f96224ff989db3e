//! Error types for NetCDF parsing operations.

use field_common::DataSourceError;
use thiserror::Error;

/// Result type for NetCDF parser operations.
pub type NetCdfResult<T> = Result<T, NetCdfError>;

/// Error types for NetCDF parsing.
#[derive(Error, Debug)]
pub enum NetCdfError {
    /// File I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Missing required variable or attribute
    #[error("Missing required data: {0}")]
    MissingData(String),

    /// Variable shape disagrees with the coordinate axes
    #[error("Dimension mismatch for '{variable}': expected {expected}, found {found}")]
    DimensionMismatch {
        variable: String,
        expected: String,
        found: String,
    },

    /// Invalid data format
    #[error("Invalid data format: {0}")]
    InvalidFormat(String),
}

impl From<NetCdfError> for DataSourceError {
    fn from(err: NetCdfError) -> Self {
        match err {
            NetCdfError::IoError(e) => DataSourceError::Io(e),
            NetCdfError::MissingData(name) => DataSourceError::MissingVariable(name),
            NetCdfError::DimensionMismatch {
                variable,
                expected,
                found,
            } => DataSourceError::DimensionMismatch {
                variable,
                expected,
                found,
            },
            NetCdfError::InvalidFormat(msg) => DataSourceError::InvalidFormat(msg),
        }
    }
}
