//! Errors raised when reading result cells.

use thiserror::Error;

/// Access violations on a result cell under a checking connector.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultError {
    #[error("accessing {accessor} in non-existing row")]
    NonExistingRow { accessor: &'static str },

    #[error("accessing value of NULL field")]
    NullField,
}

/// Result type for result cell access.
pub type ResultEntryResult<T> = Result<T, ResultError>;
