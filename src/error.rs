//! Error types for puzzle loading and solver setup.

use std::path::PathBuf;
use thiserror::Error;

/// Reasons a puzzle description can be rejected. All of them are fatal.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read puzzle input: {0}")]
    Io(#[from] std::io::Error),

    #[error("missing {field}")]
    MissingField { field: String },

    #[error("invalid {field}: '{token}' is not a non-negative integer")]
    InvalidToken { field: String, token: String },

    #[error("board dimension must be positive")]
    ZeroDimension,

    #[error("colour count must be positive")]
    ZeroColorCount,

    #[error("colour count {value} is out of range (must be below {max})")]
    ColorCountOutOfRange { value: u32, max: u32 },
}

#[derive(Debug, Error)]
pub enum SolverError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("could not start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("could not save solution to '{}': {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no documents directory available to save solutions into")]
    NoSaveDirectory,
}

pub type Result<T> = std::result::Result<T, SolverError>;
