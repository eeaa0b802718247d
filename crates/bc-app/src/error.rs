//! Error types for the bc-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the library crates and
/// provides one error interface for every front end.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Case file error: {0}")]
    Project(#[from] bc_project::ProjectError),

    #[error("{0}")]
    Domain(#[from] bc_cycle::DomainError),

    #[error("Sweep error: {0}")]
    Sweep(#[from] bc_cycle::SweepError),

    #[error("Failed to write output file: {path}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for bc-app operations.
pub type AppResult<T> = Result<T, AppError>;
