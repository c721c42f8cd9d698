//! Error handling module for the cppdep CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application. `anyhow` is reserved for the
//! outermost `main` boundary only.

use thiserror::Error;

use cppdep_drv::{AnalysisError, DriverError};

/// Main error type for the cppdep CLI application.
#[derive(Error, Debug)]
pub enum CliError {
    /// Error when a required configuration is missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Error when input validation fails (bad `-D` flag, no inputs, etc).
    #[error("validation error: {0}")]
    Validation(String),

    /// A translation unit could not be analyzed.
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    /// Path resolution or glob expansion failed.
    #[error(transparent)]
    Driver(#[from] DriverError),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using CliError.
pub type Result<T> = std::result::Result<T, CliError>;
