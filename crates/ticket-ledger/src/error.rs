//! Error types for the CLI.

use thiserror::Error;

/// Errors that can occur while running the interactive menu.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON listing could not be produced.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// A command-line argument was not recognised.
    #[error("unknown argument: {0}")]
    UnknownArgument(String),
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
