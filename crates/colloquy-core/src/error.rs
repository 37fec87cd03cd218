//! Error types for the Colloquy core library.

use thiserror::Error;

/// Result type alias using the Colloquy `Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types shared across framework crates.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
