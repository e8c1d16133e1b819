//! Error types for backlog-sync

use thiserror::Error;

/// Result type alias for backlog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for backlog operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Document parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}
