//! Error types for cowpipe core

use thiserror::Error;

/// Result type for cowpipe core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types
#[derive(Error, Debug)]
pub enum CoreError {
    /// Reading the message or writing the balloon failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
