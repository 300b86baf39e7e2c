//! Error types for bigtype core

use thiserror::Error;

/// Result type for bigtype core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types
#[derive(Error, Debug)]
pub enum CoreError {
    /// A render parameter is out of range (scale < 1, or too large to render)
    #[error("{0}")]
    InvalidArgument(String),
}

impl CoreError {
    /// Shorthand for building an `InvalidArgument`
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        CoreError::InvalidArgument(msg.into())
    }
}
