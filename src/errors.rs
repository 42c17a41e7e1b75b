use std::result::Result as StdResult;

use thiserror::Error;

/// Failures raised by the activity stores, projection inputs, and configuration layer.
#[derive(Debug, Error, PartialEq)]
pub enum ActivityError {
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Index {index} is out of range for {len} record(s)")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Storage error: {0}")]
    Storage(String),
}

impl ActivityError {
    pub fn validation(message: impl Into<String>) -> Self {
        ActivityError::Validation(message.into())
    }

    /// Soft failures are recoverable notices that leave the session untouched.
    pub fn is_soft(&self) -> bool {
        matches!(
            self,
            ActivityError::Validation(_) | ActivityError::IndexOutOfRange { .. }
        )
    }
}

pub type Result<T> = StdResult<T, ActivityError>;

impl From<std::io::Error> for ActivityError {
    fn from(err: std::io::Error) -> Self {
        ActivityError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for ActivityError {
    fn from(err: serde_json::Error) -> Self {
        ActivityError::Config(err.to_string())
    }
}
