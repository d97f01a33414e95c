//! Error types for Devcon

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DevconError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Precondition failed: {0}")]
    Precondition(String),

    #[error("{action} failed for '{target}': {message}")]
    RuntimeOp {
        action: String,
        target: String,
        message: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Container runtime not found in PATH. Is docker installed?")]
    RuntimeUnavailable,
}

impl DevconError {
    /// Shorthand for a failed runtime call.
    pub fn runtime_op(action: &str, target: &str, message: impl Into<String>) -> Self {
        DevconError::RuntimeOp {
            action: action.to_string(),
            target: target.to_string(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DevconError>;
