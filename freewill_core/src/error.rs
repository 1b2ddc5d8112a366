//! Error types for the statistics engine.

use thiserror::Error;

/// Errors raised by the engine before any generation or selection proceeds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// A size, count, label or index violates the experiment's constraints
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl EngineError {
    /// Creates an invalid parameter error.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }
}
