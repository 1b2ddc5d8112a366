//! Error types for the entropy abstraction.

use thiserror::Error;

/// Errors that can occur while building an entropy source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvError {
    /// The OS entropy source could not seed a generator
    #[error("Entropy unavailable: {0}")]
    EntropyUnavailable(String),
}

impl EnvError {
    /// Creates an entropy error.
    pub fn entropy(cause: impl std::fmt::Display) -> Self {
        Self::EntropyUnavailable(cause.to_string())
    }
}
