//! Error types for the experiment runner and its collaborators.

use freewill_core::EngineError;
use freewill_env::EnvError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors surfaced by a run or by its reporting collaborators.
#[derive(Debug, Error)]
pub enum SimError {
    /// Parameters rejected by the engine; no result was produced
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// The observer's entropy source could not be built
    #[error(transparent)]
    Entropy(#[from] EnvError),

    /// An output directory or file could not be created or written
    #[error("Resource unavailable: {path}: {reason}")]
    ResourceUnavailable { path: PathBuf, reason: String },
}

impl SimError {
    /// Creates a resource error for `path`.
    pub fn resource(path: &Path, reason: impl std::fmt::Display) -> Self {
        Self::ResourceUnavailable {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }
}
