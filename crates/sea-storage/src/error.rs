//! Storage error types.

use thiserror::Error;

/// Errors that can occur while accounting storage or building upload paths.
#[derive(Debug, Error)]
pub enum StorageError {
    /// I/O error while walking a user's media directory.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The artifact index could not supply size metadata.
    #[error("Artifact index error: {0}")]
    Index(String),

    /// The system entropy source failed while generating an upload suffix.
    #[error("Entropy source error: {0}")]
    Entropy(String),
}
