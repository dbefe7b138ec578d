//! # sea-storage
//!
//! Storage accounting for seastate.
//!
//! Computes the storage space a user's artifacts occupy — either by
//! enumerating persisted artifact metadata (object-store deployments) or by
//! walking the per-user media directory (filesystem deployments) — and
//! formats the total for display. Also owns upload-path generation for
//! measurement files.

mod error;
pub mod format;
pub mod paths;
pub mod usage;

pub use error::StorageError;
pub use format::format_size;
pub use usage::{ArtifactIndex, StorageAccountant};
