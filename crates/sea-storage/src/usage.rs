//! Storage accounting for a user's artifacts.
//!
//! Invoked from the profile page: given a user, sum the bytes their
//! measurement files and generated reports occupy and render the total. Two
//! mutually exclusive modes, selected by `StorageConfig::mode`:
//!
//! - object store: artifact sizes come from the [`ArtifactIndex`]
//!   collaborator (the web layer's query over persisted artifact metadata),
//! - filesystem: sizes come from recursively walking the per-user media
//!   directory.

use std::fs;
use std::path::Path;

use sea_config::{StorageConfig, StorageMode};
use sea_core::entities::FileSizeRecord;
use sea_core::identity::Username;

use crate::error::StorageError;
use crate::format::format_size;

/// Size metadata for persisted artifacts, supplied by the web layer.
pub trait ArtifactIndex {
    /// All stored artifacts (measurement uploads, generated reports) owned
    /// by `owner`.
    fn file_sizes(&self, owner: &Username) -> Result<Vec<FileSizeRecord>, StorageError>;
}

/// Computes the storage space a user's files occupy.
#[derive(Debug, Clone)]
pub struct StorageAccountant {
    config: StorageConfig,
}

impl StorageAccountant {
    #[must_use]
    pub const fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    /// Total bytes stored for `owner`.
    ///
    /// In filesystem mode a missing user directory sums to zero (the user
    /// has not uploaded anything yet); any other I/O failure propagates so
    /// a partial sum never silently omits unreadable entries.
    pub fn used_bytes(
        &self,
        owner: &Username,
        index: &dyn ArtifactIndex,
    ) -> Result<u64, StorageError> {
        match self.config.mode {
            StorageMode::ObjectStore => {
                let records = index.file_sizes(owner)?;
                Ok(records.iter().map(|record| record.bytes).sum())
            }
            StorageMode::Filesystem => {
                let root = self.config.user_root(owner);
                if !root.exists() {
                    tracing::debug!(user = %owner, root = %root.display(), "no user directory yet");
                    return Ok(0);
                }
                directory_size(&root)
            }
        }
    }

    /// Total storage for `owner`, formatted for display (e.g. `"1.5 KB"`).
    pub fn storage_used(
        &self,
        owner: &Username,
        index: &dyn ArtifactIndex,
    ) -> Result<String, StorageError> {
        let total = self.used_bytes(owner, index)?;
        tracing::debug!(user = %owner, total, "storage accounted");
        Ok(format_size(total))
    }
}

/// Sum the sizes of all regular files under `dir`, recursing into
/// subdirectories. Symlinks are not followed.
fn directory_size(dir: &Path) -> Result<u64, StorageError> {
    let mut total = 0;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            total += directory_size(&entry.path())?;
        } else if file_type.is_file() {
            total += entry.metadata()?.len();
        }
    }
    Ok(total)
}
