//! Artifact storage configuration.

use sea_core::identity::Username;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where user artifacts live, and therefore how storage use is accounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageMode {
    /// Artifacts are held in object storage; sizes come from the artifact
    /// index.
    ObjectStore,
    /// Artifacts are held on local disk under `media_root`; sizes come from
    /// walking the per-user directory.
    Filesystem,
}

/// Default media root.
fn default_media_root() -> PathBuf {
    PathBuf::from("media")
}

/// Default subdirectory for user-generated artifacts.
fn default_user_generated_dir() -> String {
    String::from("user_generated")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Storage backend selection.
    #[serde(default = "StorageConfig::default_mode")]
    pub mode: StorageMode,

    /// Base directory for all media files.
    #[serde(default = "default_media_root")]
    pub media_root: PathBuf,

    /// Subdirectory of `media_root` holding per-user artifact trees.
    #[serde(default = "default_user_generated_dir")]
    pub user_generated_dir: String,
}

impl StorageConfig {
    const fn default_mode() -> StorageMode {
        StorageMode::Filesystem
    }

    /// Root directory of one user's artifacts:
    /// `<media_root>/<user_generated_dir>/<username>`.
    #[must_use]
    pub fn user_root(&self, owner: &Username) -> PathBuf {
        self.media_root
            .join(&self.user_generated_dir)
            .join(owner.as_str())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            mode: Self::default_mode(),
            media_root: default_media_root(),
            user_generated_dir: default_user_generated_dir(),
        }
    }
}
