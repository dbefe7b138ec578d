//! Measurement upload configuration.

use serde::{Deserialize, Serialize};

/// Default allowed upload extensions.
fn default_allowed_extensions() -> Vec<String> {
    vec![String::from("csv")]
}

/// Default maximum title length.
const fn default_max_title_len() -> usize {
    50
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UploadConfig {
    /// File extensions (without the dot) accepted for measurement uploads.
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,

    /// Maximum length of a measurement file title.
    #[serde(default = "default_max_title_len")]
    pub max_title_len: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            allowed_extensions: default_allowed_extensions(),
            max_title_len: default_max_title_len(),
        }
    }
}
