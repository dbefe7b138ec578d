use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::identity::Username;

/// An uploaded file containing measurement data.
///
/// Owned by one user and optionally shared with others. `stored_path` is the
/// location the upload handler wrote the file to (see
/// `sea_storage::paths::measurement_upload_path`).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MeasurementFile {
    pub id: String,
    pub owner: Username,
    pub shared_with: Vec<Username>,
    pub title: String,
    pub uploaded_at: DateTime<Utc>,
    pub stored_path: String,
}
