use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::identity::Username;

/// Byte size of one stored artifact (measurement upload or generated report)
/// attributed to its owning user.
///
/// Not persisted itself — a view the artifact index derives on demand for the
/// storage accountant.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct FileSizeRecord {
    pub owner: Username,
    pub bytes: u64,
}
