use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::ContourMethod;
use crate::identity::Username;

/// An environmental contour computed from a probabilistic model.
///
/// Records the settings used to create the contour alongside the resulting
/// paths and the generated report artifact.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct EnvironmentalContour {
    pub id: String,
    pub owner: Username,
    pub shared_with: Vec<Username>,
    pub probabilistic_model_id: String,
    pub fitting_method: String,
    pub contour_method: ContourMethod,
    /// Return period in years.
    pub return_period: f64,
    /// Sea state duration in hours.
    pub state_duration: f64,
    pub options: Vec<ContourOption>,
    pub paths: Vec<ContourPath>,
    /// Location of the generated report, if one was produced.
    pub report_path: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Additional key/value option describing how a contour was created.
///
/// Different contour methods take different options (e.g. "number of points
/// on the contour" for IFORM, "grid size" for highest density), so options
/// are stored as an open dictionary rather than fixed fields.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ContourOption {
    pub key: String,
    pub value: String,
}

/// One closed path of an environmental contour.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ContourPath {
    pub conditions: Vec<DesignCondition>,
}

/// A single extreme environmental design condition on a contour path.
///
/// One scalar per model dimension, in variable order.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DesignCondition(pub Vec<f64>);
