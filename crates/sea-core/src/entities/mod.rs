//! Entity structs for all seastate domain objects.
//!
//! Persistence belongs to the web layer's ORM; these structs are the plain
//! data the domain logic operates on. All derive `Serialize`, `Deserialize`,
//! and `JsonSchema` for JSON roundtrip and schema validation.

mod artifact;
mod contour;
mod measurement;
mod model;

pub use artifact::FileSizeRecord;
pub use contour::{ContourOption, ContourPath, DesignCondition, EnvironmentalContour};
pub use measurement::MeasurementFile;
pub use model::{ParameterValue, ProbabilisticModel, VariableDistribution};
