use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{DependencyFunction, DistributionFamily, ParameterRole};
use crate::identity::Username;

/// A multivariate probabilistic model, e.g. a sea state description.
///
/// Holds one [`VariableDistribution`] per environmental variable. Can be
/// fitted from a measurement file or entered directly.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ProbabilisticModel {
    pub id: String,
    pub owner: Username,
    pub shared_with: Vec<Username>,
    pub collection_name: String,
    pub created_at: DateTime<Utc>,
    /// Measurement file the model was fitted from, if any.
    pub measurement_id: Option<String>,
    pub variables: Vec<VariableDistribution>,
}

/// The distribution of a single random variable.
///
/// For example significant wave height: `name` "significant wave height",
/// `symbol` "Hs", `family` Weibull, plus the scale, shape, and location
/// parameters.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct VariableDistribution {
    pub name: String,
    pub symbol: String,
    pub family: DistributionFamily,
    pub parameters: Vec<ParameterValue>,
}

/// One parameter of a distribution, e.g. scale.
///
/// Either a constant (`function` is `None`, value `x0`) or a function of
/// another variable, in which case `x0`, `x1`, `x2` are the coefficients of
/// the power function or exponential and `dependency` names the variable it
/// depends on.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ParameterValue {
    pub role: ParameterRole,
    pub function: DependencyFunction,
    pub x0: f64,
    pub x1: f64,
    pub x2: f64,
    pub dependency: Option<String>,
}

impl ParameterValue {
    /// A constant parameter with value `x0`.
    #[must_use]
    pub const fn constant(role: ParameterRole, x0: f64) -> Self {
        Self {
            role,
            function: DependencyFunction::None,
            x0,
            x1: 0.0,
            x2: 0.0,
            dependency: None,
        }
    }
}
