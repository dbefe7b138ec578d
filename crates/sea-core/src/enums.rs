//! Distribution, parameter, and contour enums for seastate.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! The string forms returned by `as_str()` are what the web layer stores and
//! renders in form choices.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// DistributionFamily
// ---------------------------------------------------------------------------

/// Parametric family of the distribution fitted to a single environmental
/// variable, e.g. a Weibull distribution for significant wave height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DistributionFamily {
    Normal,
    Weibull,
    /// Two-parameter log-normal.
    LogNormal2,
    KernelDensity,
}

impl DistributionFamily {
    /// Return the string representation used in storage and form choices.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Weibull => "weibull",
            Self::LogNormal2 => "log_normal2",
            Self::KernelDensity => "kernel_density",
        }
    }

    /// Human-readable label rendered in the model-fitting form.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Normal => "Normal Distribution",
            Self::Weibull => "Weibull",
            Self::LogNormal2 => "Log-Normal",
            Self::KernelDensity => "Kernel Density",
        }
    }
}

impl fmt::Display for DistributionFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ParameterRole
// ---------------------------------------------------------------------------

/// Which of the three standard distribution parameters a value stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ParameterRole {
    Scale,
    Shape,
    Location,
}

impl ParameterRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scale => "scale",
            Self::Shape => "shape",
            Self::Location => "location",
        }
    }
}

impl fmt::Display for ParameterRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// DependencyFunction
// ---------------------------------------------------------------------------

/// How a distribution parameter relates to another variable.
///
/// `None` means the parameter is the constant `x0`. The two function kinds
/// express the parameter as a power function or exponential of the dependency
/// variable, with coefficients `x0`, `x1`, `x2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DependencyFunction {
    None,
    PowerFunction,
    Exponential,
}

impl DependencyFunction {
    /// Check whether the parameter is a plain constant.
    #[must_use]
    pub const fn is_constant(self) -> bool {
        matches!(self, Self::None)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::PowerFunction => "power_function",
            Self::Exponential => "exponential",
        }
    }
}

impl fmt::Display for DependencyFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ContourMethod
// ---------------------------------------------------------------------------

/// Method used to compute an environmental contour from a fitted model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ContourMethod {
    /// Inverse first-order reliability method.
    Iform,
    /// Highest density contour.
    HighestDensity,
}

impl ContourMethod {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Iform => "iform",
            Self::HighestDensity => "highest_density",
        }
    }
}

impl fmt::Display for ContourMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
