//! Parameter validation rules for distribution fitting.
//!
//! The families have hard mathematical requirements (a Weibull or Normal
//! scale parameter must be strictly positive for the density to be defined).
//! Enforcing them when the model form is submitted prevents numerical
//! failures later during contour computation.
//!
//! The rules are a single lookup table keyed by `(family, role)`. Pairs
//! outside the table carry no constraint and always validate.

use crate::entities::{ParameterValue, ProbabilisticModel, VariableDistribution};
use crate::enums::{DistributionFamily, ParameterRole};
use crate::errors::ValidationError;

/// One admissibility rule for a `(family, role)` pair.
#[derive(Debug, Clone, Copy)]
pub struct ParameterRule {
    pub family: DistributionFamily,
    pub role: ParameterRole,
    pub admissible: fn(f64) -> bool,
    pub message: &'static str,
}

fn positive(x: f64) -> bool {
    x > 0.0
}

/// The constraint table. Extending it to a new family is one new row.
pub const PARAMETER_RULES: &[ParameterRule] = &[
    ParameterRule {
        family: DistributionFamily::Normal,
        role: ParameterRole::Scale,
        admissible: positive,
        message: "The Normal distribution's scale parameter, sigma, must be > 0.",
    },
    ParameterRule {
        family: DistributionFamily::Weibull,
        role: ParameterRole::Scale,
        admissible: positive,
        message: "The Weibull distribution's scale parameter, lambda, must be > 0.",
    },
    ParameterRule {
        family: DistributionFamily::Weibull,
        role: ParameterRole::Shape,
        admissible: positive,
        message: "The Weibull distribution's shape parameter, k, must be > 0.",
    },
    ParameterRule {
        family: DistributionFamily::LogNormal2,
        role: ParameterRole::Shape,
        admissible: positive,
        message: "The Log-normal distribution's shape parameter, sigma, must be > 0.",
    },
];

/// Look up the rule for a `(family, role)` pair, if one exists.
#[must_use]
pub fn rule_for(family: DistributionFamily, role: ParameterRole) -> Option<&'static ParameterRule> {
    PARAMETER_RULES
        .iter()
        .find(|rule| rule.family == family && rule.role == role)
}

/// Validate the constant term `x0` of one parameter.
///
/// Succeeds for every pair outside the rule table, regardless of the sign or
/// magnitude of `x0`. On violation the error field is the role name, ready
/// for the caller to prefix with the variable symbol.
pub fn validate_constant(
    family: DistributionFamily,
    role: ParameterRole,
    x0: f64,
) -> Result<(), ValidationError> {
    match rule_for(family, role) {
        Some(rule) if !(rule.admissible)(x0) => {
            Err(ValidationError::new(role.as_str(), rule.message))
        }
        _ => Ok(()),
    }
}

impl ParameterValue {
    /// Validate this parameter against the rules for `family`.
    ///
    /// `x0` is checked even when the parameter is a dependency function of
    /// another variable; in that case `x0` is the base coefficient rather
    /// than the parameter value itself.
    pub fn validate(&self, family: DistributionFamily) -> Result<(), ValidationError> {
        validate_constant(family, self.role, self.x0)
    }
}

impl VariableDistribution {
    /// Validate every parameter of this variable's distribution.
    ///
    /// Reports the first violation with the field labelled
    /// `"<symbol>.<role>"`, e.g. `"Hs.scale"`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for parameter in &self.parameters {
            parameter.validate(self.family).map_err(|error| {
                ValidationError::new(format!("{}.{}", self.symbol, error.field), error.message)
            })?;
        }
        Ok(())
    }
}

impl ProbabilisticModel {
    /// Validate every variable of the model.
    pub fn validate(&self) -> Result<(), ValidationError> {
        for variable in &self.variables {
            variable.validate()?;
        }
        Ok(())
    }
}

/// Validate the extension of an uploaded measurement file.
///
/// `allowed` holds bare extensions without the dot, compared
/// case-insensitively. Errors are attributed to the `measure_file` field.
pub fn validate_extension(filename: &str, allowed: &[String]) -> Result<(), ValidationError> {
    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());

    match extension {
        Some(ref ext) if allowed.iter().any(|a| a.eq_ignore_ascii_case(ext)) => Ok(()),
        _ => Err(ValidationError::new(
            "measure_file",
            format!(
                "Unsupported file extension in '{filename}'. Allowed: {}.",
                allowed.join(", ")
            ),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::DependencyFunction;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(DistributionFamily::Weibull, ParameterRole::Scale, 0.0)]
    #[case(DistributionFamily::Weibull, ParameterRole::Scale, -1.0)]
    #[case(DistributionFamily::Weibull, ParameterRole::Shape, 0.0)]
    #[case(DistributionFamily::Normal, ParameterRole::Scale, 0.0)]
    #[case(DistributionFamily::Normal, ParameterRole::Scale, -3.2)]
    #[case(DistributionFamily::LogNormal2, ParameterRole::Shape, 0.0)]
    fn constrained_pairs_reject_non_positive(
        #[case] family: DistributionFamily,
        #[case] role: ParameterRole,
        #[case] x0: f64,
    ) {
        assert!(validate_constant(family, role, x0).is_err());
    }

    #[rstest]
    #[case(DistributionFamily::Weibull, ParameterRole::Scale, 0.001)]
    #[case(DistributionFamily::Weibull, ParameterRole::Shape, 1.471)]
    #[case(DistributionFamily::Normal, ParameterRole::Scale, 5.0)]
    #[case(DistributionFamily::LogNormal2, ParameterRole::Shape, 0.5)]
    fn constrained_pairs_accept_positive(
        #[case] family: DistributionFamily,
        #[case] role: ParameterRole,
        #[case] x0: f64,
    ) {
        assert!(validate_constant(family, role, x0).is_ok());
    }

    #[rstest]
    #[case(DistributionFamily::Normal, ParameterRole::Shape)]
    #[case(DistributionFamily::Normal, ParameterRole::Location)]
    #[case(DistributionFamily::Weibull, ParameterRole::Location)]
    #[case(DistributionFamily::LogNormal2, ParameterRole::Scale)]
    #[case(DistributionFamily::LogNormal2, ParameterRole::Location)]
    #[case(DistributionFamily::KernelDensity, ParameterRole::Scale)]
    #[case(DistributionFamily::KernelDensity, ParameterRole::Shape)]
    #[case(DistributionFamily::KernelDensity, ParameterRole::Location)]
    fn unconstrained_pairs_accept_anything(
        #[case] family: DistributionFamily,
        #[case] role: ParameterRole,
    ) {
        for x0 in [-1.0e9, -1.0, 0.0, 1.0, 1.0e9] {
            assert!(validate_constant(family, role, x0).is_ok());
        }
    }

    #[test]
    fn error_carries_role_field_and_message() {
        let error = validate_constant(DistributionFamily::Weibull, ParameterRole::Scale, -1.0)
            .unwrap_err();
        assert_eq!(error.field, "scale");
        assert_eq!(
            error.message,
            "The Weibull distribution's scale parameter, lambda, must be > 0."
        );
    }

    #[test]
    fn x0_checked_even_for_function_parameters() {
        // x0 is the base coefficient when the parameter depends on another
        // variable; it is still subject to the rule table.
        let parameter = ParameterValue {
            role: ParameterRole::Scale,
            function: DependencyFunction::PowerFunction,
            x0: -0.1,
            x1: 1.489,
            x2: 0.1901,
            dependency: Some("Hs".to_string()),
        };
        assert!(parameter.validate(DistributionFamily::Weibull).is_err());
    }

    #[test]
    fn variable_validation_prefixes_symbol() {
        let variable = VariableDistribution {
            name: "significant wave height".to_string(),
            symbol: "Hs".to_string(),
            family: DistributionFamily::Weibull,
            parameters: vec![
                ParameterValue::constant(ParameterRole::Scale, 2.776),
                ParameterValue::constant(ParameterRole::Shape, 0.0),
                ParameterValue::constant(ParameterRole::Location, 0.888),
            ],
        };
        let error = variable.validate().unwrap_err();
        assert_eq!(error.field, "Hs.shape");
    }

    #[test]
    fn valid_two_variable_model_passes() {
        let model = ProbabilisticModel {
            id: "pm-1".to_string(),
            owner: "max_mustermann".into(),
            shared_with: vec![],
            collection_name: "direct input Vanem2012".to_string(),
            created_at: chrono::Utc::now(),
            measurement_id: None,
            variables: vec![
                VariableDistribution {
                    name: "significant wave height".to_string(),
                    symbol: "Hs".to_string(),
                    family: DistributionFamily::Weibull,
                    parameters: vec![
                        ParameterValue::constant(ParameterRole::Scale, 2.776),
                        ParameterValue::constant(ParameterRole::Shape, 1.471),
                        ParameterValue::constant(ParameterRole::Location, 0.888),
                    ],
                },
                VariableDistribution {
                    name: "peak period".to_string(),
                    symbol: "Tp".to_string(),
                    family: DistributionFamily::LogNormal2,
                    parameters: vec![
                        ParameterValue {
                            role: ParameterRole::Scale,
                            function: DependencyFunction::PowerFunction,
                            x0: 0.1,
                            x1: 1.489,
                            x2: 0.1901,
                            dependency: Some("Hs".to_string()),
                        },
                        ParameterValue {
                            role: ParameterRole::Shape,
                            function: DependencyFunction::Exponential,
                            x0: 0.04,
                            x1: 0.1748,
                            x2: -0.2243,
                            dependency: Some("Hs".to_string()),
                        },
                        ParameterValue::constant(ParameterRole::Location, 0.0),
                    ],
                },
            ],
        };
        assert!(model.validate().is_ok());
    }

    #[rstest]
    #[case("data.csv", true)]
    #[case("DATA.CSV", true)]
    #[case("points.2019.csv", true)]
    #[case("plot.png", false)]
    #[case("no_extension", false)]
    fn extension_check(#[case] filename: &str, #[case] ok: bool) {
        let allowed = vec!["csv".to_string()];
        assert_eq!(validate_extension(filename, &allowed).is_ok(), ok);
    }

    #[test]
    fn extension_error_names_the_upload_field() {
        let allowed = vec!["csv".to_string()];
        let error = validate_extension("beispiel.png", &allowed).unwrap_err();
        assert_eq!(error.field, "measure_file");
        assert!(error.message.contains("csv"));
    }
}
