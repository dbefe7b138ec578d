//! Cross-cutting error types for seastate.
//!
//! This module defines errors that can originate from any crate in the
//! system. Storage and configuration errors are defined in their respective
//! crates; validation errors live here because the rule table does.

use thiserror::Error;

/// A field-attributed validation failure.
///
/// Carries the form field the web layer should attach the message to, e.g.
/// `"Hs.scale"` for the scale parameter of the variable with symbol `Hs`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed for '{field}': {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Errors that can be raised by any seastate crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (parameter bounds, file extension).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
