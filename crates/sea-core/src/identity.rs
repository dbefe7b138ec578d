use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Owning user of a measurement file, model, or contour.
///
/// The web layer resolves the authenticated user and hands the name down
/// explicitly — validators and the storage accountant never reach into
/// request or session state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Username {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_plain_string() {
        let user = Username::new("max_mustermann");
        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(json, "\"max_mustermann\"");
        let back: Username = serde_json::from_str(&json).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn display_is_the_raw_name() {
        assert_eq!(Username::from("anna").to_string(), "anna");
    }
}
