//! The immutable setting definition.

use serde::Serialize;

use crate::validators::{ValidationError, Validator};

/// A named configuration key bound to an optional validator and an optional
/// default value.
///
/// Definitions are never mutated after construction. A consumer that needs a
/// "current value" tracks it outside the definition. `Clone` yields an
/// independent copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Setting {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    validator: Option<Validator>,
    #[serde(rename = "default", skip_serializing_if = "Option::is_none")]
    default_value: Option<String>,
}

impl Setting {
    pub fn new(
        name: impl Into<String>,
        validator: Option<Validator>,
        default_value: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            validator,
            default_value,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The bound validator. `None` means any text is accepted.
    pub fn validator(&self) -> Option<&Validator> {
        self.validator.as_ref()
    }

    /// The built-in default. `None` means the key is unset unless a layer
    /// supplies a value.
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    /// Validate a candidate against this setting's rule.
    pub fn validate(&self, candidate: &str) -> Result<String, ValidationError> {
        match &self.validator {
            Some(validator) => validator.validate(candidate),
            None => Ok(candidate.to_string()),
        }
    }

    /// Description of legal values, for templates and listings.
    pub fn describe(&self) -> String {
        self.validator
            .as_ref()
            .map(Validator::describe)
            .unwrap_or_else(|| "any text".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::catalog;

    #[test]
    fn test_unvalidated_setting_accepts_anything() {
        let setting = Setting::new("deployment.proxy.http.host", None, None);
        assert_eq!(setting.validate("").unwrap(), "");
        assert_eq!(setting.validate("proxy.local").unwrap(), "proxy.local");
        assert_eq!(setting.describe(), "any text");
    }

    #[test]
    fn test_validated_setting_delegates() {
        let setting = Setting::new(
            "deployment.cache.jarcompression",
            Some(catalog::ranged_integer(0, 10)),
            Some("0".to_string()),
        );
        assert_eq!(setting.default_value(), Some("0"));
        assert!(setting.validate("10").is_ok());
        assert!(setting.validate("11").is_err());
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Setting::new("deployment.log", Some(catalog::boolean()), Some("false".into()));
        let mut copy = original.clone();
        assert_eq!(copy, original);

        copy = Setting::new("deployment.log", Some(catalog::boolean()), Some("true".into()));
        assert_ne!(copy, original);
        assert_eq!(original.default_value(), Some("false"));
    }

    #[test]
    fn test_serialize_omits_absent_fields() {
        let setting = Setting::new("deployment.jre.dir", None, None);
        let json = serde_json::to_string(&setting).unwrap();
        assert_eq!(json, r#"{"name":"deployment.jre.dir"}"#);

        let setting = Setting::new("deployment.log", Some(catalog::boolean()), Some("false".into()));
        let json = serde_json::to_string(&setting).unwrap();
        assert_eq!(
            json,
            r#"{"name":"deployment.log","validator":{"kind":"boolean"},"default":"false"}"#
        );
    }
}
