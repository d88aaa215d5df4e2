//! Catalog integrity and access-control errors.

use crate::errors::SettingsError;
use crate::validators::ValidationError;

/// Defects in a setting catalog, discovered while it is being built.
///
/// These are never recoverable at runtime: a catalog that fails to build is a
/// programming error in its definition table.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Setting name at position {position} is empty or contains whitespace: '{name}'")]
    MalformedName { position: usize, name: String },

    #[error("Setting '{name}' is defined more than once")]
    DuplicateName { name: String },

    #[error("Setting '{name}' has an integer range with low {low} above high {high}")]
    InvertedRange { name: String, low: i64, high: i64 },

    #[error("Setting '{name}' has an enum validator with no allowed values")]
    EmptyEnum { name: String },

    #[error("Default '{value}' for setting '{name}' fails its own validator: {source}")]
    InvalidDefault {
        name: String,
        value: String,
        #[source]
        source: ValidationError,
    },
}

impl SettingsError for CatalogError {
    fn error_code(&self) -> &'static str {
        match self {
            CatalogError::MalformedName { .. } => "CATALOG_MALFORMED_NAME",
            CatalogError::DuplicateName { .. } => "CATALOG_DUPLICATE_NAME",
            CatalogError::InvertedRange { .. } => "CATALOG_INVERTED_RANGE",
            CatalogError::EmptyEnum { .. } => "CATALOG_EMPTY_ENUM",
            CatalogError::InvalidDefault { .. } => "CATALOG_INVALID_DEFAULT",
        }
    }
}

/// Denials raised by the host's access-control layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    #[error("Read access denied for '{path}'")]
    ReadDenied { path: String },
}

impl SettingsError for AccessError {
    fn error_code(&self) -> &'static str {
        match self {
            AccessError::ReadDenied { .. } => "ACCESS_READ_DENIED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_name_display() {
        let error = CatalogError::DuplicateName {
            name: "deployment.log".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Setting 'deployment.log' is defined more than once"
        );
        assert_eq!(error.error_code(), "CATALOG_DUPLICATE_NAME");
        assert!(!error.is_user_error());
    }

    #[test]
    fn test_invalid_default_keeps_source() {
        let error = CatalogError::InvalidDefault {
            name: "deployment.log".to_string(),
            value: "yes".to_string(),
            source: ValidationError::NotBoolean {
                value: "yes".to_string(),
            },
        };
        let source = std::error::Error::source(&error).unwrap();
        assert_eq!(
            source.to_string(),
            "'yes' is not a boolean. Expected 'true' or 'false'"
        );
    }

    #[test]
    fn test_read_denied_display() {
        let error = AccessError::ReadDenied {
            path: "/home/u/.config/deployconf/deployment.properties".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Read access denied for '/home/u/.config/deployconf/deployment.properties'"
        );
        assert_eq!(error.error_code(), "ACCESS_READ_DENIED");
    }
}
