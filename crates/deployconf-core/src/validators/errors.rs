//! Validator rejection types.

use crate::errors::SettingsError;

/// Reasons a candidate value can be rejected by a [`Validator`](super::Validator).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("'{value}' is not a boolean. Expected 'true' or 'false'")]
    NotBoolean { value: String },

    #[error("'{value}' is not an integer")]
    NotInteger { value: String },

    #[error("{value} is outside the allowed range [{low}, {high}]")]
    OutOfRange { value: i64, low: i64, high: i64 },

    #[error("'{value}' is not one of: {allowed}")]
    NotAllowed { value: String, allowed: String },

    #[error("'{value}' is not a valid URL: {reason}")]
    MalformedUrl { value: String, reason: String },

    #[error("'{value}' is not a valid path: {reason}")]
    MalformedPath { value: String, reason: String },

    #[error("Path list entry {index} ('{entry}') is invalid: {reason}")]
    InvalidPathEntry {
        index: usize,
        entry: String,
        reason: String,
    },

    #[error("'{value}' is not a valid manifest check list: {reason}")]
    InvalidManifestCheck { value: String, reason: String },
}

impl SettingsError for ValidationError {
    fn error_code(&self) -> &'static str {
        match self {
            ValidationError::NotBoolean { .. } => "VALIDATION_NOT_BOOLEAN",
            ValidationError::NotInteger { .. } => "VALIDATION_NOT_INTEGER",
            ValidationError::OutOfRange { .. } => "VALIDATION_OUT_OF_RANGE",
            ValidationError::NotAllowed { .. } => "VALIDATION_NOT_ALLOWED",
            ValidationError::MalformedUrl { .. } => "VALIDATION_MALFORMED_URL",
            ValidationError::MalformedPath { .. } => "VALIDATION_MALFORMED_PATH",
            ValidationError::InvalidPathEntry { .. } => "VALIDATION_INVALID_PATH_ENTRY",
            ValidationError::InvalidManifestCheck { .. } => "VALIDATION_INVALID_MANIFEST_CHECK",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let error = ValidationError::OutOfRange {
            value: 11,
            low: 0,
            high: 10,
        };
        assert_eq!(error.to_string(), "11 is outside the allowed range [0, 10]");
        assert_eq!(error.error_code(), "VALIDATION_OUT_OF_RANGE");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_not_allowed_display() {
        let error = ValidationError::NotAllowed {
            value: "hide".to_string(),
            allowed: "HIDE, SHOW".to_string(),
        };
        assert_eq!(error.to_string(), "'hide' is not one of: HIDE, SHOW");
    }
}
