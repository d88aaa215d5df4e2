//! Layer loading errors.

use crate::errors::SettingsError;

#[derive(Debug, thiserror::Error)]
pub enum LayerError {
    #[error("Malformed entry in '{origin}' at line {line}: {reason}")]
    Malformed {
        origin: String,
        line: usize,
        reason: String,
    },

    #[error("Failed to parse TOML layer '{origin}': {message}")]
    InvalidToml { origin: String, message: String },

    #[error("Unsupported {kind} value for '{key}' in '{origin}'")]
    UnsupportedValue {
        origin: String,
        key: String,
        kind: &'static str,
    },

    #[error("Failed to read layer file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid system configuration pointer '{value}': {reason}")]
    InvalidSystemConfigRef { value: String, reason: String },

    #[error("Mandatory system configuration '{location}' is unavailable: {reason}")]
    MandatorySystemConfigUnavailable { location: String, reason: String },
}

impl LayerError {
    /// Whether the underlying cause is a missing file.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            LayerError::Read { source, .. } if source.kind() == std::io::ErrorKind::NotFound
        )
    }
}

impl SettingsError for LayerError {
    fn error_code(&self) -> &'static str {
        match self {
            LayerError::Malformed { .. } => "LAYER_MALFORMED",
            LayerError::InvalidToml { .. } => "LAYER_INVALID_TOML",
            LayerError::UnsupportedValue { .. } => "LAYER_UNSUPPORTED_VALUE",
            LayerError::Read { .. } => "LAYER_READ_ERROR",
            LayerError::InvalidSystemConfigRef { .. } => "LAYER_INVALID_SYSTEM_CONFIG_REF",
            LayerError::MandatorySystemConfigUnavailable { .. } => {
                "LAYER_MANDATORY_SYSTEM_CONFIG_UNAVAILABLE"
            }
        }
    }

    fn is_user_error(&self) -> bool {
        !matches!(self, LayerError::Read { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_display() {
        let error = LayerError::Malformed {
            origin: "user".to_string(),
            line: 3,
            reason: "invalid \\u escape".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Malformed entry in 'user' at line 3: invalid \\u escape"
        );
        assert_eq!(error.error_code(), "LAYER_MALFORMED");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_not_found_detection() {
        let error = LayerError::Read {
            path: "/nope".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(error.is_not_found());
        assert!(!error.is_user_error());

        let error = LayerError::Read {
            path: "/nope".to_string(),
            source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        };
        assert!(!error.is_not_found());
    }
}
