//! Fixed enumerations backing the security-level and manifest-check validators.

use serde::{Deserialize, Serialize};

/// Security level applied to unsigned applets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppletSecurityLevel {
    DenyAll,
    DenyUnsigned,
    AskUnsigned,
    AllowUnsigned,
}

impl AppletSecurityLevel {
    /// Get the canonical configuration text for this level.
    pub fn as_str(&self) -> &'static str {
        match self {
            AppletSecurityLevel::DenyAll => "DENY_ALL",
            AppletSecurityLevel::DenyUnsigned => "DENY_UNSIGNED",
            AppletSecurityLevel::AskUnsigned => "ASK_UNSIGNED",
            AppletSecurityLevel::AllowUnsigned => "ALLOW_UNSIGNED",
        }
    }

    /// Parse a level from its configuration text (case-sensitive).
    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|level| level.as_str() == s)
    }

    /// Get all levels, most restrictive first.
    pub fn all() -> &'static [AppletSecurityLevel] {
        &[
            AppletSecurityLevel::DenyAll,
            AppletSecurityLevel::DenyUnsigned,
            AppletSecurityLevel::AskUnsigned,
            AppletSecurityLevel::AllowUnsigned,
        ]
    }
}

impl std::fmt::Display for AppletSecurityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AppletSecurityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            format!(
                "Unknown security level '{}'. Supported: {}",
                s,
                joined(Self::all().iter().map(|l| l.as_str()))
            )
        })
    }
}

/// Manifest attribute checks the launcher can enforce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ManifestCheck {
    All,
    None,
    Permissions,
    Codebase,
    Trusted,
    Alac,
    Entrypoint,
}

impl ManifestCheck {
    pub fn as_str(&self) -> &'static str {
        match self {
            ManifestCheck::All => "ALL",
            ManifestCheck::None => "NONE",
            ManifestCheck::Permissions => "PERMISSIONS",
            ManifestCheck::Codebase => "CODEBASE",
            ManifestCheck::Trusted => "TRUSTED",
            ManifestCheck::Alac => "ALAC",
            ManifestCheck::Entrypoint => "ENTRYPOINT",
        }
    }

    /// Parse a check from its configuration text (case-sensitive).
    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|check| check.as_str() == s)
    }

    pub fn all() -> &'static [ManifestCheck] {
        &[
            ManifestCheck::All,
            ManifestCheck::None,
            ManifestCheck::Permissions,
            ManifestCheck::Codebase,
            ManifestCheck::Trusted,
            ManifestCheck::Alac,
            ManifestCheck::Entrypoint,
        ]
    }
}

impl std::fmt::Display for ManifestCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ManifestCheck {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            format!(
                "Unknown manifest check '{}'. Supported: {}",
                s,
                joined(Self::all().iter().map(|c| c.as_str()))
            )
        })
    }
}

pub(crate) fn joined<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items.collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_security_level_round_trips_text() {
        for level in AppletSecurityLevel::all() {
            assert_eq!(AppletSecurityLevel::parse(level.as_str()), Some(*level));
        }
    }

    #[test]
    fn test_security_level_parse_is_case_sensitive() {
        assert_eq!(AppletSecurityLevel::parse("deny_all"), None);
        assert_eq!(
            AppletSecurityLevel::parse("DENY_ALL"),
            Some(AppletSecurityLevel::DenyAll)
        );
    }

    #[test]
    fn test_security_level_from_str_error() {
        let err = "NOPE".parse::<AppletSecurityLevel>().unwrap_err();
        assert_eq!(
            err,
            "Unknown security level 'NOPE'. Supported: DENY_ALL, DENY_UNSIGNED, ASK_UNSIGNED, ALLOW_UNSIGNED"
        );
    }

    #[test]
    fn test_manifest_check_display() {
        assert_eq!(ManifestCheck::Alac.to_string(), "ALAC");
        assert_eq!("ENTRYPOINT".parse(), Ok(ManifestCheck::Entrypoint));
        assert!("all".parse::<ManifestCheck>().is_err());
    }

    #[test]
    fn test_serde_uses_config_text() {
        let json = serde_json::to_string(&AppletSecurityLevel::AskUnsigned).unwrap();
        assert_eq!(json, "\"ASK_UNSIGNED\"");
    }
}
