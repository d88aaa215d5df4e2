//! The validator variants and their `validate` dispatch.

use serde::Serialize;
use std::path::Path;

use super::errors::ValidationError;
use super::levels::{AppletSecurityLevel, ManifestCheck, joined};

/// Separator between entries of a path list on this host.
#[cfg(windows)]
pub const PATH_LIST_SEPARATOR: char = ';';
/// Separator between entries of a path list on this host.
#[cfg(not(windows))]
pub const PATH_LIST_SEPARATOR: char = ':';

/// A pure rule over configuration text.
///
/// Each variant carries the parameters fixed at construction. Two validators
/// with the same variant and parameters behave identically. No variant
/// touches the filesystem or the network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Validator {
    /// Exactly `true` or `false`.
    Boolean,
    /// Decimal integer within `low..=high`.
    RangedInteger { low: i64, high: i64 },
    /// Exact member of an ordered set of strings.
    StringEnum { allowed: Vec<String> },
    /// Absolute URL.
    Url,
    /// Absolute filesystem path. Existence is not checked.
    FilePath,
    /// [`PATH_LIST_SEPARATOR`]-delimited list of absolute paths.
    PathList,
    /// One of [`AppletSecurityLevel`].
    SecurityLevel,
    /// Comma-separated list of [`ManifestCheck`] entries.
    ManifestCheck,
}

impl Validator {
    /// Validate `candidate`, returning the accepted value.
    ///
    /// Integers and manifest check lists come back in canonical form; every
    /// other variant returns the candidate unchanged.
    pub fn validate(&self, candidate: &str) -> Result<String, ValidationError> {
        match self {
            Validator::Boolean => validate_boolean(candidate),
            Validator::RangedInteger { low, high } => {
                validate_ranged_integer(candidate, *low, *high)
            }
            Validator::StringEnum { allowed } => validate_string_enum(candidate, allowed),
            Validator::Url => validate_url(candidate),
            Validator::FilePath => validate_file_path(candidate).map(|()| candidate.to_string()),
            Validator::PathList => validate_path_list(candidate),
            Validator::SecurityLevel => validate_security_level(candidate),
            Validator::ManifestCheck => validate_manifest_check(candidate),
        }
    }

    /// Human-readable description of the values this validator accepts.
    pub fn describe(&self) -> String {
        match self {
            Validator::Boolean => "true or false".to_string(),
            Validator::RangedInteger { low, high } => {
                format!("integer in [{}, {}]", low, high)
            }
            Validator::StringEnum { allowed } => {
                format!("one of: {}", joined(allowed.iter().map(String::as_str)))
            }
            Validator::Url => "absolute URL".to_string(),
            Validator::FilePath => "absolute file path".to_string(),
            Validator::PathList => format!("'{}'-separated absolute paths", PATH_LIST_SEPARATOR),
            Validator::SecurityLevel => format!(
                "one of: {}",
                joined(AppletSecurityLevel::all().iter().map(|l| l.as_str()))
            ),
            Validator::ManifestCheck => format!(
                "comma-separated list of: {}",
                joined(ManifestCheck::all().iter().map(|c| c.as_str()))
            ),
        }
    }
}

fn validate_boolean(candidate: &str) -> Result<String, ValidationError> {
    match candidate {
        "true" | "false" => Ok(candidate.to_string()),
        _ => Err(ValidationError::NotBoolean {
            value: candidate.to_string(),
        }),
    }
}

fn validate_ranged_integer(candidate: &str, low: i64, high: i64) -> Result<String, ValidationError> {
    let value: i64 = candidate
        .trim()
        .parse()
        .map_err(|_| ValidationError::NotInteger {
            value: candidate.to_string(),
        })?;

    if value < low || value > high {
        return Err(ValidationError::OutOfRange { value, low, high });
    }

    Ok(value.to_string())
}

fn validate_string_enum(candidate: &str, allowed: &[String]) -> Result<String, ValidationError> {
    if allowed.iter().any(|a| a == candidate) {
        Ok(candidate.to_string())
    } else {
        Err(ValidationError::NotAllowed {
            value: candidate.to_string(),
            allowed: joined(allowed.iter().map(String::as_str)),
        })
    }
}

fn validate_url(candidate: &str) -> Result<String, ValidationError> {
    url::Url::parse(candidate)
        .map(|_| candidate.to_string())
        .map_err(|e| ValidationError::MalformedUrl {
            value: candidate.to_string(),
            reason: e.to_string(),
        })
}

/// Check one path for syntax only. Returns the failure reason.
fn path_problem(candidate: &str) -> Option<&'static str> {
    if candidate.is_empty() {
        Some("path is empty")
    } else if candidate.contains('\0') {
        Some("path contains a NUL byte")
    } else if !Path::new(candidate).is_absolute() {
        Some("path is not absolute")
    } else {
        None
    }
}

fn validate_file_path(candidate: &str) -> Result<(), ValidationError> {
    match path_problem(candidate) {
        Some(reason) => Err(ValidationError::MalformedPath {
            value: candidate.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

fn validate_path_list(candidate: &str) -> Result<String, ValidationError> {
    if candidate.is_empty() {
        return Ok(String::new());
    }

    for (index, entry) in candidate.split(PATH_LIST_SEPARATOR).enumerate() {
        if let Some(reason) = path_problem(entry) {
            return Err(ValidationError::InvalidPathEntry {
                index,
                entry: entry.to_string(),
                reason: reason.to_string(),
            });
        }
    }

    Ok(candidate.to_string())
}

fn validate_security_level(candidate: &str) -> Result<String, ValidationError> {
    AppletSecurityLevel::parse(candidate)
        .map(|level| level.as_str().to_string())
        .ok_or_else(|| ValidationError::NotAllowed {
            value: candidate.to_string(),
            allowed: joined(AppletSecurityLevel::all().iter().map(|l| l.as_str())),
        })
}

fn validate_manifest_check(candidate: &str) -> Result<String, ValidationError> {
    let invalid = |reason: String| ValidationError::InvalidManifestCheck {
        value: candidate.to_string(),
        reason,
    };

    let mut checks = Vec::new();
    for entry in candidate.split(',').map(str::trim) {
        if entry.is_empty() {
            return Err(invalid("empty entry".to_string()));
        }
        let check = ManifestCheck::parse(entry)
            .ok_or_else(|| invalid(format!("unknown check '{}'", entry)))?;
        checks.push(check);
    }

    if checks.len() > 1 && checks.contains(&ManifestCheck::None) {
        return Err(invalid("NONE cannot be combined with other checks".to_string()));
    }

    Ok(checks
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(","))
}
