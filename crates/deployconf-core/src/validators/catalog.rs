//! Constructors for every validator variant.
//!
//! Setting definitions build their validators through these functions so that
//! new keys reuse existing semantics instead of inventing ad hoc parsing.

use super::types::Validator;

pub fn boolean() -> Validator {
    Validator::Boolean
}

/// Integer validator accepting `low..=high`.
pub fn ranged_integer(low: i64, high: i64) -> Validator {
    Validator::RangedInteger { low, high }
}

/// Enum validator accepting exactly the given strings, in the given order.
pub fn string_enum(allowed: &[&str]) -> Validator {
    Validator::StringEnum {
        allowed: allowed.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn url() -> Validator {
    Validator::Url
}

pub fn file_path() -> Validator {
    Validator::FilePath
}

/// Classpath-style list of paths, as consumed by the native launcher.
pub fn path_list() -> Validator {
    Validator::PathList
}

/// Browser executable location. Shares file path semantics.
pub fn browser_path() -> Validator {
    Validator::FilePath
}

pub fn security_level() -> Validator {
    Validator::SecurityLevel
}

pub fn manifest_check() -> Validator {
    Validator::ManifestCheck
}
