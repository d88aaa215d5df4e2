//! Resolution output types.

use serde::Serialize;
use std::collections::BTreeMap;

use super::layer::LayerKind;

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    System,
    User,
}

impl From<LayerKind> for ValueSource {
    fn from(kind: LayerKind) -> Self {
        match kind {
            LayerKind::System => ValueSource::System,
            LayerKind::User => ValueSource::User,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedValue {
    pub value: String,
    pub source: ValueSource,
}

/// Final validated configuration snapshot.
///
/// Owned by whoever requested resolution. Every value in it passed the
/// validator of its setting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedConfig {
    values: BTreeMap<String, ResolvedValue>,
}

impl ResolvedConfig {
    pub(crate) fn insert(&mut self, key: &str, value: String, source: ValueSource) {
        self.values
            .insert(key.to_string(), ResolvedValue { value, source });
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|v| v.value.as_str())
    }

    pub fn source(&self, key: &str) -> Option<ValueSource> {
        self.values.get(key).map(|v| v.source)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.get(key)? {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }

    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key)?.parse().ok()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResolvedValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Plain key to value mapping.
    pub fn to_text_map(&self) -> BTreeMap<String, String> {
        self.values
            .iter()
            .map(|(k, v)| (k.clone(), v.value.clone()))
            .collect()
    }
}

/// Something the resolver noticed and worked around.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolutionReport {
    /// A layer value failed validation and was discarded.
    Rejected {
        key: String,
        layer: LayerKind,
        value: String,
        reason: String,
    },
    /// The user tried to override a value the system layer enforces.
    PolicyViolation {
        key: String,
        user_value: String,
        enforced_value: Option<String>,
    },
    /// A layer named a key the catalog does not define.
    UnknownKey { key: String, layer: LayerKind },
}

impl ResolutionReport {
    pub fn key(&self) -> &str {
        match self {
            ResolutionReport::Rejected { key, .. }
            | ResolutionReport::PolicyViolation { key, .. }
            | ResolutionReport::UnknownKey { key, .. } => key,
        }
    }
}

impl std::fmt::Display for ResolutionReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolutionReport::Rejected {
                key,
                layer,
                value,
                reason,
            } => write!(f, "Rejected {} value '{}' for {}: {}", layer, value, key, reason),
            ResolutionReport::PolicyViolation {
                key,
                user_value,
                enforced_value: Some(enforced),
            } => write!(
                f,
                "Policy violation: {} is enforced as '{}', ignoring user value '{}'",
                key, enforced, user_value
            ),
            ResolutionReport::PolicyViolation {
                key, user_value, ..
            } => write!(
                f,
                "Policy violation: {} is locked unset, ignoring user value '{}'",
                key, user_value
            ),
            ResolutionReport::UnknownKey { key, layer } => {
                write!(f, "Unknown key {} in {} layer ignored", key, layer)
            }
        }
    }
}

/// Result of a resolution pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub config: ResolvedConfig,
    pub reports: Vec<ResolutionReport>,
}

impl Resolution {
    pub fn has_policy_violations(&self) -> bool {
        self.reports
            .iter()
            .any(|r| matches!(r, ResolutionReport::PolicyViolation { .. }))
    }
}
