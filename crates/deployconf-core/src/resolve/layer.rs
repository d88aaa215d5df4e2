//! Configuration layers: the raw text values one source supplies.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use super::errors::LayerError;
use super::{properties, toml_layer};
use crate::events;
use crate::settings::keys::LOCKED_SUFFIX;

/// Which source a layer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerKind {
    /// Administrator-provided configuration.
    System,
    /// The user's deployment file.
    User,
}

impl LayerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            LayerKind::System => "system",
            LayerKind::User => "user",
        }
    }
}

impl std::fmt::Display for LayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw key/value text from one configuration source.
///
/// Values are unvalidated until the resolver checks them against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLayer {
    kind: LayerKind,
    origin: String,
    entries: BTreeMap<String, String>,
    locked: BTreeSet<String>,
    mandatory: bool,
}

impl ConfigLayer {
    pub fn new(kind: LayerKind, origin: impl Into<String>) -> Self {
        Self {
            kind,
            origin: origin.into(),
            entries: BTreeMap::new(),
            locked: BTreeSet::new(),
            mandatory: false,
        }
    }

    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn with_locked(mut self, key: impl Into<String>) -> Self {
        self.lock(key);
        self
    }

    /// Mark every value in this layer as non-overridable.
    pub fn with_mandatory(mut self, mandatory: bool) -> Self {
        self.mandatory = mandatory;
        self
    }

    /// Store a value. A key ending in `.locked` locks the base key instead.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        match key.strip_suffix(LOCKED_SUFFIX) {
            Some(base) if !base.is_empty() => {
                self.locked.insert(base.to_string());
            }
            _ => {
                self.entries.insert(key, value.into());
            }
        }
    }

    pub fn lock(&mut self, key: impl Into<String>) {
        self.locked.insert(key.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn is_locked(&self, key: &str) -> bool {
        self.locked.contains(key)
    }

    pub fn is_mandatory(&self) -> bool {
        self.mandatory
    }

    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Entries in key order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn locked_keys(&self) -> impl Iterator<Item = &str> {
        self.locked.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse Java-properties text.
    pub fn parse_properties(
        kind: LayerKind,
        origin: impl Into<String>,
        text: &str,
    ) -> Result<Self, LayerError> {
        let mut layer = Self::new(kind, origin);
        for (key, value) in properties::parse(&layer.origin, text)? {
            layer.insert(key, value);
        }
        events::log_layer_loaded(&layer.origin, layer.len(), layer.locked.len());
        Ok(layer)
    }

    /// Parse TOML text. Nested tables flatten into dotted keys and a
    /// top-level `locked` array lists locked keys.
    pub fn parse_toml(
        kind: LayerKind,
        origin: impl Into<String>,
        text: &str,
    ) -> Result<Self, LayerError> {
        let mut layer = Self::new(kind, origin);
        let parsed = toml_layer::parse(&layer.origin, text)?;
        for (key, value) in parsed.entries {
            layer.insert(key, value);
        }
        for key in parsed.locked {
            layer.lock(key);
        }
        events::log_layer_loaded(&layer.origin, layer.len(), layer.locked.len());
        Ok(layer)
    }

    /// Read a layer file. `.toml` files are parsed as TOML, anything else as
    /// properties. The path becomes the layer's origin.
    ///
    /// Properties files that are not valid UTF-8 are read as ISO-8859-1.
    pub fn load(kind: LayerKind, path: &Path) -> Result<Self, LayerError> {
        let read_error = |source| LayerError::Read {
            path: path.display().to_string(),
            source,
        };
        let origin = path.display().to_string();

        if path.extension().is_some_and(|ext| ext == "toml") {
            let text = fs::read_to_string(path).map_err(read_error)?;
            Self::parse_toml(kind, origin, &text)
        } else {
            let bytes = fs::read(path).map_err(read_error)?;
            Self::parse_properties(kind, origin, &properties::decode(bytes))
        }
    }
}
