//! The defaults registry: the single source of truth for which keys exist and
//! what is legal for each.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use super::access::AccessGuard;
use super::defaults::catalog_settings;
use super::errors::{AccessError, CatalogError};
use super::paths::{PathKey, PathResolver};
use super::types::Setting;
use crate::events;
use crate::validators::Validator;

/// Both candidate locations of the user deployment file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentFile {
    /// Where the file lives when nothing relocates it.
    pub default_path: String,
    /// Where the file currently lives.
    pub path: String,
}

impl DeploymentFile {
    pub fn from_resolver(paths: &dyn PathResolver) -> Self {
        Self {
            default_path: paths.default_path(PathKey::UserDeploymentFile),
            path: paths.deployment_file(),
        }
    }
}

/// Ordered, read-only catalog of setting definitions.
///
/// Built once at startup and shared by reference. Every accessor that hands
/// settings out returns owned copies, so no caller can alter the catalog.
#[derive(Debug)]
pub struct DefaultsRegistry {
    settings: Vec<Setting>,
    index: HashMap<String, usize>,
    deployment_file: DeploymentFile,
}

impl DefaultsRegistry {
    /// Build the built-in catalog with default paths from `paths`.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the catalog table is defective. Callers
    /// must treat this as fatal.
    pub fn build(paths: &dyn PathResolver) -> Result<Self, CatalogError> {
        Self::from_settings(catalog_settings(paths), DeploymentFile::from_resolver(paths))
    }

    /// Build a registry from an explicit definition table, enforcing the
    /// catalog invariants.
    pub fn from_settings(
        settings: Vec<Setting>,
        deployment_file: DeploymentFile,
    ) -> Result<Self, CatalogError> {
        let index = match check_integrity(&settings) {
            Ok(index) => index,
            Err(e) => {
                events::log_catalog_rejected(&e);
                return Err(e);
            }
        };

        events::log_catalog_built(settings.len());

        Ok(Self {
            settings,
            index,
            deployment_file,
        })
    }

    pub fn get(&self, name: &str) -> Option<&Setting> {
        self.index.get(name).map(|&i| &self.settings[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Settings in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Setting> {
        self.settings.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.settings.iter().map(Setting::name)
    }

    pub fn len(&self) -> usize {
        self.settings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    pub fn deployment_file(&self) -> &DeploymentFile {
        &self.deployment_file
    }

    /// Hand out a copy of every setting, keyed by name.
    ///
    /// Read access to the user deployment file is checked at both its default
    /// and its current location before anything is copied.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError`] if `guard` denies either check. No partial
    /// mapping is produced.
    pub fn get_defaults(
        &self,
        guard: &dyn AccessGuard,
    ) -> Result<HashMap<String, Setting>, AccessError> {
        for path in [&self.deployment_file.default_path, &self.deployment_file.path] {
            if let Err(e) = guard.check_read(Path::new(path)) {
                events::log_access_denied(path);
                return Err(e);
            }
        }

        let defaults: HashMap<String, Setting> = self
            .settings
            .iter()
            .map(|s| (s.name().to_string(), s.clone()))
            .collect();

        events::log_defaults_issued(defaults.len());
        Ok(defaults)
    }
}

fn check_integrity(settings: &[Setting]) -> Result<HashMap<String, usize>, CatalogError> {
    let mut index = HashMap::with_capacity(settings.len());
    let mut seen = HashSet::with_capacity(settings.len());

    for (position, setting) in settings.iter().enumerate() {
        let name = setting.name();
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return Err(CatalogError::MalformedName {
                position,
                name: name.to_string(),
            });
        }
        if !seen.insert(name) {
            return Err(CatalogError::DuplicateName {
                name: name.to_string(),
            });
        }

        match setting.validator() {
            Some(Validator::RangedInteger { low, high }) if low > high => {
                return Err(CatalogError::InvertedRange {
                    name: name.to_string(),
                    low: *low,
                    high: *high,
                });
            }
            Some(Validator::StringEnum { allowed }) if allowed.is_empty() => {
                return Err(CatalogError::EmptyEnum {
                    name: name.to_string(),
                });
            }
            _ => {}
        }

        if let Some(value) = setting.default_value() {
            setting
                .validate(value)
                .map_err(|source| CatalogError::InvalidDefault {
                    name: name.to_string(),
                    value: value.to_string(),
                    source,
                })?;
        }

        index.insert(name.to_string(), position);
    }

    Ok(index)
}
