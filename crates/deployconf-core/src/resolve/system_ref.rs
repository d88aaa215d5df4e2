//! Pointer from a deployment file to the administrator's system configuration.

use std::path::PathBuf;

use super::errors::LayerError;
use super::layer::ConfigLayer;
use crate::settings::keys;
use crate::validators::catalog;

/// Location of a system configuration and whether it must be loadable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemConfigRef {
    pub url: url::Url,
    /// When true, failing to load the system configuration is fatal.
    pub mandatory: bool,
}

impl SystemConfigRef {
    /// Read the pointer from a layer, usually the user deployment file.
    ///
    /// Returns `Ok(None)` if the layer names no system configuration.
    pub fn from_layer(layer: &ConfigLayer) -> Result<Option<Self>, LayerError> {
        let Some(location) = layer.get(keys::SYSTEM_CONFIG) else {
            return Ok(None);
        };

        let url = url::Url::parse(location).map_err(|e| LayerError::InvalidSystemConfigRef {
            value: location.to_string(),
            reason: e.to_string(),
        })?;

        let mandatory = match layer.get(keys::SYSTEM_CONFIG_MANDATORY) {
            Some(flag) => {
                catalog::boolean()
                    .validate(flag)
                    .map_err(|e| LayerError::InvalidSystemConfigRef {
                        value: flag.to_string(),
                        reason: e.to_string(),
                    })?
                    == "true"
            }
            None => false,
        };

        Ok(Some(Self { url, mandatory }))
    }

    /// Local filesystem path for `file:` URLs.
    pub fn local_path(&self) -> Option<PathBuf> {
        if self.url.scheme() == "file" {
            self.url.to_file_path().ok()
        } else {
            None
        }
    }

    /// Convert a load failure into the error a caller must propagate, or
    /// `None` if the failure may be ignored.
    pub fn unavailable(&self, reason: impl Into<String>) -> Option<LayerError> {
        self.mandatory
            .then(|| LayerError::MandatorySystemConfigUnavailable {
                location: self.url.to_string(),
                reason: reason.into(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::layer::LayerKind;

    fn user_layer() -> ConfigLayer {
        ConfigLayer::new(LayerKind::User, "user")
    }

    #[test]
    fn test_absent_pointer() {
        assert_eq!(SystemConfigRef::from_layer(&user_layer()).unwrap(), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_file_pointer() {
        let layer = user_layer()
            .with_entry(keys::SYSTEM_CONFIG, "file:///etc/deployconf/deployment.properties")
            .with_entry(keys::SYSTEM_CONFIG_MANDATORY, "true");
        let pointer = SystemConfigRef::from_layer(&layer).unwrap().unwrap();
        assert!(pointer.mandatory);
        assert_eq!(
            pointer.local_path(),
            Some(PathBuf::from("/etc/deployconf/deployment.properties"))
        );
    }

    #[test]
    fn test_remote_pointer_has_no_local_path() {
        let layer = user_layer().with_entry(keys::SYSTEM_CONFIG, "https://config.corp/deployment.properties");
        let pointer = SystemConfigRef::from_layer(&layer).unwrap().unwrap();
        assert!(!pointer.mandatory);
        assert_eq!(pointer.local_path(), None);
        assert!(pointer.unavailable("remote").is_none());
    }

    #[test]
    fn test_invalid_pointer() {
        let layer = user_layer().with_entry(keys::SYSTEM_CONFIG, "not a url");
        assert!(matches!(
            SystemConfigRef::from_layer(&layer),
            Err(LayerError::InvalidSystemConfigRef { .. })
        ));

        let layer = user_layer()
            .with_entry(keys::SYSTEM_CONFIG, "file:///etc/x.properties")
            .with_entry(keys::SYSTEM_CONFIG_MANDATORY, "yes");
        assert!(SystemConfigRef::from_layer(&layer).is_err());
    }

    #[test]
    fn test_mandatory_unavailable_is_an_error() {
        let layer = user_layer()
            .with_entry(keys::SYSTEM_CONFIG, "file:///etc/x.properties")
            .with_entry(keys::SYSTEM_CONFIG_MANDATORY, "true");
        let pointer = SystemConfigRef::from_layer(&layer).unwrap().unwrap();
        let err = pointer.unavailable("file not found").unwrap();
        assert_eq!(
            err.to_string(),
            "Mandatory system configuration 'file:///etc/x.properties' is unavailable: file not found"
        );
    }
}
