//! # Resolution
//!
//! Layers system and user configuration over the catalog defaults and
//! produces a validated snapshot plus reports for everything that was
//! rejected or overridden by policy.

pub mod errors;
pub mod layer;
mod properties;
pub mod resolver;
pub mod system_ref;
mod toml_layer;
pub mod types;

pub use errors::LayerError;
pub use layer::{ConfigLayer, LayerKind};
pub use resolver::resolve;
pub use system_ref::SystemConfigRef;
pub use types::{Resolution, ResolutionReport, ResolvedConfig, ResolvedValue, ValueSource};

/// Read the system configuration pointer from `layer`.
pub fn system_config_ref(layer: &ConfigLayer) -> Result<Option<SystemConfigRef>, LayerError> {
    SystemConfigRef::from_layer(layer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::keys;

    #[test]
    fn test_system_config_ref_reads_user_layer() {
        let user = ConfigLayer::new(LayerKind::User, "user")
            .with_entry(keys::SYSTEM_CONFIG, "https://config.example.com/deployment.properties");
        let pointer = system_config_ref(&user).unwrap().unwrap();
        assert_eq!(pointer.url.scheme(), "https");
        assert!(!pointer.mandatory);
        assert_eq!(pointer.local_path(), None);

        let empty = ConfigLayer::new(LayerKind::User, "user");
        assert_eq!(system_config_ref(&empty).unwrap(), None);
    }

    #[test]
    fn test_system_config_ref_rejects_bad_mandatory_flag() {
        let user = ConfigLayer::new(LayerKind::User, "user")
            .with_entry(keys::SYSTEM_CONFIG, "file:///etc/deployconf/system.properties")
            .with_entry(keys::SYSTEM_CONFIG_MANDATORY, "yes");
        assert!(matches!(
            system_config_ref(&user),
            Err(LayerError::InvalidSystemConfigRef { .. })
        ));
    }
}
