//! Merges defaults, system and user layers into one validated configuration.

use super::layer::ConfigLayer;
use super::types::{Resolution, ResolutionReport, ResolvedConfig, ValueSource};
use crate::events;
use crate::settings::{DefaultsRegistry, Setting};

/// Resolve every catalog key against the supplied layers.
///
/// Precedence is user over system over default, except for keys the system
/// layer pins: keys it locks, or every key it sets to a valid value when it
/// is mandatory.
/// Invalid layer values are discarded and reported. Keys outside the catalog
/// are reported and never reach the result.
pub fn resolve(
    registry: &DefaultsRegistry,
    system: Option<&ConfigLayer>,
    user: Option<&ConfigLayer>,
) -> Resolution {
    let mut reports = Vec::new();

    for layer in [system, user].into_iter().flatten() {
        for (key, _) in layer.entries() {
            if !registry.contains(key) {
                events::log_unknown_key(key, layer.kind().as_str());
                reports.push(ResolutionReport::UnknownKey {
                    key: key.to_string(),
                    layer: layer.kind(),
                });
            }
        }
    }

    let mut config = ResolvedConfig::default();
    for setting in registry.iter() {
        let system_value = system.and_then(|layer| checked_value(setting, layer, &mut reports));
        let user_value = user.and_then(|layer| checked_value(setting, layer, &mut reports));

        let pinned = system.is_some_and(|layer| {
            layer.is_locked(setting.name()) || (layer.is_mandatory() && system_value.is_some())
        });

        let chosen = if pinned {
            let enforced = system_value.or_else(|| default_of(setting));

            if let Some((user_value, _)) = user_value {
                let enforced_text = enforced.as_ref().map(|(v, _)| v.as_str());
                if enforced_text != Some(user_value.as_str()) {
                    events::log_policy_violation(setting.name(), &user_value, enforced_text);
                    reports.push(ResolutionReport::PolicyViolation {
                        key: setting.name().to_string(),
                        user_value,
                        enforced_value: enforced_text.map(str::to_string),
                    });
                }
            }
            enforced
        } else {
            user_value
                .or(system_value)
                .or_else(|| default_of(setting))
        };

        if let Some((value, source)) = chosen {
            config.insert(setting.name(), value, source);
        }
    }

    events::log_resolution_completed(config.len(), reports.len());
    Resolution { config, reports }
}

/// The layer's value for `setting` in canonical form, or `None` if it is
/// absent or fails validation.
fn checked_value(
    setting: &Setting,
    layer: &ConfigLayer,
    reports: &mut Vec<ResolutionReport>,
) -> Option<(String, ValueSource)> {
    let raw = layer.get(setting.name())?;
    match setting.validate(raw) {
        Ok(value) => Some((value, layer.kind().into())),
        Err(e) => {
            let reason = e.to_string();
            events::log_value_rejected(setting.name(), layer.kind().as_str(), raw, &reason);
            reports.push(ResolutionReport::Rejected {
                key: setting.name().to_string(),
                layer: layer.kind(),
                value: raw.to_string(),
                reason,
            });
            None
        }
    }
}

fn default_of(setting: &Setting) -> Option<(String, ValueSource)> {
    setting
        .default_value()
        .map(|v| (v.to_string(), ValueSource::Default))
}
