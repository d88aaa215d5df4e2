//! JSON output shapes for CLI commands.

use serde::Serialize;

use deployconf_core::{Setting, Validator};

/// One catalog entry as printed by `defaults --json`.
#[derive(Serialize)]
pub struct SettingOutput<'a> {
    pub name: &'a str,
    pub accepts: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validator: Option<&'a Validator>,
    pub default: Option<&'a str>,
}

impl<'a> From<&'a Setting> for SettingOutput<'a> {
    fn from(setting: &'a Setting) -> Self {
        Self {
            name: setting.name(),
            accepts: setting.describe(),
            validator: setting.validator(),
            default: setting.default_value(),
        }
    }
}
