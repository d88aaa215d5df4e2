//! Domain values referenced by the catalog's validators and defaults.

use serde::{Deserialize, Serialize};

/// How the launcher selects a network proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProxyType {
    Unknown,
    None,
    Manual,
    Auto,
    Browser,
}

impl ProxyType {
    /// Get the integer code stored in configuration files.
    pub fn code(&self) -> i64 {
        match self {
            ProxyType::Unknown => -1,
            ProxyType::None => 0,
            ProxyType::Manual => 1,
            ProxyType::Auto => 2,
            ProxyType::Browser => 3,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        Self::all().iter().copied().find(|t| t.code() == code)
    }

    pub fn all() -> &'static [ProxyType] {
        &[
            ProxyType::Unknown,
            ProxyType::None,
            ProxyType::Manual,
            ProxyType::Auto,
            ProxyType::Browser,
        ]
    }
}

/// Policy for associating `.jnlp` files with the launcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JnlpAssociation {
    Never,
    NewOnly,
    AskUser,
    ReplaceAsk,
}

impl JnlpAssociation {
    pub fn code(&self) -> i64 {
        match self {
            JnlpAssociation::Never => 0,
            JnlpAssociation::NewOnly => 1,
            JnlpAssociation::AskUser => 2,
            JnlpAssociation::ReplaceAsk => 3,
        }
    }

    pub fn from_code(code: i64) -> Option<Self> {
        Self::all().iter().copied().find(|a| a.code() == code)
    }

    pub fn all() -> &'static [JnlpAssociation] {
        &[
            JnlpAssociation::Never,
            JnlpAssociation::NewOnly,
            JnlpAssociation::AskUser,
            JnlpAssociation::ReplaceAsk,
        ]
    }
}

/// Whether and when the Java console is shown at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConsoleMode {
    Disable,
    Hide,
    Show,
    ShowPluginOnly,
    ShowJavawsOnly,
}

impl ConsoleMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsoleMode::Disable => "DISABLE",
            ConsoleMode::Hide => "HIDE",
            ConsoleMode::Show => "SHOW",
            ConsoleMode::ShowPluginOnly => "SHOW_PLUGIN_ONLY",
            ConsoleMode::ShowJavawsOnly => "SHOW_JAVAWS_ONLY",
        }
    }

    pub fn all() -> &'static [ConsoleMode] {
        &[
            ConsoleMode::Disable,
            ConsoleMode::Hide,
            ConsoleMode::Show,
            ConsoleMode::ShowPluginOnly,
            ConsoleMode::ShowJavawsOnly,
        ]
    }

    /// Configuration text of every mode, in declaration order.
    pub fn names() -> Vec<&'static str> {
        Self::all().iter().map(|m| m.as_str()).collect()
    }
}

/// Desktop shortcut creation policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShortcutPolicy {
    Always,
    AlwaysIfHinted,
    AskUser,
    AskIfHinted,
    Never,
}

impl ShortcutPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShortcutPolicy::Always => "ALWAYS",
            ShortcutPolicy::AlwaysIfHinted => "ALWAYS_IF_HINTED",
            ShortcutPolicy::AskUser => "ASK_USER",
            ShortcutPolicy::AskIfHinted => "ASK_IF_HINTED",
            ShortcutPolicy::Never => "NEVER",
        }
    }

    pub fn all() -> &'static [ShortcutPolicy] {
        &[
            ShortcutPolicy::Always,
            ShortcutPolicy::AlwaysIfHinted,
            ShortcutPolicy::AskUser,
            ShortcutPolicy::AskIfHinted,
            ShortcutPolicy::Never,
        ]
    }

    pub fn names() -> Vec<&'static str> {
        Self::all().iter().map(|p| p.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proxy_codes_are_contiguous() {
        let codes: Vec<i64> = ProxyType::all().iter().map(|t| t.code()).collect();
        assert_eq!(codes, vec![-1, 0, 1, 2, 3]);
        assert_eq!(ProxyType::from_code(3), Some(ProxyType::Browser));
        assert_eq!(ProxyType::from_code(4), None);
    }

    #[test]
    fn test_jnlp_association_codes() {
        assert_eq!(JnlpAssociation::AskUser.code(), 2);
        assert_eq!(JnlpAssociation::from_code(0), Some(JnlpAssociation::Never));
        assert_eq!(JnlpAssociation::from_code(-1), None);
    }

    #[test]
    fn test_console_mode_names() {
        assert_eq!(
            ConsoleMode::names(),
            vec!["DISABLE", "HIDE", "SHOW", "SHOW_PLUGIN_ONLY", "SHOW_JAVAWS_ONLY"]
        );
    }

    #[test]
    fn test_shortcut_policy_names() {
        assert_eq!(ShortcutPolicy::AskIfHinted.as_str(), "ASK_IF_HINTED");
        assert_eq!(ShortcutPolicy::names().len(), 5);
    }
}
