//! The built-in setting catalog.
//!
//! The table order is the order used for listings and generated templates.
//! Lookups go by name.

use super::keys;
use super::paths::{PathKey, PathResolver};
use super::types::Setting;
use super::values::{ConsoleMode, JnlpAssociation, ProxyType, ShortcutPolicy};
use crate::validators::{ManifestCheck, Validator, catalog};

/// Upper bound of the cache size setting, in megabytes.
pub const CACHE_MAX_SIZE_LIMIT: i64 = i32::MAX as i64;

fn setting(name: &str, validator: Validator, default_value: Option<String>) -> Setting {
    Setting::new(name, Some(validator), default_value)
}

fn unvalidated(name: &str) -> Setting {
    Setting::new(name, None, None)
}

fn flag(name: &str, default_value: bool) -> Setting {
    setting(name, catalog::boolean(), Some(default_value.to_string()))
}

fn path(name: &str, paths: &dyn PathResolver, key: PathKey) -> Setting {
    setting(name, catalog::file_path(), Some(paths.default_path(key)))
}

fn int(name: &str, low: i64, high: i64, default_value: i64) -> Setting {
    setting(
        name,
        catalog::ranged_integer(low, high),
        Some(default_value.to_string()),
    )
}

/// Build the ordered list of every recognized setting.
pub fn catalog_settings(paths: &dyn PathResolver) -> Vec<Setting> {
    let associations = JnlpAssociation::all();

    vec![
        // infrastructure
        path(keys::USER_CACHE_DIR, paths, PathKey::CacheDir),
        path(keys::USER_PERSISTENCE_CACHE_DIR, paths, PathKey::PersistenceCacheDir),
        setting(keys::SYSTEM_CACHE_DIR, catalog::file_path(), None),
        path(keys::USER_LOG_DIR, paths, PathKey::LogDir),
        path(keys::USER_TMP_DIR, paths, PathKey::TmpDir),
        path(keys::USER_LOCKS_DIR, paths, PathKey::LocksDir),
        path(keys::USER_RUNNING_FILE, paths, PathKey::MainLock),
        // certificates and policy files
        setting(
            keys::USER_SECURITY_POLICY,
            catalog::url(),
            Some(file_url(&paths.default_path(PathKey::JavaPolicy))),
        ),
        path(keys::USER_TRUSTED_CA_CERTS, paths, PathKey::UserCaCerts),
        path(keys::USER_TRUSTED_JSSE_CA_CERTS, paths, PathKey::UserJsseCaCerts),
        path(keys::USER_TRUSTED_CERTS, paths, PathKey::UserCerts),
        path(keys::USER_TRUSTED_JSSE_CERTS, paths, PathKey::UserJsseCerts),
        path(keys::USER_TRUSTED_CLIENT_CERTS, paths, PathKey::UserClientCerts),
        setting(keys::SYSTEM_SECURITY_POLICY, catalog::url(), None),
        path(keys::SYSTEM_TRUSTED_CA_CERTS, paths, PathKey::SystemCaCerts),
        path(keys::SYSTEM_TRUSTED_JSSE_CA_CERTS, paths, PathKey::SystemJsseCaCerts),
        path(keys::SYSTEM_TRUSTED_CERTS, paths, PathKey::SystemCerts),
        path(keys::SYSTEM_TRUSTED_JSSE_CERTS, paths, PathKey::SystemJsseCerts),
        path(keys::SYSTEM_TRUSTED_CLIENT_CERTS, paths, PathKey::SystemClientCerts),
        // security access and control
        flag(keys::SECURITY_PROMPT_USER, true),
        flag(keys::SECURITY_ASK_GRANT_NOT_IN_CA, true),
        flag(keys::SECURITY_NOT_IN_CA_WARNING, true),
        flag(keys::SECURITY_EXPIRED_WARNING, true),
        flag(keys::SECURITY_JSSE_HOSTMISMATCH_WARNING, true),
        setting(keys::SECURITY_TRUSTED_POLICY, catalog::file_path(), None),
        flag(keys::SECURITY_ALLOW_HIDE_WINDOW_WARNING, true),
        flag(keys::SECURITY_PROMPT_USER_FOR_JNLP, true),
        flag(keys::STRICT_JNLP_CLASSLOADER, true),
        flag(keys::HTTPS_DONT_ENFORCE, false),
        flag(keys::SECURITY_IGNORE_CERT_ISSUES, false),
        // networking
        int(
            keys::PROXY_TYPE,
            ProxyType::Unknown.code(),
            ProxyType::Browser.code(),
            ProxyType::Browser.code(),
        ),
        flag(keys::PROXY_SAME, false),
        setting(keys::PROXY_AUTO_CONFIG_URL, catalog::url(), None),
        unvalidated(keys::PROXY_BYPASS_LIST),
        unvalidated(keys::PROXY_BYPASS_LOCAL),
        unvalidated(keys::PROXY_HTTP_HOST),
        unvalidated(keys::PROXY_HTTP_PORT),
        unvalidated(keys::PROXY_HTTPS_HOST),
        unvalidated(keys::PROXY_HTTPS_PORT),
        unvalidated(keys::PROXY_FTP_HOST),
        unvalidated(keys::PROXY_FTP_PORT),
        unvalidated(keys::PROXY_SOCKS4_HOST),
        unvalidated(keys::PROXY_SOCKS4_PORT),
        unvalidated(keys::PROXY_OVERRIDE_HOSTS),
        // cache
        int(keys::CACHE_MAX_SIZE, -1, CACHE_MAX_SIZE_LIMIT, -1),
        int(keys::CACHE_COMPRESSION, 0, 10, 0),
        flag(keys::CACHE_ENABLED, false),
        // console and logging
        setting(
            keys::CONSOLE_STARTUP_MODE,
            catalog::string_enum(&ConsoleMode::names()),
            Some(ConsoleMode::Hide.as_str().to_string()),
        ),
        flag(keys::ENABLE_LOGGING, false),
        flag(keys::ENABLE_LOGGING_HEADERS, false),
        flag(keys::ENABLE_LOGGING_TO_FILE, false),
        flag(keys::ENABLE_APPLICATION_LOGGING_TO_FILE, true),
        flag(keys::ENABLE_LEGACY_FILE_LOG, false),
        flag(keys::ENABLE_LOGGING_TO_STREAMS, true),
        flag(keys::ENABLE_LOGGING_TO_SYSTEM_LOG, true),
        // JNLP association
        int(
            keys::JNLP_ASSOCIATIONS,
            associations[0].code(),
            associations[associations.len() - 1].code(),
            JnlpAssociation::AskUser.code(),
        ),
        // desktop integration
        setting(
            keys::CREATE_DESKTOP_SHORTCUT,
            catalog::string_enum(&ShortcutPolicy::names()),
            Some(ShortcutPolicy::AskIfHinted.as_str().to_string()),
        ),
        // JRE selection and management
        setting(keys::JRE_INSTALL_URL, catalog::url(), None),
        flag(keys::AUTO_DOWNLOAD_JRE, false),
        // browser selection
        setting(keys::BROWSER_PATH, catalog::browser_path(), None),
        // update check
        int(keys::UPDATE_TIMEOUT, 0, 10000, 500),
        flag(keys::IGNORE_HEADLESS_CHECK, false),
        // plugin
        unvalidated(keys::PLUGIN_JVM_ARGUMENTS),
        // unsigned applet security level
        setting(keys::SECURITY_LEVEL, catalog::security_level(), None),
        unvalidated(keys::JRE_DIR),
        // manifest attribute checks
        setting(
            keys::MANIFEST_ATTRIBUTES_CHECK,
            catalog::manifest_check(),
            Some(ManifestCheck::All.as_str().to_string()),
        ),
        // system configuration pointer
        setting(keys::SYSTEM_CONFIG, catalog::url(), None),
        flag(keys::SYSTEM_CONFIG_MANDATORY, false),
        // small window override: 0 disables, negative enforces
        int(keys::SMALL_SIZE_OVERRIDE_WIDTH, -9999, 9999, 800),
        int(keys::SMALL_SIZE_OVERRIDE_HEIGHT, -9999, 9999, 600),
        int(keys::SMALL_SIZE_OVERRIDE_THRESHOLD, 0, 1000, 10),
        // native launcher
        setting(keys::LAUNCHER_CP_ADD, catalog::path_list(), Some(String::new())),
        setting(keys::LAUNCHER_CP_REMOVE, catalog::path_list(), Some(String::new())),
        setting(keys::LAUNCHER_BOOTCP_ADD, catalog::path_list(), None),
        setting(keys::LAUNCHER_BOOTCP_REMOVE, catalog::path_list(), Some(String::new())),
    ]
}

/// Render `path` as a `file:` URL.
///
/// Falls back to plain concatenation for paths the `url` crate cannot
/// express (relative paths from a custom resolver).
fn file_url(path: &str) -> String {
    url::Url::from_file_path(path)
        .map(|u| u.to_string())
        .unwrap_or_else(|()| format!("file://{}", path))
}
