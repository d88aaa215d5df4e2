//! Recognized configuration key names.
//!
//! These names are a stable, versioned namespace. Renaming one requires a
//! migration of existing deployment files.

// Infrastructure
pub const USER_CACHE_DIR: &str = "deployment.user.cachedir";
pub const USER_PERSISTENCE_CACHE_DIR: &str = "deployment.user.pcachedir";
pub const SYSTEM_CACHE_DIR: &str = "deployment.system.cachedir";
pub const USER_LOG_DIR: &str = "deployment.user.logdir";
pub const USER_TMP_DIR: &str = "deployment.user.tmp";
pub const USER_LOCKS_DIR: &str = "deployment.user.locksdir";
pub const USER_RUNNING_FILE: &str = "deployment.user.runningfile";

// Certificates and policy files
pub const USER_SECURITY_POLICY: &str = "deployment.user.security.policy";
pub const USER_TRUSTED_CA_CERTS: &str = "deployment.user.security.trusted.cacerts";
pub const USER_TRUSTED_JSSE_CA_CERTS: &str = "deployment.user.security.trusted.jssecacerts";
pub const USER_TRUSTED_CERTS: &str = "deployment.user.security.trusted.certs";
pub const USER_TRUSTED_JSSE_CERTS: &str = "deployment.user.security.trusted.jssecerts";
pub const USER_TRUSTED_CLIENT_CERTS: &str = "deployment.user.security.trusted.clientauthcerts";
pub const SYSTEM_SECURITY_POLICY: &str = "deployment.system.security.policy";
pub const SYSTEM_TRUSTED_CA_CERTS: &str = "deployment.system.security.cacerts";
pub const SYSTEM_TRUSTED_JSSE_CA_CERTS: &str = "deployment.system.security.jssecacerts";
pub const SYSTEM_TRUSTED_CERTS: &str = "deployment.system.security.trusted.certs";
pub const SYSTEM_TRUSTED_JSSE_CERTS: &str = "deployment.system.security.trusted.jssecerts";
// Spelling is part of the deployed namespace.
pub const SYSTEM_TRUSTED_CLIENT_CERTS: &str = "deployment.system.security.trusted.clientautcerts";

// Security access and control
pub const SECURITY_PROMPT_USER: &str = "deployment.security.askgrantdialog.show";
pub const SECURITY_ASK_GRANT_NOT_IN_CA: &str = "deployment.security.askgrantdialog.notinca";
pub const SECURITY_NOT_IN_CA_WARNING: &str = "deployment.security.notinca.warning";
pub const SECURITY_EXPIRED_WARNING: &str = "deployment.security.expired.warning";
pub const SECURITY_JSSE_HOSTMISMATCH_WARNING: &str =
    "deployment.security.jsse.hostmismatch.warning";
pub const SECURITY_TRUSTED_POLICY: &str = "deployment.security.trusted.policy";
pub const SECURITY_ALLOW_HIDE_WINDOW_WARNING: &str = "deployment.security.sandbox.awtwarningwindow";
pub const SECURITY_PROMPT_USER_FOR_JNLP: &str = "deployment.security.sandbox.jnlp.enhanced";
pub const STRICT_JNLP_CLASSLOADER: &str = "deployment.jnlpclassloader.strict";
pub const HTTPS_DONT_ENFORCE: &str = "deployment.https.noenforce";
pub const SECURITY_IGNORE_CERT_ISSUES: &str = "deployment.security.itw.ignorecertissues";

// Networking
pub const PROXY_TYPE: &str = "deployment.proxy.type";
pub const PROXY_SAME: &str = "deployment.proxy.same";
pub const PROXY_AUTO_CONFIG_URL: &str = "deployment.proxy.auto.config.url";
pub const PROXY_BYPASS_LIST: &str = "deployment.proxy.bypass.list";
pub const PROXY_BYPASS_LOCAL: &str = "deployment.proxy.bypass.local";
pub const PROXY_HTTP_HOST: &str = "deployment.proxy.http.host";
pub const PROXY_HTTP_PORT: &str = "deployment.proxy.http.port";
pub const PROXY_HTTPS_HOST: &str = "deployment.proxy.https.host";
pub const PROXY_HTTPS_PORT: &str = "deployment.proxy.https.port";
pub const PROXY_FTP_HOST: &str = "deployment.proxy.ftp.host";
pub const PROXY_FTP_PORT: &str = "deployment.proxy.ftp.port";
pub const PROXY_SOCKS4_HOST: &str = "deployment.proxy.socks.host";
pub const PROXY_SOCKS4_PORT: &str = "deployment.proxy.socks.port";
pub const PROXY_OVERRIDE_HOSTS: &str = "deployment.proxy.override.hosts";

// Cache
pub const CACHE_MAX_SIZE: &str = "deployment.cache.max.size";
pub const CACHE_COMPRESSION: &str = "deployment.cache.jarcompression";
pub const CACHE_ENABLED: &str = "deployment.javapi.cache.enabled";

// Console and logging
pub const CONSOLE_STARTUP_MODE: &str = "deployment.console.startup.mode";
pub const ENABLE_LOGGING: &str = "deployment.log";
pub const ENABLE_LOGGING_HEADERS: &str = "deployment.log.headers";
pub const ENABLE_LOGGING_TO_FILE: &str = "deployment.log.file";
pub const ENABLE_APPLICATION_LOGGING_TO_FILE: &str = "deployment.log.file.clientapp";
pub const ENABLE_LEGACY_FILE_LOG: &str = "deployment.log.file.legacylog";
pub const ENABLE_LOGGING_TO_STREAMS: &str = "deployment.log.stdstreams";
pub const ENABLE_LOGGING_TO_SYSTEM_LOG: &str = "deployment.log.system";

// Desktop integration
pub const JNLP_ASSOCIATIONS: &str = "deployment.javaws.associations";
pub const CREATE_DESKTOP_SHORTCUT: &str = "deployment.javaws.shortcut";

// JRE selection and management
pub const JRE_INSTALL_URL: &str = "deployment.javaws.installURL";
pub const AUTO_DOWNLOAD_JRE: &str = "deployment.javaws.autodownload";
pub const JRE_DIR: &str = "deployment.jre.dir";

pub const BROWSER_PATH: &str = "deployment.browser.path";

pub const UPDATE_TIMEOUT: &str = "deployment.javaws.update.timeout";
pub const IGNORE_HEADLESS_CHECK: &str = "deployment.headless.ignore";

pub const PLUGIN_JVM_ARGUMENTS: &str = "deployment.plugin.jvm.arguments";

pub const SECURITY_LEVEL: &str = "deployment.security.level";

pub const MANIFEST_ATTRIBUTES_CHECK: &str = "deployment.manifest.attributes.check";

// System configuration pointer
pub const SYSTEM_CONFIG: &str = "deployment.system.config";
pub const SYSTEM_CONFIG_MANDATORY: &str = "deployment.system.config.mandatory";

// Small window override
pub const SMALL_SIZE_OVERRIDE_WIDTH: &str = "deployment.small.size.override.width";
pub const SMALL_SIZE_OVERRIDE_HEIGHT: &str = "deployment.small.size.override.height";
pub const SMALL_SIZE_OVERRIDE_THRESHOLD: &str = "deployment.small.size.threshold";

// Native launcher classpath adjustments
pub const LAUNCHER_CP_ADD: &str = "deployment.launcher.rust.cp.add";
pub const LAUNCHER_CP_REMOVE: &str = "deployment.launcher.rust.cp.remove";
pub const LAUNCHER_BOOTCP_ADD: &str = "deployment.launcher.rust.bootcp.add";
pub const LAUNCHER_BOOTCP_REMOVE: &str = "deployment.launcher.rust.bootcp.remove";

/// Suffix that marks a key as locked in a system configuration layer.
pub const LOCKED_SUFFIX: &str = ".locked";
