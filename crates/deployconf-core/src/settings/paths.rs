//! Default filesystem locations supplied to the catalog.
//!
//! Path layout policy belongs to the host launcher. The catalog only asks a
//! [`PathResolver`] for the text of each default location.

use std::path::{Path, PathBuf};

/// Locations the catalog needs a default path for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathKey {
    CacheDir,
    PersistenceCacheDir,
    LogDir,
    TmpDir,
    LocksDir,
    MainLock,
    JavaPolicy,
    UserCaCerts,
    UserJsseCaCerts,
    UserCerts,
    UserJsseCerts,
    UserClientCerts,
    SystemCaCerts,
    SystemJsseCaCerts,
    SystemCerts,
    SystemJsseCerts,
    SystemClientCerts,
    UserDeploymentFile,
}

/// Supplies default path strings for the catalog.
pub trait PathResolver {
    /// The default location for `key`.
    fn default_path(&self, key: PathKey) -> String;

    /// The user deployment file as currently located. Hosts that relocate
    /// the file return the new location here; otherwise this is the same as
    /// `default_path(PathKey::UserDeploymentFile)`.
    fn deployment_file(&self) -> String {
        self.default_path(PathKey::UserDeploymentFile)
    }
}

/// Platform-directory based layout.
///
/// User data lives under `<config>/<app>` and `<cache>/<app>`, JDK-provided
/// trust stores under `<java_home>/lib/security`, and administrator trust
/// stores under the system deployment root.
#[derive(Debug, Clone)]
pub struct DefaultPaths {
    config_dir: PathBuf,
    cache_dir: PathBuf,
    java_home: PathBuf,
    system_dir: PathBuf,
    relocated_deployment_file: Option<PathBuf>,
}

impl DefaultPaths {
    pub fn new(
        config_dir: impl Into<PathBuf>,
        cache_dir: impl Into<PathBuf>,
        java_home: impl Into<PathBuf>,
        system_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            config_dir: config_dir.into(),
            cache_dir: cache_dir.into(),
            java_home: java_home.into(),
            system_dir: system_dir.into(),
            relocated_deployment_file: None,
        }
    }

    /// Detect the layout for `app_name` from the current platform and
    /// environment (`JAVA_HOME`).
    pub fn detect(app_name: &str) -> Self {
        Self::from_roots(
            app_name,
            dirs::config_dir(),
            dirs::cache_dir(),
            std::env::var_os("JAVA_HOME").map(PathBuf::from),
        )
    }

    /// Build the layout from detected roots. Missing or relative roots fall
    /// back to platform defaults so every derived default stays absolute.
    fn from_roots(
        app_name: &str,
        config_root: Option<PathBuf>,
        cache_root: Option<PathBuf>,
        java_home: Option<PathBuf>,
    ) -> Self {
        let fallback = std::env::temp_dir();
        let config_root = absolute(config_root).unwrap_or_else(|| fallback.clone());
        let cache_root = absolute(cache_root).unwrap_or_else(|| fallback.clone());
        let java_home = absolute(java_home).unwrap_or_else(default_java_home);

        Self::new(
            config_root.join(app_name),
            cache_root.join(app_name),
            java_home,
            default_system_dir(),
        )
    }

    /// Use `path` as the user deployment file instead of the default location.
    pub fn with_deployment_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.relocated_deployment_file = Some(path.into());
        self
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    fn path_for(&self, key: PathKey) -> PathBuf {
        let security = self.config_dir.join("security");
        let jdk_security = self.java_home.join("lib").join("security");
        let system_security = self.system_dir.join("security");

        match key {
            PathKey::CacheDir => self.cache_dir.join("cache"),
            PathKey::PersistenceCacheDir => self.cache_dir.join("pcache"),
            PathKey::LogDir => self.config_dir.join("log"),
            PathKey::TmpDir => self.cache_dir.join("tmp"),
            PathKey::LocksDir => self.cache_dir.join("locks"),
            PathKey::MainLock => self.cache_dir.join("locks").join("netx_running"),
            PathKey::JavaPolicy => security.join("java.policy"),
            PathKey::UserCaCerts => security.join("trusted.cacerts"),
            PathKey::UserJsseCaCerts => security.join("trusted.jssecacerts"),
            PathKey::UserCerts => security.join("trusted.certs"),
            PathKey::UserJsseCerts => security.join("trusted.jssecerts"),
            PathKey::UserClientCerts => security.join("trusted.clientcerts"),
            PathKey::SystemCaCerts => jdk_security.join("cacerts"),
            PathKey::SystemJsseCaCerts => jdk_security.join("jssecacerts"),
            PathKey::SystemCerts => system_security.join("trusted.certs"),
            PathKey::SystemJsseCerts => system_security.join("trusted.jssecerts"),
            PathKey::SystemClientCerts => system_security.join("trusted.clientautcerts"),
            PathKey::UserDeploymentFile => self.config_dir.join("deployment.properties"),
        }
    }
}

impl PathResolver for DefaultPaths {
    fn default_path(&self, key: PathKey) -> String {
        self.path_for(key).to_string_lossy().into_owned()
    }

    fn deployment_file(&self) -> String {
        match &self.relocated_deployment_file {
            Some(path) => path.to_string_lossy().into_owned(),
            None => self.default_path(PathKey::UserDeploymentFile),
        }
    }
}

fn absolute(path: Option<PathBuf>) -> Option<PathBuf> {
    path.filter(|p| p.is_absolute())
}

#[cfg(windows)]
fn default_system_dir() -> PathBuf {
    std::env::var_os("WINDIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(r"C:\Windows"))
        .join("Sun")
        .join("Java")
        .join("Deployment")
}

#[cfg(not(windows))]
fn default_system_dir() -> PathBuf {
    PathBuf::from("/etc/.java/deployment")
}

#[cfg(windows)]
fn default_java_home() -> PathBuf {
    PathBuf::from(r"C:\Program Files\Java\jre")
}

#[cfg(not(windows))]
fn default_java_home() -> PathBuf {
    PathBuf::from("/usr/lib/jvm/default")
}
