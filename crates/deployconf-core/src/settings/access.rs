//! Host access-control seam.
//!
//! Some hosts sandbox which files a component may even probe. The registry
//! consults an [`AccessGuard`] before handing out defaults.

use std::path::{Path, PathBuf};

use super::errors::AccessError;

/// Decides whether a path may be read.
pub trait AccessGuard {
    fn check_read(&self, path: &Path) -> Result<(), AccessError>;
}

/// No sandbox: every read is permitted.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unrestricted;

impl AccessGuard for Unrestricted {
    fn check_read(&self, _path: &Path) -> Result<(), AccessError> {
        Ok(())
    }
}

/// Sandbox permitting reads only beneath a set of root directories.
///
/// Matching is lexical on path components; paths are not canonicalized.
#[derive(Debug, Clone, Default)]
pub struct ReadAllowList {
    roots: Vec<PathBuf>,
}

impl ReadAllowList {
    pub fn new(roots: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }

    pub fn allow(mut self, root: impl Into<PathBuf>) -> Self {
        self.roots.push(root.into());
        self
    }
}

impl AccessGuard for ReadAllowList {
    fn check_read(&self, path: &Path) -> Result<(), AccessError> {
        if self.roots.iter().any(|root| path.starts_with(root)) {
            Ok(())
        } else {
            Err(AccessError::ReadDenied {
                path: path.display().to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrestricted_allows_everything() {
        assert!(Unrestricted.check_read(Path::new("/anything")).is_ok());
    }

    #[test]
    fn test_allow_list_matches_components() {
        let guard = ReadAllowList::new(["/home/u/.config"]);
        assert!(guard.check_read(Path::new("/home/u/.config/deployconf/deployment.properties")).is_ok());
        assert!(guard.check_read(Path::new("/home/u/.config")).is_ok());
        // Shares a string prefix but not a path component.
        assert_eq!(
            guard.check_read(Path::new("/home/u/.configuration/x")),
            Err(AccessError::ReadDenied {
                path: "/home/u/.configuration/x".to_string()
            })
        );
    }

    #[test]
    fn test_empty_allow_list_denies() {
        let guard = ReadAllowList::default();
        assert!(guard.check_read(Path::new("/etc/passwd")).is_err());

        let guard = guard.allow("/etc");
        assert!(guard.check_read(Path::new("/etc/passwd")).is_ok());
    }
}
