//! # Settings catalog
//!
//! Every configuration key the launcher recognizes, with its validator and
//! built-in default.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use deployconf_core::settings::{DefaultPaths, DefaultsRegistry, Unrestricted, keys};
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let registry = DefaultsRegistry::build(&DefaultPaths::detect("deployconf"))?;
//!     let defaults = registry.get_defaults(&Unrestricted)?;
//!     let timeout = defaults[keys::UPDATE_TIMEOUT].default_value();
//!     assert_eq!(timeout, Some("500"));
//!     Ok(())
//! }
//! ```

pub mod access;
pub mod defaults;
pub mod errors;
pub mod keys;
pub mod paths;
pub mod registry;
pub mod template;
pub mod types;
pub mod values;

pub use access::{AccessGuard, ReadAllowList, Unrestricted};
pub use errors::{AccessError, CatalogError};
pub use paths::{DefaultPaths, PathKey, PathResolver};
pub use registry::{DefaultsRegistry, DeploymentFile};
pub use template::render_template;
pub use types::Setting;
pub use values::{ConsoleMode, JnlpAssociation, ProxyType, ShortcutPolicy};
