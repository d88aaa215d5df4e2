//! deployconf-core: Settings catalog and validation engine for the launcher
//!
//! This library defines every deployment setting the launcher understands,
//! the validators guarding their values, and the resolver that layers
//! administrator and user configuration over the built-in defaults.
//!
//! # Main Entry Points
//!
//! - [`settings`] - Catalog, defaults registry, deployment-file template
//! - [`validators`] - Value validators and their constructors
//! - [`resolve`] - Configuration layers and layered resolution

pub mod errors;
pub mod events;
pub mod logging;
pub mod resolve;
pub mod settings;
pub mod validators;

// Re-export commonly used types at crate root for convenience
pub use errors::{SettingsError, SettingsResult};
pub use resolve::{
    ConfigLayer, LayerError, LayerKind, Resolution, ResolutionReport, ResolvedConfig,
    SystemConfigRef, ValueSource,
};
pub use settings::{
    AccessError, AccessGuard, CatalogError, DefaultPaths, DefaultsRegistry, PathResolver,
    ReadAllowList, Setting, Unrestricted,
};
pub use validators::{ValidationError, Validator};

pub use resolve::resolve;

// Re-export logging initialization
pub use logging::init_logging;
