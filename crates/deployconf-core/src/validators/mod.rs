//! # Validators
//!
//! Pure predicates over configuration text. A [`Validator`] either accepts a
//! candidate (returning its canonical form) or rejects it with a
//! [`ValidationError`]. Construct validators through [`catalog`].

pub mod catalog;
pub mod errors;
pub mod levels;
pub mod types;

pub use errors::ValidationError;
pub use levels::{AppletSecurityLevel, ManifestCheck};
pub use types::{PATH_LIST_SEPARATOR, Validator};
