//! Loading Feature
//!
//! Turns a directory or file list into a [`LoadedPackage`]: parsed, checked,
//! with imports recorded and every interface's embeds flattened.
//!
//! ## Structure
//! - `domain/` - `LoadedPackage`
//! - `application/` - `PackageLoader`

pub mod application;
pub mod domain;
pub mod error;

pub use application::PackageLoader;
pub use domain::LoadedPackage;
pub use error::LoadError;
