//! Imports Feature
//!
//! ## Structure
//! - `domain/` - `Import`, `ImportRegistry`
//! - `infrastructure/` - import spec extraction and package name guessing

pub mod domain;
pub mod infrastructure;

pub use domain::{Import, ImportRegistry};
pub use infrastructure::{extract_imports, guess_package_name, ImportBinding, ImportDecl};
