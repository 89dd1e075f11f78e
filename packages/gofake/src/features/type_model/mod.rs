//! Type Model Feature
//!
//! ## Structure
//! - `domain/` - `Type` sum and its three renderings
//! - `infrastructure/` - syntax and semantic resolvers
//! - `error` - `ResolveError`

pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::{is_predeclared, is_predeclared_interface, ChannelDirection, Type, TypeKind};
pub use error::ResolveError;
pub use infrastructure::{resolve_semantic, resolve_syntax};
