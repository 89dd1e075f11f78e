//! Feature modules, leaf-first:
//!
//! - `type_model` - Go type expressions and their three renderings
//! - `imports` - import declarations and the import registry
//! - `parsing` - tree-sitter-go parsing and source discovery
//! - `type_checking` - package checker and importer
//! - `interface_model` - identifiers, methods, interfaces, embedding
//! - `loading` - package loader
//! - `rendering` - fake renderer and formatters

pub mod imports;
pub mod interface_model;
pub mod loading;
pub mod parsing;
pub mod rendering;
pub mod type_checking;
pub mod type_model;
