//! Parsing Feature
//!
//! Turns Go source text into tree-sitter trees.
//!
//! ## Structure
//! - `domain/` - `ParsedFile`
//! - `infrastructure/` - `GoParser` (tree-sitter-go), source discovery (walkdir)

pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::{interface_elements, InterfaceElement, ParsedFile};
pub use error::ParseError;
pub use infrastructure::{discover_go_files, GoParser};
