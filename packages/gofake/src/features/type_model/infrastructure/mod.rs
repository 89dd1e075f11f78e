//! Type resolvers
//!
//! Two entry points converge on the same [`Type`](super::domain::Type) tree:
//! the syntax resolver reads tree-sitter nodes of the scanned files, the
//! semantic resolver reads checker output for interfaces pulled in from
//! imported packages.

pub mod semantic_resolver;
pub mod syntax_resolver;

pub use semantic_resolver::resolve_semantic;
pub use syntax_resolver::resolve_syntax;
