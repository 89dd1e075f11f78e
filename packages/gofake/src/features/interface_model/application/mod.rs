pub mod embed_resolver;
pub mod interface_builder;

pub use embed_resolver::resolve_embeds;
pub use interface_builder::{InterfaceBuilder, IDENT_PREFIX};
