//! Interface Model Feature
//!
//! ## Structure
//! - `domain/` - `Identifier`, `Method`, `Interface`, `ModelError`
//! - `application/` - `InterfaceBuilder` (syntax and semantic paths),
//!   `resolve_embeds`

pub mod application;
pub mod domain;

pub use application::{resolve_embeds, InterfaceBuilder, IDENT_PREFIX};
pub use domain::{title_case, Fakeability, Identifier, Interface, Method, ModelError};
