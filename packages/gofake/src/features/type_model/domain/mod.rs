pub mod builtin;
pub mod go_type;

pub use builtin::{is_predeclared, is_predeclared_interface};
pub use go_type::{ChannelDirection, Type, TypeKind};
