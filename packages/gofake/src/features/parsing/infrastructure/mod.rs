pub mod go_parser;
pub mod source_discovery;

pub use go_parser::GoParser;
pub use source_discovery::{discover_go_files, has_ignore_constraint};
