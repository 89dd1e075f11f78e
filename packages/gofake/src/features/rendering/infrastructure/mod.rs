pub mod formatter;

pub use formatter::{GofmtFormatter, PassthroughFormatter};
