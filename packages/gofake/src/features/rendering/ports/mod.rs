pub mod source_formatter;

pub use source_formatter::SourceFormatter;
