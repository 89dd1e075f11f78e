//! Formatter port

use crate::features::rendering::error::FormatError;

/// Final pretty-printing pass over generated source
pub trait SourceFormatter {
    fn format(&self, source: &[u8]) -> Result<Vec<u8>, FormatError>;
}
