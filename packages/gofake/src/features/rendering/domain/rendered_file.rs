//! Renderer output

use serde::{Deserialize, Serialize};

/// A requested interface left out of the output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedInterface {
    pub name: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Go source, before formatting
    pub source: String,
    /// Interfaces rendered, in request order
    pub interfaces: Vec<String>,
    pub skipped: Vec<SkippedInterface>,
    /// Import paths written to the import block
    pub imports: Vec<String>,
}
