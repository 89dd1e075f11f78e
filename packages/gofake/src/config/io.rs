//! Configuration file schema (YAML)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{FormatConfig, ImportConfig};

/// YAML Schema v1
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileV1 {
    /// Schema version (always 1 for v1)
    pub version: Option<u32>,

    /// Interfaces generated when none are given on the command line
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interfaces: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    /// Package clause of the generated file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<FormatConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imports: Option<ImportConfig>,
}
