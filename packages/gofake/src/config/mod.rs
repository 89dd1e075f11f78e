//! Generator configuration
//!
//! Defaults, overridden by a versioned YAML file, overridden by CLI flags.
//!
//! ```yaml
//! version: 1
//! interfaces: [Store]
//! output: store_fake.go
//! package: store
//! format:
//!   enabled: true
//!   command: [gofmt]
//! imports:
//!   roots: [third_party]
//!   use_environment: true
//! ```

pub mod error;
pub mod io;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use error::{ConfigError, ConfigResult};
use io::ConfigFileV1;

/// Supported schema versions
const SUPPORTED_VERSIONS: &[u32] = &[1];

/// Formatting pass settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormatConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Program and arguments; reads source on stdin, writes it to stdout
    #[serde(default = "default_format_command")]
    pub command: Vec<String>,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: default_format_command(),
        }
    }
}

/// Where imported packages are looked up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImportConfig {
    /// Extra directories searched as `<root>/<import path>`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roots: Vec<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goroot: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gopath: Vec<PathBuf>,

    /// Fill GOROOT and GOPATH from the environment when not set here
    #[serde(default = "default_true")]
    pub use_environment: bool,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            roots: Vec::new(),
            goroot: None,
            gopath: Vec::new(),
            use_environment: true,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format_command() -> Vec<String> {
    vec!["gofmt".to_string()]
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub interfaces: Vec<String>,
    pub output: Option<PathBuf>,
    pub package: Option<String>,
    pub format: FormatConfig,
    pub imports: ImportConfig,
}

impl GeneratorConfig {
    /// Load from a YAML file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let file: ConfigFileV1 = serde_yaml::from_str(content)?;

        let version = file.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let config = Self {
            interfaces: file.interfaces,
            output: file.output,
            package: file.package,
            format: file.format.unwrap_or_default(),
            imports: file.imports.unwrap_or_default(),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        let file = ConfigFileV1 {
            version: Some(1),
            interfaces: self.interfaces.clone(),
            output: self.output.clone(),
            package: self.package.clone(),
            format: Some(self.format.clone()),
            imports: Some(self.imports.clone()),
        };
        Ok(serde_yaml::to_string(&file)?)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.format.enabled && self.format.command.is_empty() {
            return Err(ConfigError::Invalid {
                field: "format.command".to_string(),
                message: "must name a program when formatting is enabled".to_string(),
            });
        }
        if let Some(package) = &self.package {
            if !is_go_identifier(package) {
                return Err(ConfigError::Invalid {
                    field: "package".to_string(),
                    message: format!("`{}` is not a Go identifier", package),
                });
            }
        }
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════
    // Builder
    // ═══════════════════════════════════════════════════════════════════

    pub fn with_interfaces(mut self, interfaces: Vec<String>) -> Self {
        self.interfaces = interfaces;
        self
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    pub fn with_formatting(mut self, enabled: bool) -> Self {
        self.format.enabled = enabled;
        self
    }

    pub fn with_format_command(mut self, command: Vec<String>) -> Self {
        self.format.command = command;
        self
    }

    pub fn with_import_roots(mut self, roots: Vec<PathBuf>) -> Self {
        self.imports.roots = roots;
        self
    }
}

fn is_go_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    matches!(chars.next(), Some(c) if c == '_' || c.is_alphabetic())
        && chars.all(|c| c == '_' || c.is_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert!(config.format.enabled);
        assert_eq!(config.format.command, vec!["gofmt"]);
        assert!(config.imports.use_environment);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_package_name() {
        let config = GeneratorConfig::default().with_package("my-pkg");
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { ref field, .. }) if field == "package"
        ));
        assert!(GeneratorConfig::default().with_package("pkg_test").validate().is_ok());
    }

    #[test]
    fn test_empty_command_allowed_when_disabled() {
        let config = GeneratorConfig::default()
            .with_formatting(false)
            .with_format_command(Vec::new());
        assert!(config.validate().is_ok());
    }
}
