//! Source formatters

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::features::rendering::error::FormatError;
use crate::features::rendering::ports::SourceFormatter;

/// Pipes the source through `gofmt` (or any command reading stdin and
/// writing the formatted source to stdout).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GofmtFormatter {
    command: Vec<String>,
}

impl Default for GofmtFormatter {
    fn default() -> Self {
        Self {
            command: vec!["gofmt".to_string()],
        }
    }
}

impl GofmtFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Program followed by its arguments
    pub fn with_command(command: Vec<String>) -> Self {
        Self { command }
    }

    pub fn command(&self) -> &[String] {
        &self.command
    }
}

impl SourceFormatter for GofmtFormatter {
    fn format(&self, source: &[u8]) -> Result<Vec<u8>, FormatError> {
        let (program, args) = self.command.split_first().ok_or(FormatError::EmptyCommand)?;
        let command = self.command.join(" ");
        let spawn_error = |source| FormatError::Spawn {
            command: command.clone(),
            source,
        };

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(spawn_error)?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(source).map_err(spawn_error)?;
        }
        let output = child.wait_with_output().map_err(spawn_error)?;

        if output.status.success() {
            debug!(command = %command, bytes = output.stdout.len(), "formatted source");
            Ok(output.stdout)
        } else {
            Err(FormatError::Failed {
                command,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            })
        }
    }
}

/// Leaves the source untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughFormatter;

impl SourceFormatter for PassthroughFormatter {
    fn format(&self, source: &[u8]) -> Result<Vec<u8>, FormatError> {
        Ok(source.to_vec())
    }
}
