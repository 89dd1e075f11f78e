//! Rendering and formatting errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("interface not found: {name}")]
    InterfaceNotFound { name: String },

    #[error("no valid interface names provided")]
    NoValidInterfaces,
}

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("formatter command is empty")]
    EmptyCommand,

    #[error("cannot run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{command} failed: {stderr}")]
    Failed { command: String, stderr: String },
}
