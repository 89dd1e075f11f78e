//! Error types for gofake
//!
//! Each feature reports its own error enum; `GenerateError` is what the
//! pipeline and the CLI see.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::features::loading::LoadError;
use crate::features::rendering::RenderError;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot serialize model: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for generation
pub type Result<T> = std::result::Result<T, GenerateError>;
