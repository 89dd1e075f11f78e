//! Loading errors

use std::path::PathBuf;

use thiserror::Error;

use crate::features::interface_model::ModelError;
use crate::features::parsing::ParseError;
use crate::features::type_checking::CheckError;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no buildable Go source files in {}", dir.display())]
    NoGoFiles { dir: PathBuf },

    #[error(transparent)]
    Syntax(#[from] ParseError),

    #[error("type check failed: {0}")]
    TypeCheck(#[from] CheckError),

    #[error(transparent)]
    Model(#[from] ModelError),
}
