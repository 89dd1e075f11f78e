//! Type checking and import errors

use std::path::PathBuf;

use thiserror::Error;

use crate::features::parsing::ParseError;
use crate::features::type_model::ResolveError;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("package {path}: no Go files")]
    NoFiles { path: String },

    #[error("{}: found package {found}, expected {expected}", file.display())]
    MixedPackages {
        file: PathBuf,
        expected: String,
        found: String,
    },

    #[error("{}:{line}: {name} redeclared in this package", file.display())]
    Redeclared {
        name: String,
        file: PathBuf,
        line: usize,
    },

    #[error("{}:{line}: undefined package {qualifier}", file.display())]
    UndefinedPackage {
        qualifier: String,
        file: PathBuf,
        line: usize,
    },

    #[error("{}:{line}: undefined type {name}", file.display())]
    UndefinedType {
        name: String,
        file: PathBuf,
        line: usize,
    },

    #[error("{}: {source}", file.display())]
    Resolve {
        file: PathBuf,
        #[source]
        source: ResolveError,
    },
}

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("cannot find package {path}")]
    NotFound { path: String },

    #[error("import cycle through {path}")]
    Cycle { path: String },

    #[error("package {path}: {message}")]
    Failed { path: String, message: String },

    #[error("package {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Check(#[from] CheckError),
}
