//! Parsing errors

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to load Go grammar: {0}")]
    Language(#[from] tree_sitter::LanguageError),

    #[error("{}:{line}:{column}: syntax error near `{snippet}`", path.display())]
    Syntax {
        path: PathBuf,
        line: usize,
        column: usize,
        snippet: String,
    },

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: parser produced no tree", path.display())]
    NoTree { path: PathBuf },

    #[error("{}: missing package clause", path.display())]
    MissingPackageClause { path: PathBuf },
}
