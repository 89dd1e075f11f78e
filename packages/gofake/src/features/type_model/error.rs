//! Type resolution errors

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// A type expression the model has no variant for
    #[error("line {line}: unsupported type expression `{text}` ({kind})")]
    UnsupportedExpression {
        kind: String,
        text: String,
        line: usize,
    },

    /// Array length that is not an integer literal
    #[error("line {line}: unsupported array length `{text}`")]
    UnsupportedArrayLength { text: String, line: usize },

    /// Syntax node with a required child missing (partial parse)
    #[error("line {line}: malformed `{kind}` node")]
    Malformed { kind: String, line: usize },
}
