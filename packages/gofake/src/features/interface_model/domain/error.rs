//! Interface model errors

use thiserror::Error;

use crate::features::type_model::ResolveError;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("interface {interface}: embedded interface not found: {embed}")]
    EmbeddedInterfaceNotFound { interface: String, embed: String },

    #[error("interface embedding cycle: {}", cycle.join(" -> "))]
    EmbeddingCycle { cycle: Vec<String> },

    #[error("interface {interface}, method {method}: {source}")]
    Resolve {
        interface: String,
        method: String,
        #[source]
        source: ResolveError,
    },

    #[error("line {line}: malformed interface element `{text}`")]
    MalformedElement { text: String, line: usize },
}
