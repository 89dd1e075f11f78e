//! End-to-end generation

pub mod generator;

pub use generator::{GeneratedFile, Generator, ModelView};
