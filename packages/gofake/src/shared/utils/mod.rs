//! Utility modules

pub mod symbol_generator;
pub mod tree_sitter;

pub use symbol_generator::SymbolGenerator;
