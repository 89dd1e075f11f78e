//! Shared utilities used across features

pub mod utils;
