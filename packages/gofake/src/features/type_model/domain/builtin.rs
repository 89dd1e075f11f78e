//! Predeclared Go types

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

/// Types in the universe scope
pub static PREDECLARED_TYPES: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        // ═══════════════════════════════════════════════════════════
        // Numeric
        // ═══════════════════════════════════════════════════════════
        "int", "int8", "int16", "int32", "int64",
        "uint", "uint8", "uint16", "uint32", "uint64", "uintptr",
        "float32", "float64", "complex64", "complex128",
        "byte", "rune",
        // ═══════════════════════════════════════════════════════════
        // Other
        // ═══════════════════════════════════════════════════════════
        "bool", "string", "error", "any", "comparable",
    ]
    .into_iter()
    .collect()
});

pub fn is_predeclared(name: &str) -> bool {
    PREDECLARED_TYPES.contains(name)
}

/// Predeclared types that are interfaces and may be embedded
pub fn is_predeclared_interface(name: &str) -> bool {
    matches!(name, "error" | "any")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predeclared() {
        assert!(is_predeclared("int"));
        assert!(is_predeclared("error"));
        assert!(!is_predeclared("Reader"));
        assert!(is_predeclared_interface("error"));
        assert!(!is_predeclared_interface("comparable"));
    }
}
