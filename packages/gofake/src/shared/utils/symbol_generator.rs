//! Deterministic symbol generation
//!
//! Placeholder names (`ident1`, `ident2`, ...) and generated receiver names
//! (`_f1`, `_f2`, ...) come from a counter owned by whoever builds the
//! declarations. There is no process-wide generator: two generation runs in one
//! process never observe each other's counters.

/// Counter-backed generator producing `{prefix}{n}` symbols.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolGenerator {
    prefix: String,
    count: u64,
}

impl SymbolGenerator {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            count: 0,
        }
    }

    /// Produce the next symbol in the sequence.
    pub fn next_symbol(&mut self) -> String {
        self.count += 1;
        format!("{}{}", self.prefix, self.count)
    }

    /// Produce the next symbol that is not already in `taken`.
    ///
    /// Skipped values are consumed, so the sequence stays monotonic.
    pub fn next_avoiding<S: AsRef<str>>(&mut self, taken: &[S]) -> String {
        loop {
            let candidate = self.next_symbol();
            if !taken.iter().any(|t| t.as_ref() == candidate) {
                return candidate;
            }
        }
    }

    /// Restart the sequence at 1.
    pub fn reset(&mut self) {
        self.count = 0;
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_symbol_sequence() {
        let mut s = SymbolGenerator::new("_f");

        assert_eq!(s.next_symbol(), "_f1");
        assert_eq!(s.next_symbol(), "_f2");
    }

    #[test]
    fn test_reset_restarts_counter() {
        let mut s = SymbolGenerator::new("ident");
        assert_eq!(s.count(), 0);

        s.next_symbol();
        assert_eq!(s.count(), 1);
        s.next_symbol();
        assert_eq!(s.count(), 2);

        s.reset();
        assert_eq!(s.count(), 0);
        assert_eq!(s.next_symbol(), "ident1");
    }

    #[test]
    fn test_next_avoiding_skips_declared_names() {
        let mut s = SymbolGenerator::new("ident");
        let taken = ["ident1", "ident3"];

        assert_eq!(s.next_avoiding(&taken), "ident2");
        assert_eq!(s.next_avoiding(&taken), "ident4");
    }

    #[test]
    fn test_independent_generators_do_not_share_state() {
        let mut a = SymbolGenerator::new("ident");
        let mut b = SymbolGenerator::new("ident");

        a.next_symbol();
        a.next_symbol();

        assert_eq!(b.next_symbol(), "ident1");
    }
}
