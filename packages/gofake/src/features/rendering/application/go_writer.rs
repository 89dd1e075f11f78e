//! Indentation-aware Go source buffer
//!
//! Emits tabs for indentation and space-padded columns for aligned field
//! lists, matching what gofmt produces for the generated declarations.

#[derive(Debug, Default)]
pub struct GoWriter {
    out: String,
    indent: usize,
}

impl GoWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one line at the current indentation.
    pub fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.indent {
                self.out.push('\t');
            }
            self.out.push_str(text);
        }
        self.out.push('\n');
    }

    pub fn blank(&mut self) {
        self.out.push('\n');
    }

    /// Write `text` and indent what follows.
    pub fn open(&mut self, text: impl AsRef<str>) {
        self.line(text);
        self.indent += 1;
    }

    /// Dedent and write `text`.
    pub fn close(&mut self, text: impl AsRef<str>) {
        self.indent = self.indent.saturating_sub(1);
        self.line(text);
    }

    /// `// text` comment lines
    pub fn comment(&mut self, text: impl AsRef<str>) {
        for line in text.as_ref().lines() {
            if line.is_empty() {
                self.line("//");
            } else {
                self.line(format!("// {}", line));
            }
        }
    }

    /// Two-column rows with the first column padded to a common width.
    pub fn aligned<A: AsRef<str>, B: AsRef<str>>(&mut self, rows: &[(A, B)]) {
        let width = rows
            .iter()
            .map(|(name, _)| name.as_ref().chars().count())
            .max()
            .unwrap_or(0);
        for (name, value) in rows {
            let name = name.as_ref();
            let pad = width - name.chars().count();
            self.line(format!("{}{} {}", name, " ".repeat(pad), value.as_ref()));
        }
    }

    pub fn finish(self) -> String {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_blocks_and_alignment() {
        let mut w = GoWriter::new();
        w.open("type T struct {");
        w.aligned(&[("A", "int"), ("Longer", "string")]);
        w.blank();
        w.aligned(&[("B", "bool")]);
        w.close("}");

        assert_eq!(
            w.finish(),
            "type T struct {\n\tA      int\n\tLonger string\n\n\tB bool\n}\n"
        );
    }

    #[test]
    fn test_comment_lines() {
        let mut w = GoWriter::new();
        w.comment("first\n\nsecond");
        assert_eq!(w.finish(), "// first\n//\n// second\n");
    }
}
