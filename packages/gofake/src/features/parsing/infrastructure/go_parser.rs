//! Tree-sitter Go parser
//!
//! This is where the tree-sitter grammar is loaded.

use std::path::{Path, PathBuf};

use tracing::debug;
use tree_sitter::Parser as TSParser;

use crate::features::parsing::domain::parsed_file::{package_clause_name, ParsedFile};
use crate::features::parsing::error::ParseError;
use crate::shared::utils::tree_sitter::{first_error_node, node_position, node_text};

const SNIPPET_LEN: usize = 40;

/// Parses Go sources into [`ParsedFile`]s.
///
/// A file with any `ERROR` or `MISSING` node is rejected; the generator never
/// works from a partial tree.
pub struct GoParser {
    parser: TSParser,
}

impl GoParser {
    pub fn new() -> Result<Self, ParseError> {
        let mut parser = TSParser::new();
        parser.set_language(&tree_sitter_go::language())?;
        Ok(Self { parser })
    }

    /// Read and parse a file from disk
    pub fn parse_file(&mut self, path: &Path) -> Result<ParsedFile, ParseError> {
        let source = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse_source(path, source)
    }

    /// Parse in-memory source text attributed to `path`
    pub fn parse_source(
        &mut self,
        path: impl Into<PathBuf>,
        source: String,
    ) -> Result<ParsedFile, ParseError> {
        let path = path.into();
        let tree = self
            .parser
            .parse(&source, None)
            .ok_or_else(|| ParseError::NoTree { path: path.clone() })?;

        if let Some(error) = first_error_node(tree.root_node()) {
            let (line, column) = node_position(error);
            let snippet = if error.is_missing() {
                format!("missing {}", error.kind())
            } else {
                node_text(error, &source)
                    .lines()
                    .next()
                    .unwrap_or_default()
                    .chars()
                    .take(SNIPPET_LEN)
                    .collect()
            };
            return Err(ParseError::Syntax {
                path,
                line,
                column,
                snippet,
            });
        }

        let package_name = package_clause_name(tree.root_node(), &source)
            .map(str::to_string)
            .ok_or_else(|| ParseError::MissingPackageClause { path: path.clone() })?;

        debug!(path = %path.display(), package = %package_name, "parsed Go file");
        Ok(ParsedFile::new(path, source, tree, package_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source() {
        let mut parser = GoParser::new().unwrap();
        let file = parser
            .parse_source(
                "voider.go",
                "package voider\n\nimport \"fmt\"\n\ntype Voider interface {\n\tVoidMethod()\n}\n\ntype Alias = fmt.Stringer\n"
                    .to_string(),
            )
            .unwrap();

        assert_eq!(file.package_name(), "voider");
        assert_eq!(file.imports().len(), 1);
        let specs = file.type_specs();
        assert_eq!(specs.len(), 1);
        let name = specs[0].child_by_field_name("name").unwrap();
        assert_eq!(file.text(name), "Voider");
    }

    #[test]
    fn test_syntax_error_reports_position() {
        let mut parser = GoParser::new().unwrap();
        let err = parser
            .parse_source(
                "broken.go",
                "package broken\n\ntype Broken interface {\n\tMethod(\n}\n".to_string(),
            )
            .unwrap_err();

        match err {
            ParseError::Syntax { path, line, .. } => {
                assert_eq!(path, PathBuf::from("broken.go"));
                assert!(line >= 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let mut parser = GoParser::new().unwrap();
        let err = parser
            .parse_file(Path::new("/nonexistent/gofake/missing.go"))
            .unwrap_err();
        assert!(matches!(err, ParseError::Io { .. }));
    }
}
