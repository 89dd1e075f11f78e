//! Parsed Go source file

use std::path::{Path, PathBuf};

use tree_sitter::{Node, Tree};

use crate::features::imports::{extract_imports, ImportDecl};
use crate::shared::utils::tree_sitter::{
    find_child_by_kind, find_children_by_kinds, named_children, node_text,
};

/// A Go file with its syntax tree.
///
/// Owns the source text so nodes can be resolved to text for as long as the
/// file lives.
#[derive(Debug, Clone)]
pub struct ParsedFile {
    path: PathBuf,
    source: String,
    tree: Tree,
    package_name: String,
}

impl ParsedFile {
    pub(crate) fn new(path: PathBuf, source: String, tree: Tree, package_name: String) -> Self {
        Self {
            path,
            source,
            tree,
            package_name,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Name from the `package` clause
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    pub fn imports(&self) -> Vec<ImportDecl> {
        extract_imports(self.root(), &self.source)
    }

    /// Package-level `type_spec` nodes (type aliases excluded)
    pub fn type_specs(&self) -> Vec<Node<'_>> {
        self.type_declarations()
            .into_iter()
            .filter(|spec| spec.kind() == "type_spec")
            .collect()
    }

    /// Package-level `type_spec` and `type_alias` nodes
    pub fn type_declarations(&self) -> Vec<Node<'_>> {
        named_children(self.root())
            .into_iter()
            .filter(|c| c.kind() == "type_declaration")
            .flat_map(|decl| find_children_by_kinds(decl, &["type_spec", "type_alias"]))
            .collect()
    }

    pub fn text(&self, node: Node<'_>) -> &str {
        node_text(node, &self.source)
    }
}

/// Package name declared by a `source_file` root
pub(crate) fn package_clause_name<'src>(root: Node<'_>, source: &'src str) -> Option<&'src str> {
    let clause = find_child_by_kind(root, "package_clause")?;
    let ident = find_child_by_kind(clause, "package_identifier")?;
    Some(node_text(ident, source))
}
