//! Import declaration extraction from tree-sitter-go trees

use tree_sitter::Node;

use crate::features::imports::domain::Import;
use crate::shared::utils::tree_sitter::{
    find_descendants_by_kind, node_position, node_text, unquote_string_literal,
};

/// How an import spec binds the package in the importing file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportBinding {
    /// `import "fmt"`
    Default,
    /// `import f "fmt"`
    Alias(String),
    /// `import . "fmt"`
    Dot,
    /// `import _ "fmt"`
    Blank,
}

/// One import spec as written in a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDecl {
    pub path: String,
    pub binding: ImportBinding,
    pub line: usize,
}

impl ImportDecl {
    /// Name that qualifies identifiers from this import, if it binds one.
    ///
    /// For default bindings the package name must be known or guessed.
    pub fn local_name(&self, package_name: &str) -> Option<String> {
        match &self.binding {
            ImportBinding::Default => Some(package_name.to_string()),
            ImportBinding::Alias(alias) => Some(alias.clone()),
            ImportBinding::Dot | ImportBinding::Blank => None,
        }
    }

    /// Registry entry for this spec; blank imports have none.
    pub fn to_import(&self, package_name: &str) -> Option<Import> {
        let import = Import::new(package_name, self.path.as_str());
        match &self.binding {
            ImportBinding::Default => Some(import),
            ImportBinding::Alias(alias) => Some(import.with_alias(alias.as_str())),
            ImportBinding::Dot => Some(import.with_alias(".")),
            ImportBinding::Blank => None,
        }
    }
}

/// Every import spec in a parsed file, in source order
pub fn extract_imports(root: Node<'_>, source: &str) -> Vec<ImportDecl> {
    find_descendants_by_kind(root, "import_spec")
        .into_iter()
        .filter_map(|spec| {
            let path = spec.child_by_field_name("path")?;
            let binding = match spec.child_by_field_name("name") {
                None => ImportBinding::Default,
                Some(name) => match name.kind() {
                    "dot" => ImportBinding::Dot,
                    "blank_identifier" => ImportBinding::Blank,
                    _ => match node_text(name, source) {
                        "." => ImportBinding::Dot,
                        "_" => ImportBinding::Blank,
                        alias => ImportBinding::Alias(alias.to_string()),
                    },
                },
            };
            Some(ImportDecl {
                path: unquote_string_literal(node_text(path, source)),
                binding,
                line: node_position(spec).0,
            })
        })
        .collect()
}

/// Best guess at a package's name from its import path.
///
/// Used until the package clause of the imported source is read. Follows the
/// usual Go conventions: the last path element, skipping a major-version
/// element (`/v2`) and dropping a `.vN` suffix or `go-` prefix.
pub fn guess_package_name(path: &str) -> String {
    let mut segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.len() > 1 {
        if let Some(last) = segments.last() {
            if is_major_version(last) {
                segments.pop();
            }
        }
    }

    let mut name = segments.last().copied().unwrap_or(path);
    if let Some(idx) = name.rfind(".v") {
        if is_major_version(&name[idx + 1..]) {
            name = &name[..idx];
        }
    }
    let name = name.strip_prefix("go-").unwrap_or(name);
    let name = name.strip_suffix("-go").unwrap_or(name);

    name.chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

fn is_major_version(segment: &str) -> bool {
    segment
        .strip_prefix('v')
        .map(|rest| !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()))
        .unwrap_or(false)
}
