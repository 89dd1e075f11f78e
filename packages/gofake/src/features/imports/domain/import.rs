//! Import registry
//!
//! Every package imported by the scanned files, with its local alias, and the
//! required flag set when a rendered declaration mentions it.

use serde::Serialize;

/// One imported package
#[derive(Debug, Clone, Eq, Serialize)]
pub struct Import {
    /// Package name (from the imported package clause, or guessed from the path)
    pub name: String,
    /// Local alias; `.` for dot imports
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    pub path: String,
    pub required: bool,
}

impl Import {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
            path: path.into(),
            required: false,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Name that qualifies this package's identifiers in the importing file
    pub fn local_name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    pub fn is_dot(&self) -> bool {
        self.alias.as_deref() == Some(".")
    }

    fn matches_name(&self, name: &str) -> bool {
        self.name == name || self.alias.as_deref() == Some(name)
    }

    /// Import spec line as it appears inside an import block
    pub fn render(&self) -> String {
        match &self.alias {
            Some(alias) => format!("{} \"{}\"", alias, self.path),
            None => format!("\"{}\"", self.path),
        }
    }
}

/// Deduplication identity is (name, path); alias and flag are ignored.
impl PartialEq for Import {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.path == other.path
    }
}

/// Ordered set of imports
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ImportRegistry {
    imports: Vec<Import>,
}

impl ImportRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an import; returns false if an equal import was already present.
    ///
    /// Blank imports never bind a name and are not recorded.
    pub fn add(&mut self, import: Import) -> bool {
        if import.alias.as_deref() == Some("_") || self.contains(&import) {
            return false;
        }
        self.imports.push(import);
        true
    }

    pub fn contains(&self, import: &Import) -> bool {
        self.imports.iter().any(|i| i == import)
    }

    /// Mark every import whose name or alias is `name` as required.
    ///
    /// Idempotent. A dot import is never matched through its `.` alias.
    /// Returns the number of entries matching.
    pub fn require_by_name(&mut self, name: &str) -> usize {
        if name == "." {
            return 0;
        }
        let mut matched = 0;
        for import in self.imports.iter_mut().filter(|i| i.matches_name(name)) {
            import.required = true;
            matched += 1;
        }
        matched
    }

    /// Mark every dot import as required
    pub fn require_dot_imports(&mut self) -> usize {
        let mut matched = 0;
        for import in self.imports.iter_mut().filter(|i| i.is_dot()) {
            import.required = true;
            matched += 1;
        }
        matched
    }

    /// Required imports sorted by path
    pub fn required(&self) -> Vec<&Import> {
        let mut required: Vec<&Import> = self.imports.iter().filter(|i| i.required).collect();
        required.sort_by(|a, b| a.path.cmp(&b.path).then_with(|| a.alias.cmp(&b.alias)));
        required
    }

    /// Every recorded import in insertion order
    pub fn all(&self) -> &[Import] {
        &self.imports
    }

    /// First import whose name or alias is `name`
    pub fn get_by_name(&self, name: &str) -> Option<&Import> {
        self.imports.iter().find(|i| i.matches_name(name))
    }

    pub fn get_by_path(&self, path: &str) -> Option<&Import> {
        self.imports.iter().find(|i| i.path == path)
    }

    /// Replace a guessed package name with the name found in the package clause
    pub fn set_package_name(&mut self, path: &str, name: &str) {
        for import in self.imports.iter_mut().filter(|i| i.path == path) {
            import.name = name.to_string();
        }
    }

    /// Clear every required flag
    pub fn reset_required(&mut self) {
        for import in &mut self.imports {
            import.required = false;
        }
    }

    pub fn len(&self) -> usize {
        self.imports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }
}
