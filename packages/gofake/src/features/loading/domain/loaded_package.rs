//! Result of loading a package

use std::path::PathBuf;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

use crate::features::imports::ImportRegistry;
use crate::features::interface_model::Interface;

/// A scanned package with every interface resolved.
///
/// Immutable once loaded; renderers work on their own copy of the import
/// registry.
#[derive(Debug, Clone, Serialize)]
pub struct LoadedPackage {
    /// Name from the package clause
    pub name: String,
    /// Directory holding the scanned files
    pub dir: PathBuf,
    pub files: Vec<PathBuf>,
    pub imports: ImportRegistry,
    /// Interfaces declared in the package, embeds flattened
    #[serde(skip)]
    pub interfaces: FxHashMap<String, Interface>,
    /// Declared interface names in source order
    pub declaration_order: Vec<String>,
    /// Every type name declared in the package
    #[serde(skip)]
    pub local_types: FxHashSet<String>,
}

impl LoadedPackage {
    pub fn interface(&self, name: &str) -> Option<&Interface> {
        self.interfaces.get(name)
    }

    /// Interfaces in declaration order
    pub fn ordered_interfaces(&self) -> impl Iterator<Item = &Interface> {
        self.declaration_order
            .iter()
            .filter_map(|name| self.interfaces.get(name))
    }
}
