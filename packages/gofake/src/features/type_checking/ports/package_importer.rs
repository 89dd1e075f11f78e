//! Importer ports
//!
//! The checker reaches imported packages only through these traits, so the
//! source of packages (file system, memory) stays replaceable.

use std::path::PathBuf;
use std::rc::Rc;

use crate::features::type_checking::domain::CheckedPackage;
use crate::features::type_checking::error::ImportError;

/// Resolves an import path to a checked package.
pub trait PackageImporter {
    fn import(&self, path: &str) -> Result<Rc<CheckedPackage>, ImportError>;
}

/// A Go source file handed out by a locator
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub text: String,
}

/// Finds the source files of a package by import path.
pub trait PackageLocator {
    fn locate(&self, path: &str) -> Result<Vec<SourceFile>, ImportError>;
}
