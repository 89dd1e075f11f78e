//! Source importer
//!
//! Imports a package by locating its sources, parsing them and checking them
//! leniently. Results are cached per import path for the importer's lifetime;
//! an import reached again while it is still being checked is a cycle and
//! fails instead of recursing.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::features::parsing::GoParser;
use crate::features::type_checking::domain::CheckedPackage;
use crate::features::type_checking::error::ImportError;
use crate::features::type_checking::infrastructure::checker::TypeChecker;
use crate::features::type_checking::ports::{PackageImporter, PackageLocator};

/// Packages that have no Go source to check
const PSEUDO_PACKAGES: &[&str] = &["C", "unsafe"];

pub struct SourceImporter<L: PackageLocator> {
    locator: L,
    cache: RefCell<FxHashMap<String, Rc<CheckedPackage>>>,
    failed: RefCell<FxHashMap<String, String>>,
    in_progress: RefCell<FxHashSet<String>>,
}

impl<L: PackageLocator> SourceImporter<L> {
    pub fn new(locator: L) -> Self {
        Self {
            locator,
            cache: RefCell::new(FxHashMap::default()),
            failed: RefCell::new(FxHashMap::default()),
            in_progress: RefCell::new(FxHashSet::default()),
        }
    }

    pub fn locator(&self) -> &L {
        &self.locator
    }

    /// Number of packages imported successfully so far
    pub fn cached_len(&self) -> usize {
        self.cache.borrow().len()
    }

    fn load(&self, path: &str) -> Result<CheckedPackage, ImportError> {
        let sources = self.locator.locate(path)?;
        let mut parser = GoParser::new()?;
        let mut files = Vec::with_capacity(sources.len());
        for source in sources {
            files.push(parser.parse_source(source.path, source.text)?);
        }
        let checker = TypeChecker::with_importer(self);
        Ok(checker.check_lenient(path, &files)?)
    }
}

impl<L: PackageLocator> PackageImporter for SourceImporter<L> {
    fn import(&self, path: &str) -> Result<Rc<CheckedPackage>, ImportError> {
        if let Some(package) = self.cache.borrow().get(path) {
            return Ok(Rc::clone(package));
        }
        if let Some(message) = self.failed.borrow().get(path) {
            return Err(ImportError::Failed {
                path: path.to_string(),
                message: message.clone(),
            });
        }
        if PSEUDO_PACKAGES.contains(&path) {
            return Err(ImportError::NotFound {
                path: path.to_string(),
            });
        }
        if !self.in_progress.borrow_mut().insert(path.to_string()) {
            return Err(ImportError::Cycle {
                path: path.to_string(),
            });
        }

        let loaded = self.load(path);
        self.in_progress.borrow_mut().remove(path);

        match loaded {
            Ok(package) => {
                debug!(
                    package = path,
                    interfaces = package.interfaces.len(),
                    "imported package"
                );
                let package = Rc::new(package);
                self.cache
                    .borrow_mut()
                    .insert(path.to_string(), Rc::clone(&package));
                Ok(package)
            }
            Err(err) => {
                debug!(package = path, error = %err, "import failed");
                self.failed
                    .borrow_mut()
                    .insert(path.to_string(), err.to_string());
                Err(err)
            }
        }
    }
}
