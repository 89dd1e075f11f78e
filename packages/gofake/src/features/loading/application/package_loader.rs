//! Package loader
//!
//! Drives one load of the package under generation:
//!
//! 1. discover and parse the files (any syntax error is fatal)
//! 2. type-check the file set as a whole (fatal on failure)
//! 3. record imports, importing each package through the importer and
//!    seeding its interfaces under `pkg.Name` from the checked model
//! 4. build every local interface from syntax
//! 5. flatten embeds

use std::path::{Path, PathBuf};
use std::rc::Rc;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, warn};

use crate::features::imports::{guess_package_name, Import, ImportBinding, ImportRegistry};
use crate::features::interface_model::{resolve_embeds, Interface, InterfaceBuilder};
use crate::features::loading::domain::LoadedPackage;
use crate::features::loading::error::LoadError;
use crate::features::parsing::{discover_go_files, GoParser, ParsedFile};
use crate::features::type_checking::{
    CheckedPackage, CheckedType, ImportError, PackageImporter, PackageRef, TypeChecker,
};

pub struct PackageLoader<'i> {
    importer: Option<&'i dyn PackageImporter>,
}

impl<'i> PackageLoader<'i> {
    /// Loader that resolves imported packages through `importer`
    pub fn new(importer: &'i dyn PackageImporter) -> Self {
        Self {
            importer: Some(importer),
        }
    }

    /// Loader that never imports; embeds of imported interfaces fail.
    pub fn without_imports() -> Self {
        Self { importer: None }
    }

    /// Load every buildable `.go` file in `dir`.
    pub fn load_dir(&self, dir: &Path) -> Result<LoadedPackage, LoadError> {
        let paths = discover_go_files(dir).map_err(|source| LoadError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        if paths.is_empty() {
            return Err(LoadError::NoGoFiles {
                dir: dir.to_path_buf(),
            });
        }
        self.load_files(&paths)
    }

    /// Load an explicit list of files as one package.
    pub fn load_files(&self, paths: &[PathBuf]) -> Result<LoadedPackage, LoadError> {
        let mut sources = Vec::with_capacity(paths.len());
        for path in paths {
            let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
                path: path.clone(),
                source,
            })?;
            sources.push((path.clone(), text));
        }
        let dir = package_dir(paths);
        let package_path = dir.display().to_string();
        self.load_sources(&package_path, sources)
    }

    /// Load in-memory sources as the package `package_path`.
    pub fn load_sources(
        &self,
        package_path: &str,
        sources: Vec<(PathBuf, String)>,
    ) -> Result<LoadedPackage, LoadError> {
        let paths: Vec<PathBuf> = sources.iter().map(|(path, _)| path.clone()).collect();
        let dir = package_dir(&paths);
        if sources.is_empty() {
            return Err(LoadError::NoGoFiles { dir });
        }

        let mut parser = GoParser::new()?;
        let mut files = Vec::with_capacity(sources.len());
        for (path, text) in sources {
            files.push(parser.parse_source(path, text)?);
        }

        let checker = match self.importer {
            Some(importer) => TypeChecker::with_importer(importer),
            None => TypeChecker::new(),
        };
        let checked = checker.check(package_path, &files)?;
        debug!(
            package = %checked.name,
            files = files.len(),
            interfaces = checked.interfaces.len(),
            "type checked package"
        );

        let mut interfaces: FxHashMap<String, Interface> = FxHashMap::default();
        let imports = self.collect_imports(&files, &mut interfaces);

        // Local declarations shadow dot-imported names
        let mut declaration_order = Vec::new();
        let mut local_types = FxHashSet::default();
        for file in &files {
            for decl in file.type_declarations() {
                if let Some(name) = decl.child_by_field_name("name") {
                    local_types.insert(file.text(name).to_string());
                }
            }
            for spec in file.type_specs() {
                let is_interface = spec
                    .child_by_field_name("type")
                    .is_some_and(|ty| ty.kind() == "interface_type");
                if !is_interface {
                    continue;
                }
                let iface = InterfaceBuilder::from_type_spec(spec, file.source())?;
                debug!(
                    interface = %iface.name,
                    methods = iface.methods.len(),
                    embeds = iface.embeds.len(),
                    "found interface"
                );
                declaration_order.push(iface.name.clone());
                interfaces.insert(iface.name.clone(), iface);
            }
        }

        resolve_embeds(&mut interfaces)?;

        let locals: FxHashMap<String, Interface> = declaration_order
            .iter()
            .filter_map(|name| interfaces.remove_entry(name))
            .collect();

        Ok(LoadedPackage {
            name: checked.name,
            dir,
            files: paths,
            imports,
            interfaces: locals,
            declaration_order,
            local_types,
        })
    }

    /// Build the import registry and seed interfaces of imported packages.
    fn collect_imports(
        &self,
        files: &[ParsedFile],
        interfaces: &mut FxHashMap<String, Interface>,
    ) -> ImportRegistry {
        let mut registry = ImportRegistry::new();
        let mut mentioned: Vec<PackageRef> = Vec::new();

        for file in files {
            for decl in file.imports() {
                if decl.binding == ImportBinding::Blank {
                    continue;
                }
                let package = self.import(&decl.path);
                let package_name = package
                    .as_ref()
                    .map(|p| p.name.clone())
                    .unwrap_or_else(|| guess_package_name(&decl.path));

                if let Some(import) = decl.to_import(&package_name) {
                    registry.add(import);
                }

                let Some(package) = package else {
                    continue;
                };
                let prefix = match &decl.binding {
                    ImportBinding::Blank | ImportBinding::Dot => None,
                    ImportBinding::Default => Some(package.name.clone()),
                    ImportBinding::Alias(alias) => Some(alias.clone()),
                };
                for checked in &package.interfaces {
                    let key = match &prefix {
                        Some(prefix) => format!("{}.{}", prefix, checked.name),
                        None => checked.name.clone(),
                    };
                    if interfaces.contains_key(&key) {
                        continue;
                    }
                    for func in &checked.methods {
                        for var in func.signature.params.iter().chain(&func.signature.results) {
                            package_refs(&var.ty, &mut mentioned);
                        }
                    }
                    interfaces.insert(key, InterfaceBuilder::from_checked(checked));
                }
            }
        }

        // Packages only reachable through imported interfaces' signatures
        for package in mentioned {
            if registry.get_by_path(&package.path).is_some()
                || registry.get_by_name(&package.name).is_some()
            {
                continue;
            }
            debug!(package = %package.path, "recording indirect import");
            registry.add(Import::new(package.name, package.path));
        }

        registry
    }

    fn import(&self, path: &str) -> Option<Rc<CheckedPackage>> {
        let importer = self.importer?;
        match importer.import(path) {
            Ok(package) => Some(package),
            Err(ImportError::NotFound { .. }) if path == "C" || path == "unsafe" => None,
            Err(err) => {
                warn!(package = path, error = %err, "cannot import package, skipping");
                None
            }
        }
    }
}

/// Directory shared by the package files
fn package_dir(paths: &[PathBuf]) -> PathBuf {
    paths
        .first()
        .and_then(|path| path.parent())
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Every package mentioned by a checked type
fn package_refs(ty: &CheckedType, out: &mut Vec<PackageRef>) {
    match ty {
        CheckedType::Basic { .. } => {}
        CheckedType::Named { package, .. } => {
            if let Some(package) = package {
                if !out.contains(package) {
                    out.push(package.clone());
                }
            }
        }
        CheckedType::Pointer { elem }
        | CheckedType::Slice { elem }
        | CheckedType::Array { elem, .. }
        | CheckedType::Chan { elem, .. } => package_refs(elem, out),
        CheckedType::Map { key, value } => {
            package_refs(key, out);
            package_refs(value, out);
        }
        CheckedType::Literal { packages, .. } => {
            for package in packages {
                if !out.contains(package) {
                    out.push(package.clone());
                }
            }
        }
    }
}
