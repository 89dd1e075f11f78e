//! Package locators
//!
//! `FsLocator` finds package sources the way the go tool would for a module
//! or GOPATH checkout; `MemoryLocator` serves sources registered in code.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::features::parsing::discover_go_files;
use crate::features::type_checking::error::ImportError;
use crate::features::type_checking::ports::{PackageLocator, SourceFile};

/// The enclosing module, from the nearest `go.mod`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoModule {
    pub path: String,
    pub root: PathBuf,
}

impl GoModule {
    /// Walk up from `dir` to the nearest `go.mod` and read its module path.
    pub fn find(dir: &Path) -> Option<Self> {
        for ancestor in dir.ancestors() {
            let go_mod = ancestor.join("go.mod");
            let Ok(text) = std::fs::read_to_string(&go_mod) else {
                continue;
            };
            let Some(path) = text.lines().find_map(|line| {
                let rest = line.trim().strip_prefix("module")?;
                let path = rest.trim().trim_matches('"');
                (!path.is_empty()).then(|| path.to_string())
            }) else {
                continue;
            };
            return Some(Self {
                path,
                root: ancestor.to_path_buf(),
            });
        }
        None
    }

    /// Directory of `import_path` inside this module
    fn resolve(&self, import_path: &str) -> Option<PathBuf> {
        if import_path == self.path {
            return Some(self.root.clone());
        }
        let rest = import_path.strip_prefix(&self.path)?.strip_prefix('/')?;
        Some(self.root.join(rest))
    }
}

/// File-system locator.
///
/// Search order: `vendor` directories from the scanned directory up to the
/// module root, the enclosing module, configured roots, `$GOROOT/src`,
/// `$GOPATH/src`, and the module cache under `$GOPATH/pkg/mod`.
#[derive(Debug, Clone, Default)]
pub struct FsLocator {
    start_dir: PathBuf,
    module: Option<GoModule>,
    roots: Vec<PathBuf>,
    goroot: Option<PathBuf>,
    gopath: Vec<PathBuf>,
}

impl FsLocator {
    pub fn new(start_dir: impl Into<PathBuf>) -> Self {
        let start_dir = start_dir.into();
        let module = GoModule::find(&start_dir);
        Self {
            start_dir,
            module,
            roots: Vec::new(),
            goroot: None,
            gopath: Vec::new(),
        }
    }

    /// Fill GOROOT and GOPATH from the environment, with the go tool's
    /// defaults when unset.
    pub fn with_environment(mut self) -> Self {
        if self.goroot.is_none() {
            self.goroot = std::env::var_os("GOROOT")
                .map(PathBuf::from)
                .filter(|p| !p.as_os_str().is_empty())
                .or_else(|| {
                    ["/usr/local/go", "/usr/lib/go"]
                        .iter()
                        .map(PathBuf::from)
                        .find(|p| p.join("src").is_dir())
                });
        }
        if self.gopath.is_empty() {
            self.gopath = match std::env::var_os("GOPATH") {
                Some(value) if !value.is_empty() => std::env::split_paths(&value).collect(),
                _ => std::env::var_os("HOME")
                    .map(|home| vec![PathBuf::from(home).join("go")])
                    .unwrap_or_default(),
            };
        }
        self
    }

    pub fn with_roots(mut self, roots: Vec<PathBuf>) -> Self {
        self.roots = roots;
        self
    }

    pub fn with_goroot(mut self, goroot: Option<PathBuf>) -> Self {
        if goroot.is_some() {
            self.goroot = goroot;
        }
        self
    }

    pub fn with_gopath(mut self, gopath: Vec<PathBuf>) -> Self {
        if !gopath.is_empty() {
            self.gopath = gopath;
        }
        self
    }

    pub fn module(&self) -> Option<&GoModule> {
        self.module.as_ref()
    }

    /// Candidate directories for `import_path`, in search order
    pub fn candidates(&self, import_path: &str) -> Vec<PathBuf> {
        let mut out = Vec::new();

        let stop = self.module.as_ref().map(|m| m.root.as_path());
        for ancestor in self.start_dir.ancestors() {
            out.push(ancestor.join("vendor").join(import_path));
            if Some(ancestor) == stop {
                break;
            }
        }
        if let Some(dir) = self.module.as_ref().and_then(|m| m.resolve(import_path)) {
            out.push(dir);
        }
        out.extend(self.roots.iter().map(|root| root.join(import_path)));
        if let Some(goroot) = &self.goroot {
            out.push(goroot.join("src").join(import_path));
        }
        for gopath in &self.gopath {
            out.push(gopath.join("src").join(import_path));
        }
        for gopath in &self.gopath {
            if let Some(dir) = module_cache_dir(&gopath.join("pkg").join("mod"), import_path) {
                out.push(dir);
            }
        }
        out
    }
}

impl PackageLocator for FsLocator {
    fn locate(&self, import_path: &str) -> Result<Vec<SourceFile>, ImportError> {
        for dir in self.candidates(import_path) {
            if !dir.is_dir() {
                continue;
            }
            let paths = discover_go_files(&dir).map_err(|source| ImportError::Io {
                path: import_path.to_string(),
                source,
            })?;
            if paths.is_empty() {
                continue;
            }
            debug!(package = import_path, dir = %dir.display(), files = paths.len(), "located package");

            let mut files = Vec::with_capacity(paths.len());
            for path in paths {
                let text = std::fs::read_to_string(&path).map_err(|source| ImportError::Io {
                    path: import_path.to_string(),
                    source,
                })?;
                files.push(SourceFile { path, text });
            }
            return Ok(files);
        }
        Err(ImportError::NotFound {
            path: import_path.to_string(),
        })
    }
}

/// Newest `<path>@<version>` directory in a module cache.
///
/// Upper-case letters are escaped as `!` + lower-case, as the go tool does.
/// Only works for packages at a module root.
fn module_cache_dir(cache: &Path, import_path: &str) -> Option<PathBuf> {
    let escaped: String = import_path
        .chars()
        .flat_map(|c| {
            if c.is_ascii_uppercase() {
                vec!['!', c.to_ascii_lowercase()]
            } else {
                vec![c]
            }
        })
        .collect();
    let (parent, last) = match escaped.rsplit_once('/') {
        Some((parent, last)) => (cache.join(parent), last.to_string()),
        None => (cache.to_path_buf(), escaped.clone()),
    };
    let prefix = format!("{}@", last);

    let mut versions: Vec<PathBuf> = std::fs::read_dir(&parent)
        .ok()?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_name().to_string_lossy().starts_with(&prefix))
        .map(|entry| entry.path())
        .collect();
    versions.sort();
    versions.pop()
}

/// In-memory locator keyed by import path
#[derive(Debug, Clone, Default)]
pub struct MemoryLocator {
    packages: FxHashMap<String, Vec<SourceFile>>,
}

impl MemoryLocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a package from `(file name, source)` pairs
    pub fn with_package(mut self, import_path: &str, files: &[(&str, &str)]) -> Self {
        self.insert(import_path, files);
        self
    }

    pub fn insert(&mut self, import_path: &str, files: &[(&str, &str)]) {
        let files = files
            .iter()
            .map(|(name, text)| SourceFile {
                path: PathBuf::from(import_path).join(name),
                text: text.to_string(),
            })
            .collect();
        self.packages.insert(import_path.to_string(), files);
    }
}

impl PackageLocator for MemoryLocator {
    fn locate(&self, import_path: &str) -> Result<Vec<SourceFile>, ImportError> {
        self.packages
            .get(import_path)
            .cloned()
            .ok_or_else(|| ImportError::NotFound {
                path: import_path.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_go_module_find() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("go.mod"), "module example.com/app\n\ngo 1.21\n").unwrap();
        let nested = dir.path().join("internal").join("svc");
        fs::create_dir_all(&nested).unwrap();

        let module = GoModule::find(&nested).unwrap();
        assert_eq!(module.path, "example.com/app");
        assert_eq!(module.root, dir.path());
        assert_eq!(
            module.resolve("example.com/app/internal/store"),
            Some(dir.path().join("internal").join("store"))
        );
        assert_eq!(module.resolve("example.com/application"), None);
    }

    #[test]
    fn test_fs_locator_finds_module_and_vendor_packages() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("go.mod"), "module example.com/app\n").unwrap();
        let svc = dir.path().join("svc");
        let store = dir.path().join("store");
        let vendored = dir.path().join("vendor").join("github.com").join("x").join("dep");
        for d in [&svc, &store, &vendored] {
            fs::create_dir_all(d).unwrap();
        }
        fs::write(store.join("store.go"), "package store\n").unwrap();
        fs::write(store.join("store_test.go"), "package store\n").unwrap();
        fs::write(vendored.join("dep.go"), "package dep\n").unwrap();

        let locator = FsLocator::new(&svc);
        let files = locator.locate("example.com/app/store").unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].text, "package store\n");

        let files = locator.locate("github.com/x/dep").unwrap();
        assert_eq!(files[0].path, vendored.join("dep.go"));

        assert!(matches!(
            locator.locate("github.com/x/missing"),
            Err(ImportError::NotFound { .. })
        ));
    }

    #[test]
    fn test_fs_locator_configured_roots() {
        let dir = TempDir::new().unwrap();
        let pkg = dir.path().join("lib").join("shapes");
        fs::create_dir_all(&pkg).unwrap();
        fs::write(pkg.join("shapes.go"), "package shapes\n").unwrap();

        let locator = FsLocator::new(dir.path()).with_roots(vec![dir.path().join("lib")]);
        assert_eq!(locator.locate("shapes").unwrap().len(), 1);
    }

    #[test]
    fn test_module_cache_dir_picks_newest_version() {
        let dir = TempDir::new().unwrap();
        let base = dir.path().join("github.com").join("!burnt!sushi");
        fs::create_dir_all(base.join("toml@v1.2.0")).unwrap();
        fs::create_dir_all(base.join("toml@v1.3.2")).unwrap();

        assert_eq!(
            module_cache_dir(dir.path(), "github.com/BurntSushi/toml"),
            Some(base.join("toml@v1.3.2"))
        );
    }

    #[test]
    fn test_memory_locator() {
        let locator = MemoryLocator::new().with_package("fmt", &[("print.go", "package fmt\n")]);
        let files = locator.locate("fmt").unwrap();
        assert_eq!(files[0].path, PathBuf::from("fmt/print.go"));
        assert!(locator.locate("os").is_err());
    }
}
