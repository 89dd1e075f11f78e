//! Generation pipeline: load → resolve → render → format

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::GeneratorConfig;
use crate::errors::{GenerateError, Result};
use crate::features::imports::ImportRegistry;
use crate::features::interface_model::Interface;
use crate::features::loading::{LoadedPackage, PackageLoader};
use crate::features::rendering::{
    FakeRenderer, GofmtFormatter, PassthroughFormatter, SkippedInterface, SourceFormatter,
};
use crate::features::type_checking::{FsLocator, PackageImporter, SourceImporter};

/// Output of one generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub bytes: Vec<u8>,
    pub interfaces: Vec<String>,
    pub skipped: Vec<SkippedInterface>,
    /// Import paths of the generated file, sorted
    pub imports: Vec<String>,
    /// False when formatting was disabled or failed
    pub formatted: bool,
}

impl GeneratedFile {
    pub fn write_to(&self, path: &Path) -> Result<()> {
        std::fs::write(path, &self.bytes).map_err(|source| GenerateError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Resolved interfaces of a package, as printed by `--emit-model`
#[derive(Debug, Serialize)]
pub struct ModelView<'a> {
    pub package: &'a str,
    pub dir: &'a Path,
    pub imports: &'a ImportRegistry,
    pub interfaces: Vec<&'a Interface>,
}

pub struct Generator {
    config: GeneratorConfig,
    formatter: Box<dyn SourceFormatter>,
}

impl Generator {
    pub fn from_config(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let formatter: Box<dyn SourceFormatter> = if config.format.enabled {
            Box::new(GofmtFormatter::with_command(config.format.command.clone()))
        } else {
            Box::new(PassthroughFormatter)
        };
        Ok(Self { config, formatter })
    }

    pub fn with_formatter(mut self, formatter: Box<dyn SourceFormatter>) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Load every buildable file of `dir`, importing packages from disk.
    pub fn load_dir(&self, dir: &Path) -> Result<LoadedPackage> {
        let importer = SourceImporter::new(self.locator(dir));
        let package = PackageLoader::new(&importer).load_dir(dir)?;
        debug!(imported = importer.cached_len(), "loaded package");
        Ok(package)
    }

    /// Load an explicit file list as one package.
    pub fn load_files(&self, paths: &[PathBuf]) -> Result<LoadedPackage> {
        let dir = paths
            .first()
            .and_then(|p| p.parent())
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let importer = SourceImporter::new(self.locator(&dir));
        Ok(PackageLoader::new(&importer).load_files(paths)?)
    }

    /// Load in-memory sources, importing through `importer`.
    pub fn load_sources(
        &self,
        importer: &dyn PackageImporter,
        package_path: &str,
        sources: Vec<(PathBuf, String)>,
    ) -> Result<LoadedPackage> {
        Ok(PackageLoader::new(importer).load_sources(package_path, sources)?)
    }

    /// Render and format fakes for `names`.
    ///
    /// The package clause comes from the configuration when set, otherwise
    /// from the loaded package. A formatter failure keeps the unformatted
    /// source.
    pub fn generate<S: AsRef<str>>(
        &self,
        package: &LoadedPackage,
        names: &[S],
        header: &str,
    ) -> Result<GeneratedFile> {
        let package_name = self.config.package.as_deref().unwrap_or(&package.name);
        let rendered = FakeRenderer::new(package).render(names, package_name, header)?;

        let (bytes, formatted) = match self.formatter.format(rendered.source.as_bytes()) {
            Ok(bytes) => (bytes, true),
            Err(err) => {
                if self.config.format.enabled {
                    warn!(error = %err, "formatting failed, writing unformatted source");
                }
                (rendered.source.into_bytes(), false)
            }
        };
        info!(
            interfaces = rendered.interfaces.len(),
            skipped = rendered.skipped.len(),
            "generated fakes"
        );

        Ok(GeneratedFile {
            bytes,
            interfaces: rendered.interfaces,
            skipped: rendered.skipped,
            imports: rendered.imports,
            formatted: formatted && self.config.format.enabled,
        })
    }

    /// JSON dump of the resolved interfaces, in declaration order
    pub fn model_json(&self, package: &LoadedPackage) -> Result<String> {
        let view = ModelView {
            package: &package.name,
            dir: &package.dir,
            imports: &package.imports,
            interfaces: package.ordered_interfaces().collect(),
        };
        Ok(serde_json::to_string_pretty(&view)?)
    }

    fn locator(&self, dir: &Path) -> FsLocator {
        let imports = &self.config.imports;
        let locator = FsLocator::new(dir)
            .with_roots(imports.roots.clone())
            .with_goroot(imports.goroot.clone())
            .with_gopath(imports.gopath.clone());
        if imports.use_environment {
            locator.with_environment()
        } else {
            locator
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::rendering::FormatError;
    use crate::features::type_checking::MemoryLocator;

    struct FailingFormatter;

    impl SourceFormatter for FailingFormatter {
        fn format(&self, _source: &[u8]) -> std::result::Result<Vec<u8>, FormatError> {
            Err(FormatError::EmptyCommand)
        }
    }

    struct UppercaseFormatter;

    impl SourceFormatter for UppercaseFormatter {
        fn format(&self, source: &[u8]) -> std::result::Result<Vec<u8>, FormatError> {
            Ok(source.to_ascii_uppercase())
        }
    }

    fn voider(generator: &Generator) -> LoadedPackage {
        let importer = SourceImporter::new(MemoryLocator::new());
        generator
            .load_sources(
                &importer,
                "example.com/pkg",
                vec![(
                    PathBuf::from("pkg/voider.go"),
                    "package pkg\n\ntype Voider interface {\n\tVoidMethod()\n}\n".to_string(),
                )],
            )
            .unwrap()
    }

    #[test]
    fn test_formatter_output_is_used() {
        let generator = Generator::from_config(GeneratorConfig::default())
            .unwrap()
            .with_formatter(Box::new(UppercaseFormatter));
        let package = voider(&generator);
        let file = generator.generate(&package, &["Voider"], "").unwrap();
        assert!(file.formatted);
        assert!(file.bytes.starts_with(b"PACKAGE PKG"));
        assert!(file.imports.is_empty());
    }

    #[test]
    fn test_formatter_failure_falls_back() {
        let generator = Generator::from_config(GeneratorConfig::default())
            .unwrap()
            .with_formatter(Box::new(FailingFormatter));
        let package = voider(&generator);
        let file = generator.generate(&package, &["Voider"], "").unwrap();
        assert!(!file.formatted);
        assert!(file.bytes.starts_with(b"package pkg\n"));
    }

    #[test]
    fn test_package_override() {
        let config = GeneratorConfig::default()
            .with_formatting(false)
            .with_package("pkgtest");
        let generator = Generator::from_config(config).unwrap();
        let package = voider(&generator);
        let file = generator.generate(&package, &["Voider"], "").unwrap();
        assert!(file.bytes.starts_with(b"package pkgtest\n"));
        assert!(!file.formatted);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = GeneratorConfig::default().with_format_command(Vec::new());
        assert!(matches!(
            Generator::from_config(config),
            Err(GenerateError::Config(_))
        ));
    }

    #[test]
    fn test_model_json() {
        let generator =
            Generator::from_config(GeneratorConfig::default().with_formatting(false)).unwrap();
        let package = voider(&generator);
        let json = generator.model_json(&package).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["package"], "pkg");
        assert_eq!(value["interfaces"][0]["name"], "Voider");
        assert_eq!(value["interfaces"][0]["methods"][0]["name"], "VoidMethod");
    }
}
