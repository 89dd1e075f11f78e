//! Common test utilities for gofake
//!
//! Go source fixtures and loading helpers shared by the integration tests.

#![allow(dead_code)]

mod fixtures;

pub use fixtures::*;

use std::path::PathBuf;

use gofake::features::type_checking::{MemoryLocator, SourceImporter};
use gofake::{GeneratedFile, Generator, GeneratorConfig, LoadedPackage};

/// Generator that never spawns a formatter and ignores GOROOT/GOPATH
pub fn generator() -> Generator {
    let mut config = GeneratorConfig::default().with_formatting(false);
    config.imports.use_environment = false;
    Generator::from_config(config).expect("default config is valid")
}

/// Load in-memory files as `example.com/<package>`, importing from `locator`
pub fn load_with(locator: MemoryLocator, package: &str, files: &[(&str, &str)]) -> LoadedPackage {
    let importer = SourceImporter::new(locator);
    let sources = files
        .iter()
        .map(|(name, text)| (PathBuf::from(package).join(name), text.to_string()))
        .collect();
    generator()
        .load_sources(&importer, &format!("example.com/{}", package), sources)
        .expect("fixture package loads")
}

pub fn load(package: &str, files: &[(&str, &str)]) -> LoadedPackage {
    load_with(MemoryLocator::new(), package, files)
}

pub fn generate(package: &LoadedPackage, names: &[&str]) -> GeneratedFile {
    generator()
        .generate(package, names, HEADER)
        .expect("fakes render")
}

pub fn source(file: &GeneratedFile) -> String {
    String::from_utf8(file.bytes.clone()).expect("generated source is UTF-8")
}
