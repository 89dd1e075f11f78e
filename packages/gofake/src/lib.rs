//! gofake: call-recording fakes for Go interfaces
//!
//! Loads a Go package with tree-sitter, resolves its interfaces (embedded
//! interfaces from the same package and from imported packages included),
//! and renders a fake struct per interface: one hook and one call log per
//! method, plus helpers to query and assert on the recorded calls.
//!
//! ```no_run
//! use gofake::{Generator, GeneratorConfig};
//!
//! let generator = Generator::from_config(GeneratorConfig::default())?;
//! let package = generator.load_dir(std::path::Path::new("./store"))?;
//! let file = generator.generate(&package, &["Store"], "// generated; DO NOT EDIT.")?;
//! std::fs::write("./store/gofake.go", &file.bytes)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod errors;
pub mod features;
pub mod pipeline;
pub mod shared;

pub use config::{ConfigError, GeneratorConfig};
pub use errors::{GenerateError, Result};
pub use features::interface_model::{Identifier, Interface, Method};
pub use features::loading::{LoadError, LoadedPackage, PackageLoader};
pub use features::rendering::{FakeRenderer, RenderError, RenderedFile, SkippedInterface};
pub use features::type_model::Type;
pub use pipeline::{GeneratedFile, Generator};
