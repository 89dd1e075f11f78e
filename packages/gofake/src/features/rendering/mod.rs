//! Rendering Feature
//!
//! Go source for the fakes of a loaded package, plus the formatting pass.
//!
//! ## Structure
//! - `domain/` - generated names, `RenderedFile`, `SkippedInterface`
//! - `application/` - `FakeRenderer`, `GoWriter`
//! - `ports/` - `SourceFormatter`
//! - `infrastructure/` - `GofmtFormatter`, `PassthroughFormatter`

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ports;

pub use application::FakeRenderer;
pub use domain::{RenderedFile, SkippedInterface};
pub use error::{FormatError, RenderError};
pub use infrastructure::{GofmtFormatter, PassthroughFormatter};
pub use ports::SourceFormatter;
