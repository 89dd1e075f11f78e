//! Type Checking Feature
//!
//! The semantic side of loading: validates the scanned package as a whole
//! and imports other packages' interfaces with complete method sets.
//!
//! ## Structure
//! - `domain/` - checked model (`CheckedPackage`, `CheckedType`, ...)
//! - `ports/` - `PackageImporter`, `PackageLocator`
//! - `infrastructure/` - `TypeChecker`, `SourceImporter`, `FsLocator`,
//!   `MemoryLocator`

pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ports;

pub use domain::{CheckedInterface, CheckedPackage, CheckedType, PackageRef};
pub use error::{CheckError, ImportError};
pub use infrastructure::{FsLocator, GoModule, MemoryLocator, SourceImporter, TypeChecker};
pub use ports::{PackageImporter, PackageLocator, SourceFile};
