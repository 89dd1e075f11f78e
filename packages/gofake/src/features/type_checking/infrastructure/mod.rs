pub mod checker;
pub mod locator;
pub mod source_importer;

pub use checker::TypeChecker;
pub use locator::{FsLocator, GoModule, MemoryLocator};
pub use source_importer::SourceImporter;
