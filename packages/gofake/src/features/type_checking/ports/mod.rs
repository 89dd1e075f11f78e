pub mod package_importer;

pub use package_importer::{PackageImporter, PackageLocator, SourceFile};
