pub mod package_loader;

pub use package_loader::PackageLoader;
