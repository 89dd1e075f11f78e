pub mod loaded_package;

pub use loaded_package::LoadedPackage;
