pub mod import_extractor;

pub use import_extractor::{extract_imports, guess_package_name, ImportBinding, ImportDecl};
