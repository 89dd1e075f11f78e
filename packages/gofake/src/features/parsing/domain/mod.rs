pub mod interface_element;
pub mod parsed_file;

pub use interface_element::{interface_elements, InterfaceElement};
pub use parsed_file::ParsedFile;
