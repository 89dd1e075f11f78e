pub mod error;
pub mod identifier;
pub mod interface;
pub mod method;

pub use error::ModelError;
pub use identifier::{title_case, Identifier};
pub use interface::{Fakeability, Interface};
pub use method::Method;
