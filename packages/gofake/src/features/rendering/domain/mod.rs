pub mod naming;
pub mod rendered_file;

pub use naming::{local_name, FakeNames, InvocationNames};
pub use rendered_file::{RenderedFile, SkippedInterface};
