pub mod fake_renderer;
pub mod go_writer;

pub use fake_renderer::FakeRenderer;
pub use go_writer::GoWriter;
