//! Domain layer - Document preparation and HTML rendering

pub mod document;
pub mod escape;
pub mod formatter;
pub mod render;

pub use document::PreparedDocument;
pub use formatter::{BodyFormatter, GodocFormatter, LinkWords};
pub use render::{to_html, to_html_string, Renderer};
