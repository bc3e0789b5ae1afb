//! markgone - Markups are gone
//!
//! Converts plain text that follows a few typographic conventions into an HTML
//! fragment. An optional first line followed by a blank line is the title, an
//! optional last line `Tags: ...` after a blank line is the tag list, and the
//! body in between is formatted godoc-style: paragraphs, headings, indented
//! preformatted blocks and auto-linked URLs.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::{to_html, to_html_string, LinkWords};
pub use error::MarkgoneError;
