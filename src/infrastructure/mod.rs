//! Infrastructure layer - Files and configuration

pub mod config;
pub mod workspace;

pub use config::Config;
pub use workspace::{read_document, write_output, DocumentEntry, DocumentTree};
