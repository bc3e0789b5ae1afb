//! Error types for markgone

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the markgone tool
#[derive(Debug, Error)]
pub enum MarkgoneError {
    #[error("Input not found: {0}")]
    InputNotFound(PathBuf),

    #[error("No documents found under {0}")]
    NoDocuments(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl MarkgoneError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MarkgoneError::InputNotFound(_) => 2,
            MarkgoneError::NoDocuments(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MarkgoneError::InputNotFound(path) => {
                format!(
                    "Input not found: {}\n\n\
                    Suggestions:\n\
                    • Check the path for typos\n\
                    • Use '-' to read the document from standard input",
                    path.display()
                )
            }
            MarkgoneError::NoDocuments(path) => {
                format!(
                    "No documents found under {}\n\n\
                    Suggestions:\n\
                    • Documents are matched by extension (default: .txt)\n\
                    • Set input_extension in markgone.toml to match your files",
                    path.display()
                )
            }
            MarkgoneError::Config(_) | MarkgoneError::TomlDeserialize(_) => {
                format!(
                    "{}\n\n\
                    Expected markgone.toml layout:\n\
                    input_extension = \"txt\"\n\
                    output_extension = \"html\"\n\n\
                    [words]\n\
                    Parser = \"https://example.com/parser\"",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MarkgoneError
pub type Result<T> = std::result::Result<T, MarkgoneError>;
