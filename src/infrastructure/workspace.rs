//! Document files on disk

use crate::error::{MarkgoneError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A document file found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentEntry {
    /// Full path to the document
    pub path: PathBuf,

    /// Path relative to the directory it was discovered from
    pub relative: PathBuf,
}

impl DocumentEntry {
    pub fn new(path: PathBuf, relative: PathBuf) -> Self {
        DocumentEntry { path, relative }
    }
}

/// Document files under a root path, matched by extension
#[derive(Debug, Clone)]
pub struct DocumentTree {
    pub root: PathBuf,
    pub extension: String,
}

impl DocumentTree {
    pub fn new(root: PathBuf, extension: impl Into<String>) -> Self {
        DocumentTree {
            root,
            extension: extension.into(),
        }
    }

    /// List documents, sorted by path.
    ///
    /// A file root is returned as-is whatever its extension. Hidden files and
    /// directories below the root are skipped.
    pub fn discover(&self) -> Result<Vec<DocumentEntry>> {
        if !self.root.exists() {
            return Err(MarkgoneError::InputNotFound(self.root.clone()));
        }

        if self.root.is_file() {
            let name = self.root.file_name().map(PathBuf::from).unwrap_or_default();
            return Ok(vec![DocumentEntry::new(self.root.clone(), name)]);
        }

        let mut entries = Vec::new();
        let walker = WalkDir::new(&self.root)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e.file_name()));

        for entry in walker {
            let entry = entry.map_err(|e| {
                MarkgoneError::Io(e.into_io_error().unwrap_or_else(|| {
                    std::io::Error::new(std::io::ErrorKind::Other, "directory walk failed")
                }))
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            if !self.matches_extension(path) {
                tracing::debug!(path = %path.display(), "skipping non-document file");
                continue;
            }

            let relative = path
                .strip_prefix(&self.root)
                .map(Path::to_path_buf)
                .unwrap_or_else(|_| path.to_path_buf());
            entries.push(DocumentEntry::new(path.to_path_buf(), relative));
        }

        Ok(entries)
    }

    fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == self.extension)
    }
}

fn is_hidden(name: &std::ffi::OsStr) -> bool {
    name.to_str().is_some_and(|s| s.starts_with('.'))
}

/// Read a document as UTF-8 text
pub fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            MarkgoneError::InputNotFound(path.to_path_buf())
        } else {
            MarkgoneError::Io(e)
        }
    })
}

/// Write rendered HTML, creating parent directories as needed
pub fn write_output(path: &Path, html: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, html)?;
    Ok(())
}
