//! Convert documents use case
//!
//! Renders one document or a whole tree of documents to HTML fragments.

use crate::domain::{PreparedDocument, Renderer};
use crate::error::{MarkgoneError, Result};
use crate::infrastructure::{read_document, write_output, Config, DocumentEntry, DocumentTree};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Options for conversion
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Document file or directory to convert
    pub input: PathBuf,

    /// Directory to mirror the input tree into (None = next to each input)
    pub out_dir: Option<PathBuf>,
}

/// One converted document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedDocument {
    pub input: PathBuf,
    pub output: PathBuf,
    pub title: Option<String>,
    pub tag_count: usize,
}

/// Summary of a conversion run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionReport {
    pub documents: Vec<ConvertedDocument>,
}

/// Service for converting documents to HTML
pub struct ConvertService {
    config: Config,
    renderer: Renderer,
}

impl ConvertService {
    /// Create new convert service
    pub fn new(config: Config) -> Self {
        ConvertService {
            config,
            renderer: Renderer::default(),
        }
    }

    /// Render a single text to `w`.
    pub fn convert_text<W: Write + ?Sized>(&self, text: &str, w: &mut W) -> Result<()> {
        self.renderer.render(w, text, &self.config.words)?;
        Ok(())
    }

    /// Convert every document found at `options.input`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input does not exist
    /// - A directory holds no documents
    /// - File I/O fails
    pub fn execute(&self, options: &ConvertOptions) -> Result<ConversionReport> {
        let tree = DocumentTree::new(options.input.clone(), self.config.input_extension.as_str());
        let entries = tree.discover()?;

        if entries.is_empty() {
            tracing::warn!(root = %options.input.display(), "no documents found");
            return Err(MarkgoneError::NoDocuments(options.input.clone()));
        }

        let mut report = ConversionReport::default();
        for entry in entries {
            let output = self.output_path(&entry, options.out_dir.as_deref());
            if output == entry.path {
                return Err(MarkgoneError::Config(format!(
                    "Output would overwrite input: {}",
                    output.display()
                )));
            }
            let converted = self.convert_file(&entry.path, &output)?;
            report.documents.push(converted);
        }

        Ok(report)
    }

    fn convert_file(&self, input: &Path, output: &Path) -> Result<ConvertedDocument> {
        let text = read_document(input)?;
        let doc = PreparedDocument::parse(&text);

        let mut html = Vec::with_capacity(text.len() * 2);
        self.renderer
            .render_prepared(&mut html, &doc, &self.config.words)?;
        write_output(output, &html)?;

        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            title = doc.title.as_deref().unwrap_or(""),
            "converted document"
        );

        Ok(ConvertedDocument {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            tag_count: doc.tags.as_ref().map_or(0, Vec::len),
            title: doc.title,
        })
    }

    fn output_path(&self, entry: &DocumentEntry, out_dir: Option<&Path>) -> PathBuf {
        let ext = self.config.output_extension.as_str();
        match out_dir {
            Some(dir) => dir.join(&entry.relative).with_extension(ext),
            None => entry.path.with_extension(ext),
        }
    }
}
