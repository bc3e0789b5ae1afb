//! List tags use case

use crate::domain::PreparedDocument;
use crate::error::Result;
use crate::infrastructure::{read_document, Config, DocumentTree};
use std::collections::BTreeSet;
use std::path::Path;

fn collect_tags_from_text(text: &str, output: &mut BTreeSet<String>) {
    if let Some(tags) = PreparedDocument::parse(text).tags {
        output.extend(tags);
    }
}

/// Service for listing all tags used in documents.
pub struct ListTagsService {
    config: Config,
}

impl ListTagsService {
    /// Create a new list tags service.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Collect the tags of every document under `root`, sorted and deduplicated.
    pub fn execute(&self, root: &Path) -> Result<Vec<String>> {
        let tree = DocumentTree::new(root.to_path_buf(), self.config.input_extension.as_str());

        let mut tags = BTreeSet::new();
        for entry in tree.discover()? {
            let content = read_document(&entry.path)?;
            collect_tags_from_text(&content, &mut tags);
        }

        Ok(tags.into_iter().collect())
    }
}
