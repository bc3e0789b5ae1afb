//! Body formatter - plain text paragraphs to HTML
//!
//! The document renderer hands the body to a [`BodyFormatter`] and copies its
//! output verbatim. [`GodocFormatter`] is the bundled implementation; it follows
//! the classic godoc conventions:
//!
//! - blank lines separate paragraphs (`<p>`)
//! - a lone line surrounded by blank lines, starting with a capital letter and
//!   free of punctuation, is a heading (`<h3>`)
//! - runs of indented lines are preformatted (`<pre>`), common indent removed
//! - bare URLs and words from the link-words table become anchors

mod blocks;
mod inline;

use std::collections::BTreeMap;
use std::io::{self, Write};

use blocks::{blocks, Block};
use inline::{write_heading_text, write_linked};

/// Maps words (or whole URLs) found in body text to link destinations.
///
/// An empty destination keeps the word as plain text; for a URL it
/// suppresses the automatic link.
pub type LinkWords = BTreeMap<String, String>;

/// Turns a block of body text into an HTML fragment
pub trait BodyFormatter {
    /// Write the HTML for `text` to `w`
    fn format(&self, w: &mut dyn Write, text: &str, words: &LinkWords) -> io::Result<()>;
}

/// Godoc-style formatter producing `h3`, `p`, `pre` and `a` elements
#[derive(Debug, Clone, Copy, Default)]
pub struct GodocFormatter;

impl BodyFormatter for GodocFormatter {
    fn format(&self, w: &mut dyn Write, text: &str, words: &LinkWords) -> io::Result<()> {
        for block in blocks(text) {
            match block {
                Block::Paragraph(lines) => {
                    w.write_all(b"<p>\n")?;
                    for line in lines {
                        write_linked(w, line, Some(words), true)?;
                    }
                    w.write_all(b"</p>\n")?;
                }
                Block::Heading(line) => {
                    write!(w, "<h3 id=\"{}\">", blocks::anchor_id(line))?;
                    write_heading_text(w, line)?;
                    w.write_all(b"</h3>\n")?;
                }
                Block::Pre(lines) => {
                    w.write_all(b"<pre>")?;
                    for line in lines {
                        write_linked(w, line, None, false)?;
                    }
                    w.write_all(b"</pre>\n")?;
                }
            }
        }

        Ok(())
    }
}
