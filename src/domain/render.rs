//! Rendering a prepared document to HTML

use super::document::PreparedDocument;
use super::escape::write_escaped;
use super::formatter::{BodyFormatter, GodocFormatter, LinkWords};
use std::io::{self, Write};

/// Link target prefix for tag anchors
pub const TAG_HREF_PREFIX: &str = "/tag/";

/// Renders documents: title heading, formatted body, tag list
#[derive(Debug, Clone, Default)]
pub struct Renderer<F = GodocFormatter> {
    formatter: F,
}

impl<F: BodyFormatter> Renderer<F> {
    /// Create a renderer that formats bodies with `formatter`
    pub fn new(formatter: F) -> Self {
        Self { formatter }
    }

    /// Convert `text` and write the HTML fragment to `w`.
    ///
    /// The only failure is a write error from `w`.
    pub fn render<W: Write + ?Sized>(
        &self,
        w: &mut W,
        text: &str,
        words: &LinkWords,
    ) -> io::Result<()> {
        let doc = PreparedDocument::parse(text);
        self.render_prepared(w, &doc, words)
    }

    /// Write the HTML fragment for an already prepared document.
    pub fn render_prepared<W: Write + ?Sized>(
        &self,
        w: &mut W,
        doc: &PreparedDocument,
        words: &LinkWords,
    ) -> io::Result<()> {
        let mut w = AsDynWrite(w);

        if let Some(title) = &doc.title {
            write_title(&mut w, title)?;
        }

        self.formatter.format(&mut w, &doc.body_text(), words)?;

        if let Some(tags) = &doc.tags {
            write_tags(&mut w, tags)?;
        }

        Ok(())
    }
}

/// Lets an unsized writer be handed on as `&mut dyn Write`.
struct AsDynWrite<'a, W: ?Sized>(&'a mut W);

impl<W: Write + ?Sized> Write for AsDynWrite<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        self.0.write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}

/// `<h2>title</h2>`
pub fn write_title<W: Write + ?Sized>(w: &mut W, title: &str) -> io::Result<()> {
    w.write_all(b"<h2>")?;
    write_escaped(w, title)?;
    w.write_all(b"</h2>\n")
}

/// The tag list container, one anchor per tag. An empty list still gets the container.
pub fn write_tags<W: Write + ?Sized>(w: &mut W, tags: &[String]) -> io::Result<()> {
    w.write_all(b"<div class=\"taglist\">\n")?;
    w.write_all(b"<strong>Tags:</strong>\n")?;
    for tag in tags {
        w.write_all(b"<a href=\"")?;
        w.write_all(TAG_HREF_PREFIX.as_bytes())?;
        write_escaped(w, tag)?;
        w.write_all(b"\" rel=\"tag\">")?;
        write_escaped(w, tag)?;
        w.write_all(b"</a>\n")?;
    }
    w.write_all(b"</div>\n")
}

/// Convert `text` to HTML with the default formatter, writing to `w`.
///
/// # Examples
///
/// ```
/// use markgone::{to_html, LinkWords};
///
/// let mut out = Vec::new();
/// to_html(&mut out, "Title\n\nBody.", &LinkWords::new()).unwrap();
/// assert_eq!(out, b"<h2>Title</h2>\n<p>\nBody.</p>\n");
/// ```
pub fn to_html<W: Write + ?Sized>(w: &mut W, text: &str, words: &LinkWords) -> io::Result<()> {
    Renderer::<GodocFormatter>::default().render(w, text, words)
}

/// Like [`to_html`], but returns the HTML as a string.
///
/// # Examples
///
/// ```
/// use markgone::{to_html_string, LinkWords};
///
/// let html = to_html_string("Title\n\nBody.\n\nTags: a b", &LinkWords::new());
/// assert!(html.contains("<a href=\"/tag/b\" rel=\"tag\">b</a>"));
/// ```
pub fn to_html_string(text: &str, words: &LinkWords) -> String {
    let mut buf = Vec::with_capacity(text.len() * 2);
    // Writing into a Vec cannot fail.
    let _ = to_html(&mut buf, text, words);
    String::from_utf8_lossy(&buf).into_owned()
}
