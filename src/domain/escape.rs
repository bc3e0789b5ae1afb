//! HTML text escaping

use std::borrow::Cow;
use std::io::{self, Write};

fn replacement(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&#34;"),
        '\'' => Some("&#39;"),
        '\0' => Some("\u{FFFD}"),
        _ => None,
    }
}

/// Escape `&`, `<`, `>`, quotes and NUL for use in HTML text or attribute values.
///
/// Borrows the input when there is nothing to escape.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    let Some(first) = text.find(|c: char| replacement(c).is_some()) else {
        return Cow::Borrowed(text);
    };

    let mut escaped = String::with_capacity(text.len() + 16);
    escaped.push_str(&text[..first]);
    for c in text[first..].chars() {
        match replacement(c) {
            Some(entity) => escaped.push_str(entity),
            None => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Write `text` to `w`, HTML-escaped.
pub fn write_escaped<W: Write + ?Sized>(w: &mut W, text: &str) -> io::Result<()> {
    w.write_all(escape_html(text).as_bytes())
}
