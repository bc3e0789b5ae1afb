//! Inline text: escaping, quote beautification, URL and link-word anchors

use super::LinkWords;
use crate::domain::escape::{escape_html, write_escaped};
use regex::Regex;
use std::io::{self, Write};
use std::sync::OnceLock;

const URL_PATTERN: &str = concat!(
    r"(https?|ftp|file|gopher|mailto|nntp)://",
    r"([a-zA-Z0-9_@\-.\[\]:]+)",
    r"([.,:;?!]*[a-zA-Z0-9$'()*+&#=@~_/\-\[\]%])*",
);

const IDENT_PATTERN: &str = r"[\pL_][\pL_0-9]*";

/// Matches either a URL (group 1) or an identifier (group 5).
fn match_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(&format!("({})|({})", URL_PATTERN, IDENT_PATTERN)).unwrap())
}

/// Escape text, turning ``` `` ``` and `''` into curly quote entities when `nice` is set.
fn write_text<W: Write + ?Sized>(w: &mut W, text: &str, nice: bool) -> io::Result<()> {
    if !nice {
        return write_escaped(w, text);
    }

    let quoted = text.replace("``", "\u{201C}").replace("''", "\u{201D}");
    let escaped = escape_html(&quoted)
        .replace('\u{201C}', "&ldquo;")
        .replace('\u{201D}', "&rdquo;");
    w.write_all(escaped.as_bytes())
}

/// Write heading text: escaped, with quote beautification, no links.
pub(crate) fn write_heading_text<W: Write + ?Sized>(w: &mut W, text: &str) -> io::Result<()> {
    write_text(w, text, true)
}

/// Shorten a URL match so brackets come in balanced, well-ordered pairs.
///
/// Returns the end offset (relative to `line`) of the trimmed match.
fn trim_url_brackets(line: &str, start: usize, end: usize) -> usize {
    let mut end = end;

    for (open, close) in [('(', ')'), ('{', '}'), ('[', ']')] {
        let matched = &line[start..end];
        if let (Some(c), Some(o)) = (matched.find(close), matched.find(open)) {
            if c < o {
                end = start + c;
            }
        }

        for _ in 0..10 {
            let matched = &line[start..end];
            if matched.matches(open).count() == matched.matches(close).count() {
                break;
            }
            match line[..end].rfind([open, close]) {
                Some(i) => end = i,
                None => break,
            }
        }
    }

    end
}

/// Write a line of body text, escaped, with URLs and link words turned into anchors.
///
/// Link words are only consulted when `words` is given; URLs are always linked
/// unless they map to an empty destination.
pub(crate) fn write_linked<W: Write + ?Sized>(
    w: &mut W,
    line: &str,
    words: Option<&LinkWords>,
    nice: bool,
) -> io::Result<()> {
    let mut line = line;

    while let Some(caps) = match_regex().captures(line) {
        let Some(whole) = caps.get(0) else {
            break;
        };
        let start = whole.start();
        let mut end = whole.end();
        let mut is_url = caps.get(1).is_some();

        write_text(w, &line[..start], nice)?;

        if line[start..end].contains("://") {
            let trimmed = trim_url_brackets(line, start, end);
            if trimmed != end {
                // Rematch on the shortened text to learn what the match is now.
                match match_regex().captures(&line[..trimmed]) {
                    Some(again) => {
                        end = again.get(0).map_or(trimmed, |m| m.end());
                        is_url = again.get(1).is_some();
                    }
                    None => end = trimmed,
                }
            }
        }

        let matched = &line[start..end];
        let mapped = words.and_then(|words| words.get(matched)).map(String::as_str);
        let url = match (is_url, mapped) {
            (_, Some(dest)) => dest,
            (true, None) => matched,
            (false, None) => "",
        };

        if url.is_empty() {
            write_text(w, matched, nice)?;
        } else {
            w.write_all(b"<a href=\"")?;
            write_escaped(w, url)?;
            w.write_all(b"\">")?;
            write_text(w, matched, nice)?;
            w.write_all(b"</a>")?;
        }

        if end == 0 {
            // Nothing consumed; emit the rest as text rather than spin.
            break;
        }
        line = &line[end..];
    }

    write_text(w, line, nice)
}
