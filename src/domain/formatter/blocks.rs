//! Splitting body text into paragraph, heading and preformatted blocks

use regex::Regex;
use std::sync::OnceLock;

/// Characters that disqualify a line from being a heading
const HEADING_EXCLUDED: &[char] = &[
    ';', ':', '!', '?', '+', '*', '/', '=', '[', ']', '{', '}', '_', '^', '°', '&', '§', '~',
    '%', '#', '@', '<', '"', '>', '\\',
];

fn non_alphanumeric_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"[^a-zA-Z0-9]").unwrap())
}

/// A formatted unit of body text. Lines keep their `'\n'` terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Block<'a> {
    Paragraph(Vec<&'a str>),
    Heading(&'a str),
    Pre(Vec<&'a str>),
}

/// Anchor id for a heading: `hdr-` followed by the text with every
/// non-alphanumeric character replaced by `_`.
pub(crate) fn anchor_id(heading: &str) -> String {
    format!("hdr-{}", non_alphanumeric_regex().replace_all(heading, "_"))
}

fn indent_len(line: &str) -> usize {
    line.len() - line.trim_start_matches([' ', '\t']).len()
}

fn is_blank(line: &str) -> bool {
    line.is_empty() || line == "\n"
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let len = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();
    &a[..len]
}

/// Remove the longest whitespace prefix shared by all non-blank lines.
fn unindent(block: &mut [&str]) {
    let Some(&first) = block.first() else {
        return;
    };

    let mut prefix = &first[..indent_len(first)];
    for line in block.iter().filter(|line| !is_blank(line)) {
        prefix = common_prefix(prefix, &line[..indent_len(line)]);
    }

    let n = prefix.len();
    for line in block.iter_mut() {
        let text: &str = *line;
        if !is_blank(text) {
            *line = &text[n..];
        }
    }
}

/// Return the trimmed line if it passes as a heading.
fn heading(line: &str) -> Option<&str> {
    let line = line.trim();

    let first = line.chars().next()?;
    if !first.is_alphabetic() || !first.is_uppercase() {
        return None;
    }

    let last = line.chars().next_back()?;
    if !last.is_alphabetic() && !last.is_numeric() {
        return None;
    }

    if line.contains(HEADING_EXCLUDED) {
        return None;
    }

    // "'" only as a possessive "'s"
    let mut rest = line;
    while let Some(i) = rest.find('\'') {
        let after = &rest.as_bytes()[i + 1..];
        match after {
            [b's'] | [b's', b' ', ..] => rest = &rest[i + 2..],
            _ => return None,
        }
    }

    // "." only when followed by a non-space
    let mut rest = line;
    while let Some(i) = rest.find('.') {
        match rest.as_bytes().get(i + 1) {
            None | Some(b' ') => return None,
            Some(_) => rest = &rest[i + 1..],
        }
    }

    Some(line)
}

/// Split text into blocks.
pub(crate) fn blocks(text: &str) -> Vec<Block<'_>> {
    let mut lines: Vec<&str> = text.split_inclusive('\n').collect();
    unindent(&mut lines);

    let mut out = Vec::new();
    let mut para: Vec<&str> = Vec::new();
    let mut last_was_blank = false;
    let mut last_was_heading = false;

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];

        if is_blank(line) {
            close_paragraph(&mut para, &mut out);
            i += 1;
            last_was_blank = true;
            continue;
        }

        if indent_len(line) > 0 {
            close_paragraph(&mut para, &mut out);

            let mut j = i + 1;
            while j < lines.len() && (is_blank(lines[j]) || indent_len(lines[j]) > 0) {
                j += 1;
            }
            while j > i && is_blank(lines[j - 1]) {
                j -= 1;
            }

            let mut pre = lines[i..j].to_vec();
            unindent(&mut pre);
            out.push(Block::Pre(pre));

            i = j;
            last_was_heading = false;
            continue;
        }

        // A line between blank lines, followed by an unindented line, may be a heading.
        let may_be_heading = last_was_blank
            && !last_was_heading
            && i + 2 < lines.len()
            && is_blank(lines[i + 1])
            && !is_blank(lines[i + 2])
            && indent_len(lines[i + 2]) == 0;

        if may_be_heading {
            if let Some(head) = heading(line) {
                close_paragraph(&mut para, &mut out);
                out.push(Block::Heading(head));
                i += 2;
                last_was_heading = true;
                continue;
            }
        }

        last_was_blank = false;
        last_was_heading = false;
        para.push(line);
        i += 1;
    }
    close_paragraph(&mut para, &mut out);

    out
}

fn close_paragraph<'a>(para: &mut Vec<&'a str>, out: &mut Vec<Block<'a>>) {
    if !para.is_empty() {
        out.push(Block::Paragraph(std::mem::take(para)));
    }
}
