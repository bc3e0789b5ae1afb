//! Document preparation: title line, body normalization and the trailing tag line

/// Prefix that marks the last line of a document as a tag line.
pub const TAG_LINE_PREFIX: &str = "Tags: ";

/// A document split into its title, body lines and tags
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreparedDocument {
    /// First line of the input, when it is followed by a blank line
    pub title: Option<String>,

    /// Normalized body lines, ready for the body formatter
    pub body: Vec<String>,

    /// Tags from the trailing tag line, in the order they were written
    pub tags: Option<Vec<String>>,
}

impl PreparedDocument {
    /// Split raw text into title, body and tags
    ///
    /// # Examples
    ///
    /// ```
    /// use markgone::domain::PreparedDocument;
    ///
    /// let doc = PreparedDocument::parse("Title\n\nBody text.\n\nTags: alpha beta");
    /// assert_eq!(doc.title.as_deref(), Some("Title"));
    /// assert_eq!(doc.body, vec!["Body text."]);
    /// assert_eq!(doc.tags, Some(vec!["alpha".to_string(), "beta".to_string()]));
    /// ```
    pub fn parse(text: &str) -> Self {
        let lines = split_lines(text);
        let (title, rest) = extract_title(&lines);
        let (body, tags) = normalize(rest);

        PreparedDocument {
            title: title.map(str::to_string),
            body,
            tags,
        }
    }

    /// Body lines joined back into a single text block
    pub fn body_text(&self) -> String {
        self.body.join("\n")
    }
}

/// Split text into lines on `'\n'`, without trimming anything.
///
/// Empty input yields a single empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Take the first line as the title when it is non-empty and followed by an empty line.
///
/// Returns the title and the lines left over. Without a title nothing is consumed.
pub fn extract_title<'a, 'b>(lines: &'b [&'a str]) -> (Option<&'a str>, &'b [&'a str]) {
    match lines {
        [first, "", rest @ ..] if !first.is_empty() => (Some(*first), rest),
        _ => (None, lines),
    }
}

/// Normalize body lines and pull out a trailing tag line.
///
/// Leading and trailing blank lines are dropped and trailing spaces and tabs are
/// stripped from every line before the tag line is looked for, so `"Tags: "` on its
/// own turns into `"Tags:"` and stays in the body.
pub fn normalize<S: AsRef<str>>(lines: &[S]) -> (Vec<String>, Option<Vec<String>>) {
    let lines = strip_blank_edges(lines);
    let mut body: Vec<String> = lines
        .iter()
        .map(|line| strip_trailing_whitespace(line.as_ref()).to_string())
        .collect();

    let tags = match body.as_slice() {
        [.., separator, last] if separator.is_empty() => {
            last.strip_prefix(TAG_LINE_PREFIX).map(split_tags)
        }
        _ => None,
    };

    if tags.is_some() {
        body.truncate(body.len() - 2);
    }

    (body, tags)
}

/// Drop blank lines from both ends of the slice.
///
/// A line holding only spaces and tabs counts as blank here, otherwise it would
/// survive as an empty edge line once its whitespace is stripped.
fn strip_blank_edges<S: AsRef<str>>(lines: &[S]) -> &[S] {
    let is_blank = |line: &S| strip_trailing_whitespace(line.as_ref()).is_empty();
    let start = lines
        .iter()
        .position(|line| !is_blank(line))
        .unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|line| !is_blank(line))
        .map_or(start, |i| i + 1);

    &lines[start..end]
}

fn strip_trailing_whitespace(line: &str) -> &str {
    line.trim_end_matches([' ', '\t'])
}

/// Split the remainder of a tag line on single spaces, dropping empty fragments.
fn split_tags(rest: &str) -> Vec<String> {
    rest.split(' ')
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalized_body(text: &str) -> String {
        let (body, _) = normalize(&split_lines(text));
        body.join("\n")
    }

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines(""), vec![""]);
        assert_eq!(split_lines("one"), vec!["one"]);
        assert_eq!(split_lines("one\ntwo\n"), vec!["one", "two", ""]);
        assert_eq!(split_lines("  keep \n"), vec!["  keep ", ""]);
    }

    #[test]
    fn test_title_requires_blank_second_line() {
        let lines = ["Title", "", "body"];
        let (title, rest) = extract_title(&lines);
        assert_eq!(title, Some("Title"));
        assert_eq!(rest, &["body"]);

        let lines = ["two continuous lines", "are not title"];
        let (title, rest) = extract_title(&lines);
        assert_eq!(title, None);
        assert_eq!(rest.len(), 2);
    }

    #[test]
    fn test_title_not_on_short_or_blank_input() {
        let empty: [&str; 0] = [];
        assert_eq!(extract_title(&empty), (None, &empty[..]));

        let single = ["only line"];
        assert_eq!(extract_title(&single), (None, &single[..]));

        let blank_first = ["", "", "text"];
        let (title, rest) = extract_title(&blank_first);
        assert_eq!(title, None);
        assert_eq!(rest.len(), 3);
    }

    #[test]
    fn test_title_content_is_not_validated() {
        let lines = ["not a heading: lower case, punctuation!", ""];
        let (title, rest) = extract_title(&lines);
        assert_eq!(title, Some("not a heading: lower case, punctuation!"));
        assert!(rest.is_empty());
    }

    #[test]
    fn test_title_consumes_only_one_blank_line() {
        let lines = ["Title", "", "", "body"];
        let (_, rest) = extract_title(&lines);
        assert_eq!(rest, &["", "body"]);
    }

    #[test]
    fn test_normalize_strips_blank_edges_and_trailing_spaces() {
        let cases = [
            ("\na leading blank line", "a leading blank line"),
            ("\n\n\nleading blank lines", "leading blank lines"),
            ("a trailing blank line\n", "a trailing blank line"),
            ("trailing blank lines\n\n\n", "trailing blank lines"),
            ("a trailing space \n", "a trailing space"),
            ("trailing spaces    \n", "trailing spaces"),
            ("trailing tab\t \n", "trailing tab"),
            ("\n\n\nmultiple \n\n\nlines\n\n\n", "multiple\n\n\nlines"),
        ];

        for (input, expected) in cases {
            assert_eq!(normalized_body(input), expected, "input: {:?}", input);
        }
    }

    #[test]
    fn test_normalize_keeps_leading_indentation() {
        assert_eq!(
            normalized_body("text\n\n    indented  \n\tcode"),
            "text\n\n    indented\n\tcode"
        );
    }

    #[test]
    fn test_normalize_whitespace_only_edges() {
        assert_eq!(normalized_body("  \n\t\ntext\n \n"), "text");
        assert_eq!(normalized_body("text\n  \nmore"), "text\n\nmore");
    }

    #[test]
    fn test_normalize_all_blank() {
        let (body, tags) = normalize(&["", "", ""]);
        assert!(body.is_empty());
        assert_eq!(tags, None);

        let (body, tags) = normalize::<&str>(&[]);
        assert!(body.is_empty());
        assert_eq!(tags, None);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let inputs = [
            "\n\n  lead  \n\nmiddle\t\n\n\n",
            "plain",
            "",
            "\n \n",
            "x \n\n\ty \n",
        ];

        for input in inputs {
            let (once, _) = normalize(&split_lines(input));
            let (twice, _) = normalize(&once);
            assert_eq!(once, twice, "input: {:?}", input);
        }
    }

    #[test]
    fn test_tag_line_extracted() {
        let (body, tags) = normalize(&["", "paragraph", "", "Tags: one-tag"]);
        assert_eq!(body, vec!["paragraph"]);
        assert_eq!(tags, Some(vec!["one-tag".to_string()]));
    }

    #[test]
    fn test_tag_line_keeps_interior_leading_blank() {
        // Only the separator directly above the tag line is consumed.
        let (body, tags) = normalize(&["paragraph", "", "", "Tags: a"]);
        assert_eq!(body, vec!["paragraph", ""]);
        assert_eq!(tags, Some(vec!["a".to_string()]));
    }

    #[test]
    fn test_multiple_tags_keep_order() {
        let (_, tags) = normalize(&["p", "", "Tags: multiple tags b a b"]);
        assert_eq!(
            tags,
            Some(vec![
                "multiple".to_string(),
                "tags".to_string(),
                "b".to_string(),
                "a".to_string(),
                "b".to_string(),
            ])
        );
    }

    #[test]
    fn test_tag_line_drops_empty_fragments() {
        let (_, tags) = normalize(&["p", "", "Tags:   spaced    out  "]);
        assert_eq!(tags, Some(vec!["spaced".to_string(), "out".to_string()]));
    }

    #[test]
    fn test_tag_line_needs_blank_separator() {
        let lines = ["", "paragraph", "Tags: not following blank lines"];
        let (body, tags) = normalize(&lines);
        assert_eq!(tags, None);
        assert_eq!(body, vec!["paragraph", "Tags: not following blank lines"]);
    }

    #[test]
    fn test_tag_line_alone_is_body_text() {
        let (body, tags) = normalize(&["Tags: lonely"]);
        assert_eq!(tags, None);
        assert_eq!(body, vec!["Tags: lonely"]);
    }

    #[test]
    fn test_tag_prefix_without_space_is_body_text() {
        let (body, tags) = normalize(&["", "paragraph", "", "Tags:no space"]);
        assert_eq!(tags, None);
        assert_eq!(body, vec!["paragraph", "", "Tags:no space"]);
    }

    #[test]
    fn test_empty_tag_line_is_body_text() {
        // Trailing whitespace goes first, so "Tags: " no longer carries the prefix.
        let (body, tags) = normalize(&["", "empty list", "", "Tags: "]);
        assert_eq!(tags, None);
        assert_eq!(body, vec!["empty list", "", "Tags:"]);

        let (body, tags) = normalize(&["empty list", "", "Tags:   \t"]);
        assert_eq!(tags, None);
        assert_eq!(body, vec!["empty list", "", "Tags:"]);
    }

    #[test]
    fn test_tag_line_can_be_whole_body() {
        let (body, tags) = normalize(&["", "Tags: only"]);
        assert_eq!(body, vec!["Tags: only"]);
        assert_eq!(tags, None);

        let doc = PreparedDocument::parse("Title\n\n\nTags: only");
        assert_eq!(doc.title.as_deref(), Some("Title"));
        assert_eq!(doc.body, vec!["Tags: only"]);
        assert_eq!(doc.tags, None);
    }

    #[test]
    fn test_parse_full_document() {
        let doc = PreparedDocument::parse(
            "First line as the title\n\nBody paragraph.  \n\nTags: alpha beta\n",
        );
        assert_eq!(doc.title.as_deref(), Some("First line as the title"));
        assert_eq!(doc.body, vec!["Body paragraph."]);
        assert_eq!(
            doc.tags,
            Some(vec!["alpha".to_string(), "beta".to_string()])
        );
        assert_eq!(doc.body_text(), "Body paragraph.");
    }

    #[test]
    fn test_parse_without_title_keeps_all_lines() {
        let doc = PreparedDocument::parse("\n\ntitle must be the first line\n");
        assert_eq!(doc.title, None);
        assert_eq!(doc.body, vec!["title must be the first line"]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(PreparedDocument::parse(""), PreparedDocument::default());
    }
}
