//! Front-matter extraction.
//!
//! A document may start with a metadata block delimited by `---` lines:
//!
//! ```text
//! ---
//! title: 어린 왕자
//! date: 2024-03-05
//! ---
//! body…
//! ```
//!
//! The block is a flat list of `key: value` pairs — no nesting, no lists,
//! no multi-line values. Anything that does not look like a pair is
//! skipped. A document without the block yields an empty mapping and is
//! treated entirely as body; extraction never fails.

use std::collections::HashMap;

/// Flat string-to-string metadata mapping parsed from a front-matter block.
///
/// Values stay strings — callers interpret booleans, years, and dates
/// themselves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrontMatter {
    values: HashMap<String, String>,
}

impl FrontMatter {
    /// Look up a value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Whether the block contained no pairs (or was absent).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Number of parsed pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Iterate over all pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Split a document into front matter and body.
///
/// The block must be anchored at the very start: a `---` line, arbitrary
/// content, and a closing `---` line followed by a newline or end of
/// input. Without a match the mapping is empty and the whole text is the
/// body.
#[must_use]
pub fn extract(text: &str) -> (FrontMatter, &str) {
    let Some((block, body)) = split_block(text) else {
        return (FrontMatter::default(), text);
    };

    let mut values = HashMap::new();
    for line in block.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        values.insert(key.to_owned(), unquote(value.trim()).to_owned());
    }
    (FrontMatter { values }, body)
}

/// Find the delimited block, returning `(content, body)`.
fn split_block(text: &str) -> Option<(&str, &str)> {
    let rest = text.strip_prefix("---\n")?;
    let mut from = 0;
    while let Some(offset) = rest[from..].find("\n---") {
        let close = from + offset;
        let after = close + "\n---".len();
        match rest.as_bytes().get(after) {
            None => return Some((&rest[..close], "")),
            Some(b'\n') => return Some((&rest[..close], &rest[after + 1..])),
            Some(_) => from = close + 1,
        }
    }
    None
}

/// Strip one symmetric pair of surrounding quotes.
///
/// Only a matching pair is removed: `"foo"` and `'foo'` unwrap, while
/// `"foo'` and `foo"` stay as-is.
fn unquote(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2
        && (bytes[0] == b'"' || bytes[0] == b'\'')
        && bytes[bytes.len() - 1] == bytes[0]
    {
        &value[1..value.len() - 1]
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn no_block_returns_whole_text_as_body() {
        let input = "# Just a heading\n\nBody text";
        let (meta, body) = extract(input);
        assert!(meta.is_empty());
        assert_eq!(body, input);
    }

    #[test]
    fn parses_basic_block() {
        let (meta, body) = extract("---\ntitle: Foo\n---\nBody text");
        assert_eq!(meta.get("title"), Some("Foo"));
        assert_eq!(meta.len(), 1);
        assert_eq!(body, "Body text");
    }

    #[test]
    fn closing_delimiter_at_end_of_input() {
        let (meta, body) = extract("---\ntitle: Foo\n---");
        assert_eq!(meta.get("title"), Some("Foo"));
        assert_eq!(body, "");
    }

    #[test]
    fn delimiter_must_be_anchored_at_start() {
        let input = "\n---\ntitle: Foo\n---\nBody";
        let (meta, body) = extract(input);
        assert!(meta.is_empty());
        assert_eq!(body, input);
    }

    #[test]
    fn closing_line_with_trailing_garbage_is_skipped() {
        let (meta, body) = extract("---\ntitle: Foo\n---x\n---\nBody");
        assert_eq!(meta.get("title"), Some("Foo"));
        assert!(meta.get("---x").is_none());
        assert_eq!(body, "Body");
    }

    #[test]
    fn lines_without_colon_are_ignored() {
        let (meta, _) = extract("---\ntitle: Foo\njust text\n: empty key\n---\nBody");
        assert_eq!(meta.len(), 1);
        assert_eq!(meta.get("title"), Some("Foo"));
    }

    #[test]
    fn values_are_trimmed_and_unquoted() {
        let (meta, _) = extract(
            "---\ntitle:   \"어린 왕자\"  \nauthor: '생텍쥐페리'\ndate: 2024-03-05\n---\nBody",
        );
        assert_eq!(meta.get("title"), Some("어린 왕자"));
        assert_eq!(meta.get("author"), Some("생텍쥐페리"));
        assert_eq!(meta.get("date"), Some("2024-03-05"));
    }

    #[test]
    fn mismatched_quotes_are_kept() {
        let (meta, _) = extract("---\na: \"foo'\nb: foo\"\n---\nBody");
        assert_eq!(meta.get("a"), Some("\"foo'"));
        assert_eq!(meta.get("b"), Some("foo\""));
    }

    #[test]
    fn value_may_contain_colons() {
        let (meta, _) = extract("---\nlink: https://example.com/a\n---\nBody");
        assert_eq!(meta.get("link"), Some("https://example.com/a"));
    }

    #[test]
    fn later_keys_overwrite_earlier_ones() {
        let (meta, _) = extract("---\ntitle: One\ntitle: Two\n---\nBody");
        assert_eq!(meta.get("title"), Some("Two"));
    }

    #[test]
    fn empty_block_yields_empty_mapping() {
        let (meta, body) = extract("---\n\n---\nBody");
        assert!(meta.is_empty());
        assert_eq!(body, "Body");
    }

    #[test]
    fn unterminated_block_is_treated_as_body() {
        let input = "---\ntitle: Foo\nBody without closing";
        let (meta, body) = extract(input);
        assert!(meta.is_empty());
        assert_eq!(body, input);
    }
}
