//! Footnote definitions and the trailing footnotes section.
//!
//! Definitions (`[^label]: text`) are pulled out of the line stream before
//! block rendering and collected into a [`FootnoteTable`]; the table is
//! rendered once, after all body content, as an ordered list with
//! back-references to the first matching inline anchor.

use crate::escape::escape_html;
use crate::inline::render_inline;

/// Footnote definitions in order of first appearance.
///
/// Re-defining a label overwrites its text but keeps its original
/// position, matching a forward scan over the document.
#[derive(Debug, Default)]
pub struct FootnoteTable {
    entries: Vec<(String, String)>,
}

impl FootnoteTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a definition; the last occurrence of a label wins.
    pub fn insert(&mut self, label: &str, definition: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|(l, _)| l == label) {
            entry.1 = definition.to_owned();
        } else {
            self.entries.push((label.to_owned(), definition.to_owned()));
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate `(label, definition)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(l, d)| (l.as_str(), d.as_str()))
    }
}

/// Parse a footnote definition line: `[^label]: definition`.
///
/// The label ends at the first `]:` and must be non-empty; at least one
/// whitespace character is required after the colon.
#[must_use]
pub fn parse_definition(line: &str) -> Option<(&str, &str)> {
    let inner = line.strip_prefix("[^")?;
    let mid = inner.find("]:")?;
    if mid == 0 {
        return None;
    }
    let after = &inner[mid + 2..];
    let definition = after.trim_start();
    if definition.len() == after.len() {
        return None;
    }
    Some((&inner[..mid], definition))
}

/// Append the footnotes section to the block list.
///
/// One `<li id="fn-label">` per entry, definition inline-rendered, plus a
/// back-link to the `#ref-label` anchor emitted by the first reference.
pub fn render_section(table: &FootnoteTable, blocks: &mut Vec<String>) {
    if table.is_empty() {
        return;
    }
    blocks.push(r#"<div class="footnotes"><hr><ol>"#.to_owned());
    for (label, definition) in table.iter() {
        let label = escape_html(label);
        blocks.push(format!(
            "<li id=\"fn-{label}\">{} <a href=\"#ref-{label}\">↩</a></li>",
            render_inline(definition),
        ));
    }
    blocks.push("</ol></div>".to_owned());
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_definition_line() {
        assert_eq!(parse_definition("[^1]: a note"), Some(("1", "a note")));
        assert_eq!(parse_definition("[^src]:   spaced"), Some(("src", "spaced")));
    }

    #[test]
    fn rejects_non_definitions() {
        assert_eq!(parse_definition("[^1] no colon"), None);
        assert_eq!(parse_definition("[^]: empty label"), None);
        assert_eq!(parse_definition("[^1]:no space"), None);
        assert_eq!(parse_definition("text [^1]: not anchored"), None);
    }

    #[test]
    fn empty_definition_after_whitespace_is_allowed() {
        assert_eq!(parse_definition("[^1]: "), Some(("1", "")));
    }

    #[test]
    fn last_definition_wins_but_keeps_position() {
        let mut table = FootnoteTable::new();
        table.insert("1", "first");
        table.insert("2", "second");
        table.insert("1", "revised");
        let entries: Vec<_> = table.iter().collect();
        assert_eq!(entries, vec![("1", "revised"), ("2", "second")]);
    }

    #[test]
    fn renders_ordered_section_with_backlinks() {
        let mut table = FootnoteTable::new();
        table.insert("1", "a *styled* note");
        let mut blocks = Vec::new();
        render_section(&table, &mut blocks);
        assert_eq!(
            blocks,
            vec![
                r#"<div class="footnotes"><hr><ol>"#.to_owned(),
                "<li id=\"fn-1\">a <em>styled</em> note <a href=\"#ref-1\">↩</a></li>".to_owned(),
                "</ol></div>".to_owned(),
            ]
        );
    }

    #[test]
    fn empty_table_renders_nothing() {
        let mut blocks = Vec::new();
        render_section(&FootnoteTable::new(), &mut blocks);
        assert!(blocks.is_empty());
    }
}
