//! Block-level rendering.
//!
//! The document body is scanned line by line through an explicit state
//! machine. Each line is first classified into a [`LineKind`] by a pure
//! function, then applied to the running state: a fence flag for literal
//! code blocks and a stack of open nested lists.
//!
//! All malformed structure degrades silently — an unclosed fence or list
//! is force-flushed at end of input, and any unrecognized line becomes a
//! paragraph. The renderer is total over any input string.

use crate::escape::escape_html;
use crate::footnotes::{self, FootnoteTable};
use crate::inline::render_inline;

/// Scanner state: outside or inside a fenced code block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Normal,
    InCodeFence,
}

/// Ordered (`1.`) vs unordered (`-`, `*`, `+`) list marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    fn tag(self) -> &'static str {
        match self {
            Self::Unordered => "ul",
            Self::Ordered => "ol",
        }
    }
}

/// Classification of a single line containing only local facts.
///
/// Context-free: the fence state and list stack are applied afterwards.
#[derive(Debug, PartialEq, Eq)]
enum LineKind<'a> {
    /// A ```` ``` ```` marker line; any info string after it is ignored.
    Fence,
    Heading {
        level: usize,
        text: &'a str,
    },
    ListItem {
        /// Leading whitespace width in columns, tabs expanded to 4.
        indent: usize,
        kind: ListKind,
        text: &'a str,
    },
    Quote(&'a str),
    Blank,
    Paragraph(&'a str),
}

/// Classify one line. Pure function, no surrounding context.
fn classify(line: &str) -> LineKind<'_> {
    if line.starts_with("```") {
        return LineKind::Fence;
    }
    if let Some(heading) = heading(line) {
        return heading;
    }
    if let Some(item) = list_item(line) {
        return item;
    }
    if line.trim().is_empty() {
        return LineKind::Blank;
    }
    if let Some(rest) = line.strip_prefix('>') {
        let text = rest
            .strip_prefix(|c: char| c.is_whitespace())
            .unwrap_or(rest);
        return LineKind::Quote(text);
    }
    LineKind::Paragraph(line)
}

/// `#`×1..=6 followed by whitespace.
fn heading(line: &str) -> Option<LineKind<'_>> {
    let hashes = line.len() - line.trim_start_matches('#').len();
    if !(1..=6).contains(&hashes) {
        return None;
    }
    let rest = &line[hashes..];
    let text = rest.trim_start();
    (text.len() < rest.len()).then_some(LineKind::Heading {
        level: hashes,
        text,
    })
}

/// Leading whitespace, a list marker, then at least one whitespace.
fn list_item(line: &str) -> Option<LineKind<'_>> {
    let rest = line.trim_start_matches([' ', '\t']);
    let indent = line[..line.len() - rest.len()]
        .chars()
        .map(|c| if c == '\t' { 4 } else { 1 })
        .sum();

    let (kind, after) = if let Some(after) = rest.strip_prefix(['-', '*', '+']) {
        (ListKind::Unordered, after)
    } else {
        let digits = rest.len() - rest.trim_start_matches(|c: char| c.is_ascii_digit()).len();
        if digits == 0 {
            return None;
        }
        (ListKind::Ordered, rest[digits..].strip_prefix('.')?)
    };

    let text = after.trim_start();
    (text.len() < after.len()).then_some(LineKind::ListItem { indent, kind, text })
}

/// One item of an open list: rendered content plus nested child lists.
struct ListEntry {
    content: String,
    children: Vec<String>,
}

/// One open list level on the stack.
struct ListLevel {
    kind: ListKind,
    items: Vec<ListEntry>,
}

/// The block state machine. Built fresh per render call.
struct BlockRenderer {
    state: State,
    code_lines: Vec<String>,
    lists: Vec<ListLevel>,
    blocks: Vec<String>,
}

impl BlockRenderer {
    fn new() -> Self {
        Self {
            state: State::Normal,
            code_lines: Vec::new(),
            lists: Vec::new(),
            blocks: Vec::new(),
        }
    }

    fn push_line(&mut self, line: &str) {
        if self.state == State::InCodeFence {
            if line.starts_with("```") {
                self.flush_code();
            } else {
                self.code_lines.push(line.to_owned());
            }
            return;
        }

        match classify(line) {
            LineKind::Fence => self.state = State::InCodeFence,
            LineKind::Heading { level, text } => {
                self.flush_lists();
                self.blocks
                    .push(format!("<h{level}>{}</h{level}>", render_inline(text)));
            }
            LineKind::ListItem { indent, kind, text } => self.list_item(indent, kind, text),
            LineKind::Blank => self.flush_lists(),
            LineKind::Quote(text) => {
                self.flush_lists();
                self.blocks
                    .push(format!("<blockquote>{}</blockquote>", render_inline(text)));
            }
            LineKind::Paragraph(text) => {
                self.flush_lists();
                self.blocks.push(format!("<p>{}</p>", render_inline(text)));
            }
        }
    }

    /// Place a list item at the level implied by its indentation.
    ///
    /// The level is clamped so the stack deepens at most one level per
    /// line; a kind mismatch at the target level closes and reopens it.
    fn list_item(&mut self, indent: usize, kind: ListKind, text: &str) {
        let mut level = if indent >= 4 { indent / 4 } else { indent / 2 };
        if !self.lists.is_empty() && level > self.lists.len() {
            level = self.lists.len();
        }

        while self.lists.len() > level + 1 {
            self.pop_list();
        }
        if self.lists.len() == level + 1 && self.lists[level].kind != kind {
            self.pop_list();
        }
        while self.lists.len() < level + 1 {
            self.lists.push(ListLevel {
                kind,
                items: Vec::new(),
            });
        }

        self.lists[level].items.push(ListEntry {
            content: render_inline(text),
            children: Vec::new(),
        });
    }

    /// Close the innermost list, nesting its HTML into the parent item.
    ///
    /// When the parent level has no item yet (a child list opened before
    /// any parent item existed), the HTML is emitted as top-level output.
    fn pop_list(&mut self) {
        let Some(list) = self.lists.pop() else {
            return;
        };
        let mut items = String::new();
        for item in &list.items {
            items.push_str("<li>");
            items.push_str(&item.content);
            for child in &item.children {
                items.push_str(child);
            }
            items.push_str("</li>");
        }
        let html = format!("<{tag}>{items}</{tag}>", tag = list.kind.tag());

        match self.lists.last_mut().and_then(|parent| parent.items.last_mut()) {
            Some(parent_item) => parent_item.children.push(html),
            None => self.blocks.push(html),
        }
    }

    fn flush_lists(&mut self) {
        while !self.lists.is_empty() {
            self.pop_list();
        }
    }

    fn flush_code(&mut self) {
        let joined = self.code_lines.join("\n");
        self.blocks
            .push(format!("<pre><code>{}</code></pre>", escape_html(&joined)));
        self.code_lines.clear();
        self.state = State::Normal;
    }

    fn finish(mut self, notes: &FootnoteTable) -> String {
        self.flush_lists();
        if self.state == State::InCodeFence {
            self.flush_code();
        }
        footnotes::render_section(notes, &mut self.blocks);
        self.blocks.join("\n")
    }
}

/// Render a document body (front matter already removed) to HTML.
///
/// Footnote definition lines are pulled out of the stream first; the
/// collected table is rendered as a trailing section.
#[must_use]
pub fn render_blocks(body: &str) -> String {
    let mut notes = FootnoteTable::new();
    let mut renderer = BlockRenderer::new();

    for raw in body.split('\n') {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if let Some((label, definition)) = footnotes::parse_definition(line) {
            notes.insert(label, definition);
            continue;
        }
        renderer.push_line(line);
    }

    renderer.finish(&notes)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn headings_render_with_level() {
        assert_eq!(render_blocks("# One"), "<h1>One</h1>");
        assert_eq!(render_blocks("###### Six"), "<h6>Six</h6>");
    }

    #[test]
    fn seven_hashes_fall_through_to_paragraph() {
        assert_eq!(render_blocks("####### Seven"), "<p>####### Seven</p>");
    }

    #[test]
    fn hash_without_space_is_a_paragraph() {
        assert_eq!(render_blocks("#tag"), "<p>#tag</p>");
    }

    #[test]
    fn paragraph_gets_inline_rendering() {
        assert_eq!(
            render_blocks("some **bold** text"),
            "<p>some <strong>bold</strong> text</p>"
        );
    }

    #[test]
    fn fenced_code_is_always_escaped() {
        assert_eq!(
            render_blocks("```\n<b>raw</b>\n```"),
            "<pre><code>&lt;b&gt;raw&lt;/b&gt;</code></pre>"
        );
    }

    #[test]
    fn fence_info_string_is_ignored() {
        assert_eq!(
            render_blocks("```rust\nfn main() {}\n```"),
            "<pre><code>fn main() {}</code></pre>"
        );
    }

    #[test]
    fn unclosed_fence_is_flushed_at_end() {
        assert_eq!(
            render_blocks("```\nstill open"),
            "<pre><code>still open</code></pre>"
        );
    }

    #[test]
    fn markdown_inside_fence_is_not_interpreted() {
        let html = render_blocks("```\n# not a heading\n- not a list\n```");
        assert_eq!(html, "<pre><code># not a heading\n- not a list</code></pre>");
    }

    #[test]
    fn flat_list_renders_and_closes() {
        assert_eq!(
            render_blocks("- a\n- b"),
            "<ul><li>a</li><li>b</li></ul>"
        );
    }

    #[test]
    fn nested_list_attaches_to_parent_item() {
        assert_eq!(
            render_blocks("- a\n  - b\n- c"),
            "<ul><li>a<ul><li>b</li></ul></li><li>c</li></ul>"
        );
    }

    #[test]
    fn four_space_and_tab_indents_nest_one_level() {
        let expected = "<ul><li>a<ul><li>b</li></ul></li></ul>";
        assert_eq!(render_blocks("- a\n    - b"), expected);
        assert_eq!(render_blocks("- a\n\t- b"), expected);
    }

    #[test]
    fn excess_indentation_is_clamped_to_one_deeper() {
        assert_eq!(
            render_blocks("- a\n        - b"),
            "<ul><li>a<ul><li>b</li></ul></li></ul>"
        );
    }

    #[test]
    fn ordered_markers_produce_ol() {
        assert_eq!(
            render_blocks("1. one\n2. two"),
            "<ol><li>one</li><li>two</li></ol>"
        );
    }

    #[test]
    fn kind_change_reopens_the_level() {
        assert_eq!(
            render_blocks("- a\n1. b"),
            "<ul><li>a</li></ul>\n<ol><li>b</li></ol>"
        );
    }

    #[test]
    fn blank_line_closes_open_lists() {
        assert_eq!(
            render_blocks("- a\n\npara"),
            "<ul><li>a</li></ul>\n<p>para</p>"
        );
    }

    #[test]
    fn heading_closes_open_lists() {
        assert_eq!(
            render_blocks("- a\n# Done"),
            "<ul><li>a</li></ul>\n<h1>Done</h1>"
        );
    }

    #[test]
    fn orphan_child_list_is_emitted_top_level() {
        // A nested item before any parent item leaves an empty outer list.
        assert_eq!(
            render_blocks("  - b"),
            "<ul><li>b</li></ul>\n<ul></ul>"
        );
    }

    #[test]
    fn blockquote_lines_are_wrapped_independently() {
        assert_eq!(
            render_blocks("> first\n> second"),
            "<blockquote>first</blockquote>\n<blockquote>second</blockquote>"
        );
    }

    #[test]
    fn footnote_definition_leaves_the_body_stream() {
        let html = render_blocks("text[^1]\n\n[^1]: note");
        assert_eq!(
            html,
            concat!(
                "<p>text<sup><a href=\"#fn-1\" id=\"ref-1\">1</a></sup></p>\n",
                "<div class=\"footnotes\"><hr><ol>\n",
                "<li id=\"fn-1\">note <a href=\"#ref-1\">↩</a></li>\n",
                "</ol></div>"
            )
        );
    }

    #[test]
    fn footnotes_keep_first_appearance_order() {
        let html = render_blocks("[^b]: second\n[^a]: first\nbody");
        let b_pos = html.find("fn-b").unwrap();
        let a_pos = html.find("fn-a").unwrap();
        assert!(b_pos < a_pos);
    }

    #[test]
    fn crlf_line_endings_are_tolerated() {
        assert_eq!(render_blocks("# Title\r\n\r\ntext\r\n"), "<h1>Title</h1>\n<p>text</p>");
    }

    #[test]
    fn empty_input_renders_empty() {
        assert_eq!(render_blocks(""), "");
    }
}
