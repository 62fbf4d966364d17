//! Inline Markdown rendering.
//!
//! A single logical line is tokenized into a sequence of [`InlineNode`]s,
//! then serialized to HTML in a separate step. Constructs are tried in
//! precedence order at each position; code spans win first and suppress
//! every other construct inside them. An unclosed construct falls through
//! to literal text.
//!
//! Emphasis and link text are parsed recursively, so `**_x_**` nests
//! `<em>` inside `<strong>` instead of producing interleaved tags.

use std::fmt::Write;

use crate::escape::escape_html;

/// One tokenized inline construct.
#[derive(Debug, Clone, PartialEq, Eq)]
enum InlineNode {
    Text(String),
    /// The `/<` raw-angle token: a literal `<` that survives escaping.
    RawLt,
    /// The `/>` raw-angle token: a literal `>` that survives escaping.
    RawGt,
    Code(String),
    FootnoteRef(String),
    Image {
        src: String,
        alt: String,
    },
    Link {
        href: String,
        children: Vec<InlineNode>,
    },
    Strong(Vec<InlineNode>),
    Emphasis(Vec<InlineNode>),
}

/// Render one line of Markdown-flavored text to HTML.
///
/// Pure function; the input must not contain newlines. Text content is
/// HTML-escaped exactly once during serialization.
#[must_use]
pub fn render_inline(line: &str) -> String {
    let nodes = parse(line, false);
    let mut out = String::with_capacity(line.len());
    render_nodes(&nodes, &mut out);
    out
}

/// Tokenize `src` into inline nodes.
///
/// `in_link` suppresses link, image, and footnote constructs while parsing
/// link text, since anchors do not nest.
fn parse(src: &str, in_link: bool) -> Vec<InlineNode> {
    let mut nodes = Vec::new();
    let mut text = String::new();
    let mut rest = src;

    while let Some(c) = rest.chars().next() {
        if let Some((node, len)) = match_construct(rest, in_link) {
            flush_text(&mut nodes, &mut text);
            nodes.push(node);
            rest = &rest[len..];
            continue;
        }
        text.push(c);
        rest = &rest[c.len_utf8()..];
    }

    flush_text(&mut nodes, &mut text);
    nodes
}

fn flush_text(nodes: &mut Vec<InlineNode>, text: &mut String) {
    if !text.is_empty() {
        nodes.push(InlineNode::Text(std::mem::take(text)));
    }
}

/// Try each construct at the current position, earliest precedence first.
///
/// Returns the parsed node and the number of input bytes it consumed.
fn match_construct(rest: &str, in_link: bool) -> Option<(InlineNode, usize)> {
    match rest.as_bytes().first()? {
        b'`' => code_span(rest),
        b'/' => raw_angle(rest),
        b'!' if !in_link => image(rest),
        b'[' if !in_link => footnote_ref(rest).or_else(|| link(rest)),
        b'*' | b'_' => strong(rest, in_link).or_else(|| emphasis(rest, in_link)),
        _ => None,
    }
}

/// `` `text` `` — raw zone, content must be non-empty.
fn code_span(rest: &str) -> Option<(InlineNode, usize)> {
    let inner = rest.strip_prefix('`')?;
    let close = inner.find('`')?;
    (close > 0).then(|| (InlineNode::Code(inner[..close].to_owned()), close + 2))
}

/// `/<` and `/>` — author opt-in for literal angle brackets.
fn raw_angle(rest: &str) -> Option<(InlineNode, usize)> {
    if rest.starts_with("/<") {
        Some((InlineNode::RawLt, 2))
    } else if rest.starts_with("/>") {
        Some((InlineNode::RawGt, 2))
    } else {
        None
    }
}

/// `[^label]` — reference to a footnote definition.
fn footnote_ref(rest: &str) -> Option<(InlineNode, usize)> {
    let inner = rest.strip_prefix("[^")?;
    let close = inner.find(']')?;
    (close > 0).then(|| (InlineNode::FootnoteRef(inner[..close].to_owned()), close + 3))
}

/// `![alt](url)` — must be tried before links (superset syntax).
fn image(rest: &str) -> Option<(InlineNode, usize)> {
    let inner = rest.strip_prefix("![")?;
    let mid = inner.find("](")?;
    let after = &inner[mid + 2..];
    let close = after.find(')')?;
    Some((
        InlineNode::Image {
            src: after[..close].to_owned(),
            alt: inner[..mid].to_owned(),
        },
        2 + mid + 2 + close + 1,
    ))
}

/// `[text](url)` — text is recursively parsed for nested emphasis/code.
fn link(rest: &str) -> Option<(InlineNode, usize)> {
    let inner = rest.strip_prefix('[')?;
    let mid = inner.find("](")?;
    let after = &inner[mid + 2..];
    let close = after.find(')')?;
    Some((
        InlineNode::Link {
            href: after[..close].to_owned(),
            children: parse(&inner[..mid], true),
        },
        1 + mid + 2 + close + 1,
    ))
}

/// `**text**` or `__text__` with non-empty content.
fn strong(rest: &str, in_link: bool) -> Option<(InlineNode, usize)> {
    let delim = if rest.starts_with("**") {
        "**"
    } else if rest.starts_with("__") {
        "__"
    } else {
        return None;
    };
    let inner = &rest[2..];
    let close = find_from(inner, delim, 1)?;
    Some((
        InlineNode::Strong(parse(&inner[..close], in_link)),
        close + 4,
    ))
}

/// `*text*` or `_text_` with non-empty content.
fn emphasis(rest: &str, in_link: bool) -> Option<(InlineNode, usize)> {
    let delim = &rest[..1];
    let inner = &rest[1..];
    let close = find_from(inner, delim, 1)?;
    Some((
        InlineNode::Emphasis(parse(&inner[..close], in_link)),
        close + 2,
    ))
}

/// First occurrence of `needle` in `haystack` at byte index >= `from`.
fn find_from(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    if from > haystack.len() {
        return None;
    }
    haystack[from..].find(needle).map(|offset| from + offset)
}

fn render_nodes(nodes: &[InlineNode], out: &mut String) {
    for node in nodes {
        match node {
            InlineNode::Text(text) => out.push_str(&escape_html(text)),
            InlineNode::RawLt => out.push('<'),
            InlineNode::RawGt => out.push('>'),
            InlineNode::Code(code) => {
                write!(out, "<code>{}</code>", escape_html(code)).unwrap();
            }
            InlineNode::FootnoteRef(label) => {
                let label = escape_html(label);
                write!(
                    out,
                    r##"<sup><a href="#fn-{label}" id="ref-{label}">{label}</a></sup>"##
                )
                .unwrap();
            }
            InlineNode::Image { src, alt } => {
                write!(
                    out,
                    r#"<img src="{}" alt="{}">"#,
                    escape_html(src),
                    escape_html(alt)
                )
                .unwrap();
            }
            InlineNode::Link { href, children } => {
                write!(out, r#"<a href="{}">"#, escape_html(href)).unwrap();
                render_nodes(children, out);
                out.push_str("</a>");
            }
            InlineNode::Strong(children) => {
                out.push_str("<strong>");
                render_nodes(children, out);
                out.push_str("</strong>");
            }
            InlineNode::Emphasis(children) => {
                out.push_str("<em>");
                render_nodes(children, out);
                out.push_str("</em>");
            }
        }
    }
}
