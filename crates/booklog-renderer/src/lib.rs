//! Markdown-to-HTML rendering pipeline for review pages.
//!
//! This crate converts the reading log's Markdown dialect into HTML
//! fragments plus front-matter metadata. It is pure string processing:
//! no I/O, no shared state across calls, and no failure path — malformed
//! input degrades to a best-effort rendering instead of an error.
//!
//! # Architecture
//!
//! - [`frontmatter`]: splits a leading `---`-delimited block into a flat
//!   key/value mapping.
//! - [`inline`]: tokenizes one line into inline nodes (emphasis, links,
//!   images, code spans, footnote references) and serializes them to HTML.
//! - [`block`]: a line-by-line state machine producing block-level HTML
//!   (headings, paragraphs, nested lists, blockquotes, fenced code).
//! - [`pipeline`]: composes the above and appends the footnotes section.
//!
//! # Escaping policy
//!
//! Text content is HTML-escaped exactly once, at serialization time, with
//! already-escaped entities left intact. Authors opt into raw angle
//! brackets with the `/<` and `/>` tokens; fenced code is always escaped.
//!
//! # Example
//!
//! ```
//! use booklog_renderer::render;
//!
//! let result = render("---\ntitle: Foo\n---\n# Hello\n\n**Bold** text");
//! assert_eq!(result.front_matter.get("title"), Some("Foo"));
//! assert!(result.html.contains("<strong>Bold</strong>"));
//! ```

pub mod block;
mod escape;
pub mod footnotes;
pub mod frontmatter;
pub mod inline;
mod pipeline;

pub use escape::escape_html;
pub use frontmatter::FrontMatter;
pub use inline::render_inline;
pub use pipeline::{RenderResult, render};
