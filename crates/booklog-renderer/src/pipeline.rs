//! The composed Markdown pipeline.

use crate::block::render_blocks;
use crate::frontmatter::{self, FrontMatter};

/// Review Markdown files reference images relative to the reviews
/// directory; pages are served from the site root, so the prefix is
/// rebased before rendering.
const ASSET_PREFIX: &str = "../assets/";
const ASSET_PREFIX_REBASED: &str = "assets/";

/// Result of rendering a document.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderResult {
    /// Metadata parsed from the leading front-matter block.
    pub front_matter: FrontMatter,
    /// HTML fragment for the document body, footnotes section included.
    pub html: String,
}

/// Render a complete Markdown document.
///
/// Strips front matter, rebases asset paths, block-renders the body, and
/// appends the footnotes section. Total over any input; malformed
/// structure degrades to best-effort output instead of an error.
#[must_use]
pub fn render(document: &str) -> RenderResult {
    let (front_matter, body) = frontmatter::extract(document);
    let body = body.replace(ASSET_PREFIX, ASSET_PREFIX_REBASED);
    RenderResult {
        front_matter,
        html: render_blocks(&body),
    }
}
