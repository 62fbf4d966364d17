//! Review discovery and review page HTML.
//!
//! Reviews are Markdown files in the reviews directory. Their title,
//! date, and permalink come from front matter when present and fall back
//! to the `YYYY-MM-DD_<slug>.md` filename convention. A file whose
//! title, date, or permalink all resolve to nothing is skipped, never an
//! error.

use std::collections::HashMap;
use std::fmt::Write;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use booklog_meta::{Locale, date, filename};
use booklog_renderer::{RenderResult, escape_html, frontmatter};

/// `encodeURIComponent`-compatible escape set.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode one path segment for an href.
#[must_use]
fn encode_component(segment: &str) -> String {
    utf8_percent_encode(segment, COMPONENT).to_string()
}

/// Metadata for one review file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Review {
    /// Source file name within the reviews directory.
    pub filename: String,
    pub title: String,
    pub date: String,
    pub permalink: String,
}

impl Review {
    /// Build review metadata from a file name and its Markdown source.
    ///
    /// Returns `None` when any of title, date, or permalink resolves to
    /// an empty string even after filename fallback.
    #[must_use]
    pub fn from_markdown(file_name: &str, text: &str) -> Option<Self> {
        let (meta, _) = frontmatter::extract(text);
        let field = |key: &str| meta.get(key).filter(|v| !v.is_empty()).map(str::to_owned);

        let title = field("title").unwrap_or_else(|| filename::derive_title(file_name));
        let date = field("date").unwrap_or_else(|| filename::derive_date(file_name));
        let permalink = field("permalink").unwrap_or_else(|| filename::derive_permalink(file_name));
        if title.is_empty() || date.is_empty() || permalink.is_empty() {
            return None;
        }
        Some(Self {
            filename: file_name.to_owned(),
            title,
            date,
            permalink,
        })
    }

    /// Output file name of the rendered page.
    #[must_use]
    pub fn page_name(&self) -> String {
        format!("{}.html", self.permalink)
    }

    /// Href to the rendered page, percent-encoded, relative to `prefix`.
    #[must_use]
    pub fn href(&self, prefix: &str) -> String {
        format!("{prefix}{}.html", encode_component(&self.permalink))
    }
}

/// All discovered reviews, newest first, with a by-title lookup used to
/// link book-column entries to their review pages.
#[derive(Debug, Default)]
pub struct ReviewIndex {
    reviews: Vec<Review>,
    by_title: HashMap<String, usize>,
}

impl ReviewIndex {
    /// Index a list of reviews, sorting newest first.
    #[must_use]
    pub fn from_entries(mut reviews: Vec<Review>) -> Self {
        reviews.sort_by_key(|r| std::cmp::Reverse(date::parse_date(&r.date)));
        let mut by_title = HashMap::new();
        for (index, review) in reviews.iter().enumerate() {
            let key = normalize_title(&review.title);
            if !key.is_empty() {
                by_title.insert(key, index);
            }
        }
        Self { reviews, by_title }
    }

    /// Scan a directory for `.md` review files.
    ///
    /// A missing directory yields an empty index; unreadable or
    /// unidentifiable files are skipped with a warning.
    pub fn scan(dir: &Path) -> std::io::Result<Self> {
        if !dir.is_dir() {
            return Ok(Self::default());
        }

        let mut entries = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if !name.to_ascii_lowercase().ends_with(".md") {
                continue;
            }
            match fs::read_to_string(entry.path()) {
                Ok(text) => {
                    if let Some(review) = Review::from_markdown(name, &text) {
                        entries.push(review);
                    } else {
                        tracing::warn!(file = name, "review has no usable title/date, skipping");
                    }
                }
                Err(error) => {
                    tracing::warn!(file = name, %error, "failed to read review, skipping");
                }
            }
        }
        Ok(Self::from_entries(entries))
    }

    #[must_use]
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }

    /// Newest `limit` reviews for the home page.
    #[must_use]
    pub fn recent(&self, limit: usize) -> &[Review] {
        &self.reviews[..self.reviews.len().min(limit)]
    }

    /// Find the review for a book's canonical title, case-insensitive.
    #[must_use]
    pub fn find_for_title(&self, canonical_title: &str) -> Option<&Review> {
        self.by_title
            .get(&normalize_title(canonical_title))
            .map(|&index| &self.reviews[index])
    }
}

fn normalize_title(title: &str) -> String {
    title.trim().to_lowercase()
}

/// The review archive list.
#[must_use]
pub fn render_archive(
    index: &ReviewIndex,
    locale: Locale,
    today: NaiveDate,
    link_prefix: &str,
) -> String {
    if index.is_empty() {
        return format!(r#"<p class="heatmap-empty">{}</p>"#, locale.no_reviews());
    }

    let mut out = String::from(r#"<ul class="review-list reviews-archive-list">"#);
    for review in index.reviews() {
        write!(
            out,
            concat!(
                r#"<li class="review-item reviews-archive-item">"#,
                r#"<a class="review-title" href="{href}">{title}</a>"#,
                r#"<span class="review-date reviews-archive-date">{date}</span>"#,
                "</li>"
            ),
            href = review.href(link_prefix),
            title = escape_html(&review.title),
            date = escape_html(&date::format_relative(&review.date, locale, today)),
        )
        .unwrap();
    }
    out.push_str("</ul>");
    out
}

/// The "recent posts" strip on the home page: a linked heading plus the
/// newest three reviews.
#[must_use]
pub fn render_recent(index: &ReviewIndex, locale: Locale, today: NaiveDate) -> String {
    let mut out = format!(
        concat!(
            r#"<div class="reviews-header">"#,
            r#"<a class="reviews-title-link" href="reviews/">{title}</a>"#,
            "</div>"
        ),
        title = locale.reviews_title(),
    );
    if index.is_empty() {
        write!(out, r#"<p class="heatmap-empty">{}</p>"#, locale.no_reviews()).unwrap();
        return out;
    }

    out.push_str(r#"<ul class="review-list">"#);
    for review in index.recent(3) {
        write!(
            out,
            concat!(
                r#"<li class="review-item">"#,
                r#"<a class="review-title" href="{href}">{title}</a>"#,
                r#"<span class="review-date">{date}</span>"#,
                "</li>"
            ),
            href = review.href("reviews/"),
            title = escape_html(&review.title),
            date = escape_html(&date::format_relative(&review.date, locale, today)),
        )
        .unwrap();
    }
    out.push_str("</ul>");
    out
}

/// The body of one rendered review page: header chrome plus the pipeline
/// output. Recognized front-matter keys: `title`, `date`, `author`, and
/// `publication_year`/`publicationYear`.
#[must_use]
pub fn render_detail_body(review: &Review, rendered: &RenderResult) -> String {
    let meta = &rendered.front_matter;
    let field = |key: &str| meta.get(key).filter(|v| !v.is_empty());

    let mut out = String::from(r#"<article class="review"><header class="review-header">"#);
    write!(out, r#"<h1 id="review-title">{}</h1>"#, escape_html(&review.title)).unwrap();

    let formatted_date = date::format_date(&review.date);
    if !formatted_date.is_empty() {
        write!(out, r#"<p id="review-date">{}</p>"#, escape_html(&formatted_date)).unwrap();
    }

    let mut meta_parts = Vec::new();
    if let Some(author) = field("author") {
        meta_parts.push(author);
    }
    if let Some(publication_year) = field("publication_year").or_else(|| field("publicationYear")) {
        meta_parts.push(publication_year);
    }
    if !meta_parts.is_empty() {
        write!(
            out,
            r#"<p id="review-meta">{}</p>"#,
            escape_html(&meta_parts.join(" · "))
        )
        .unwrap();
    }

    write!(
        out,
        r#"</header><div id="review-content">{}</div></article>"#,
        rendered.html
    )
    .unwrap();
    out
}
