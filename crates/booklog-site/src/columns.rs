//! The grouped book lists under the heatmap.
//!
//! One section per year, newest first: a heading, a read-count summary,
//! and the year's books with their month shown only when it changes from
//! the previous entry. Titles with a matching review link to the review
//! page; rereads get a badge on their latest entry.

use std::fmt::Write;

use booklog_meta::{Book, Catalog, Locale};
use booklog_renderer::escape_html;

use crate::reviews::ReviewIndex;

/// Render the per-year book columns.
///
/// `link_prefix` is prepended to review hrefs so the same markup works
/// from the site root.
#[must_use]
pub fn render_book_columns(
    catalog: &Catalog,
    locale: Locale,
    reviews: &ReviewIndex,
    link_prefix: &str,
) -> String {
    if catalog.is_empty() {
        return format!(r#"<p class="no-books">{}</p>"#, locale.no_books());
    }

    let by_year = catalog.by_year();
    let mut out = String::new();
    for (year, books) in by_year.iter().rev() {
        write!(
            out,
            concat!(
                "<h2>{year}</h2>",
                r#"<p class="year-summary">{summary}</p>"#
            ),
            year = year,
            summary = locale.year_summary(books.len()),
        )
        .unwrap();

        out.push_str("<ul>");
        let mut last_month = None;
        for &book in books {
            let month_label = if last_month == Some(book.month) {
                String::new()
            } else {
                last_month = Some(book.month);
                locale.month_label(book.month)
            };
            write!(out, r#"<li><span class="month">{month_label}</span>"#).unwrap();
            out.push_str(r#"<span class="book-title">"#);
            push_title(&mut out, book, catalog, locale, reviews, link_prefix);
            out.push_str("</span></li>");
        }
        out.push_str("</ul>");
    }
    out
}

/// The title text (linked when a review exists) plus the reread badge.
fn push_title(
    out: &mut String,
    book: &Book,
    catalog: &Catalog,
    locale: Locale,
    reviews: &ReviewIndex,
    link_prefix: &str,
) {
    let display_title = escape_html(book.localized_title(locale));
    match reviews.find_for_title(book.canonical_title()) {
        Some(review) => write!(
            out,
            r#"<a class="book-title-text review-link has-review" href="{}">{display_title}</a>"#,
            review.href(link_prefix),
        )
        .unwrap(),
        None => write!(out, r#"<span class="book-title-text">{display_title}</span>"#).unwrap(),
    }

    let count = catalog.reread_count(book.canonical_title());
    if count > 1 && catalog.is_latest_read(book) {
        write!(
            out,
            r#"<span class="reread-badge">{}</span>"#,
            locale.reread_badge(count)
        )
        .unwrap();
    }
}
