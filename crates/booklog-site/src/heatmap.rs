//! The year×month reading heatmap.
//!
//! One row per year from the current year down to the oldest year with
//! data; one cell per month, shaded by how many books were finished.
//! Months in the future are kept in the grid but hidden so every row
//! stays aligned.

use std::fmt::Write;

use chrono::{Datelike, NaiveDate};

use booklog_meta::{Catalog, Locale};
use booklog_renderer::escape_html;

const MONTHS_PER_YEAR: u32 = 12;

/// Shading levels cap at 4 ("4+" in the legend).
const MAX_LEVEL: usize = 4;

/// Render the heatmap section.
#[must_use]
pub fn render_heatmap(catalog: &Catalog, locale: Locale, today: NaiveDate) -> String {
    let mut out = format!(
        concat!(
            r#"<div class="heatmap-header">"#,
            r#"<h2 class="heatmap-title">{title}</h2>"#,
            r#"<p class="heatmap-summary">{summary}</p>"#,
            "</div>"
        ),
        title = locale.heatmap_title(),
        summary = locale.total_books(catalog.len()),
    );

    if catalog.is_empty() {
        write!(out, r#"<p class="heatmap-empty">{}</p>"#, locale.heatmap_empty()).unwrap();
        return out;
    }

    let by_year = catalog.by_year();
    out.push_str(r#"<div class="heatmap-grid"><div class="heatmap-body">"#);
    for year in catalog.year_range(today.year()) {
        write!(
            out,
            r#"<div class="heatmap-row"><div class="year-label">{year}</div>"#
        )
        .unwrap();

        for month in 1..=MONTHS_PER_YEAR {
            let is_future = year > today.year() || (year == today.year() && month > today.month());
            if is_future {
                out.push_str(r#"<div class="heatmap-cell" style="visibility:hidden"></div>"#);
                continue;
            }
            let count = catalog.month_count(year, month);
            let title = locale.cell_title(year, &locale.month_label(month), count);
            if count > 0 {
                write!(
                    out,
                    r#"<div class="heatmap-cell level-{}" title="{}"></div>"#,
                    count.min(MAX_LEVEL),
                    escape_html(&title),
                )
                .unwrap();
            } else {
                write!(out, r#"<div class="heatmap-cell" title="{}"></div>"#, escape_html(&title))
                    .unwrap();
            }
        }

        let total = by_year.get(&year).map_or(0, Vec::len);
        let total_label = if total > 0 { total.to_string() } else { String::new() };
        write!(out, r#"<div class="year-total">{total_label}</div></div>"#).unwrap();
    }
    out.push_str("</div></div>");

    out.push_str(r#"<div class="heatmap-legend-wrapper"><div class="heatmap-legend">"#);
    for (index, label) in locale.legend_labels().iter().enumerate() {
        write!(
            out,
            concat!(
                r#"<span class="heatmap-legend-item">"#,
                r#"<span class="heatmap-legend-square level-{level}"></span>"#,
                "<span>{label}</span></span>"
            ),
            level = index + 1,
            label = label,
        )
        .unwrap();
    }
    out.push_str("</div></div>");
    out
}
