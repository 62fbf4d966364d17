//! Site assembly: load data, render pages, write the output tree.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use booklog_meta::{Catalog, Locale};
use booklog_renderer::render;

use crate::columns::render_book_columns;
use crate::heatmap::render_heatmap;
use crate::page::page_shell;
use crate::reviews::{ReviewIndex, render_archive, render_detail_body, render_recent};

/// Error type for site builds.
///
/// The rendering pipeline itself never fails; everything here is file
/// I/O surfaced from reading sources or writing the output tree.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Build inputs and destinations.
#[derive(Clone, Debug)]
pub struct SiteConfig {
    /// Site title used in page `<title>` tags.
    pub title: String,
    pub locale: Locale,
    /// CSV candidates, tried in order; the first readable one wins.
    pub books_files: Vec<PathBuf>,
    pub reviews_dir: PathBuf,
    /// Static assets copied verbatim when the directory exists.
    pub assets_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "독서 기록".to_owned(),
            locale: Locale::Ko,
            books_files: vec![
                PathBuf::from("books.csv"),
                PathBuf::from("books.csv.example"),
            ],
            reviews_dir: PathBuf::from("reviews"),
            assets_dir: PathBuf::from("assets"),
            output_dir: PathBuf::from("_site"),
        }
    }
}

/// What a build produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub books: usize,
    pub reviews: usize,
    /// HTML pages written.
    pub pages: usize,
}

/// The static site builder.
pub struct Site {
    config: SiteConfig,
}

impl Site {
    #[must_use]
    pub fn new(config: SiteConfig) -> Self {
        Self { config }
    }

    /// Build the site dated to today.
    pub fn build(&self) -> Result<BuildSummary, SiteError> {
        self.build_with_date(Local::now().date_naive())
    }

    /// Build the site with an explicit "today" for the heatmap range and
    /// relative dates.
    pub fn build_with_date(&self, today: NaiveDate) -> Result<BuildSummary, SiteError> {
        let locale = self.config.locale;
        let catalog = self.load_catalog();
        let reviews = ReviewIndex::scan(&self.config.reviews_dir)?;
        tracing::info!(
            books = catalog.len(),
            reviews = reviews.len(),
            "loaded site data"
        );

        let out = &self.config.output_dir;
        fs::create_dir_all(out.join("reviews"))?;
        let mut pages = 0;

        let index_body = format!(
            concat!(
                r#"<section class="reading-heatmap" id="reading-heatmap">{heatmap}</section>"#,
                r#"<section class="recent-reviews" id="recent-reviews">{recent}</section>"#,
                r#"<section class="past-books" id="past-books">{columns}</section>"#
            ),
            heatmap = render_heatmap(&catalog, locale, today),
            recent = render_recent(&reviews, locale, today),
            columns = render_book_columns(&catalog, locale, &reviews, "reviews/"),
        );
        self.write_page(&out.join("index.html"), &self.config.title, "assets/style.css", &index_body)?;
        pages += 1;

        let archive_body = render_archive(&reviews, locale, today, "");
        self.write_page(
            &out.join("reviews").join("index.html"),
            &self.config.title,
            "../assets/style.css",
            &archive_body,
        )?;
        pages += 1;

        for review in reviews.reviews() {
            let source_path = self.config.reviews_dir.join(&review.filename);
            let text = match fs::read_to_string(&source_path) {
                Ok(text) => text,
                Err(error) => {
                    tracing::warn!(file = %review.filename, %error, "review disappeared during build");
                    continue;
                }
            };
            let rendered = render(&text);
            let body = render_detail_body(review, &rendered);
            self.write_page(
                &out.join("reviews").join(review.page_name()),
                &review.title,
                "../assets/style.css",
                &body,
            )?;
            pages += 1;
        }

        self.copy_assets()?;

        let summary = BuildSummary {
            books: catalog.len(),
            reviews: reviews.len(),
            pages,
        };
        tracing::info!(pages = summary.pages, "site build complete");
        Ok(summary)
    }

    /// Load the first readable CSV candidate; an absent reading list is
    /// an empty catalog, not an error.
    fn load_catalog(&self) -> Catalog {
        for candidate in &self.config.books_files {
            match fs::read_to_string(candidate) {
                Ok(text) => {
                    tracing::debug!(path = %candidate.display(), "reading book list");
                    return Catalog::from_csv(&text);
                }
                Err(error) => {
                    tracing::debug!(path = %candidate.display(), %error, "candidate not readable");
                }
            }
        }
        tracing::warn!("no readable books.csv found, building without catalog data");
        Catalog::default()
    }

    fn write_page(
        &self,
        path: &Path,
        title: &str,
        css_href: &str,
        body: &str,
    ) -> Result<(), SiteError> {
        let html = page_shell(title, self.config.locale.html_lang(), css_href, body);
        fs::write(path, html)?;
        tracing::debug!(path = %path.display(), "wrote page");
        Ok(())
    }

    /// Copy the assets directory into the output tree when present.
    fn copy_assets(&self) -> Result<(), SiteError> {
        if !self.config.assets_dir.is_dir() {
            return Ok(());
        }
        let target = self.config.output_dir.join("assets");
        copy_dir(&self.config.assets_dir, &target)?;
        Ok(())
    }
}

fn copy_dir(from: &Path, to: &Path) -> std::io::Result<()> {
    fs::create_dir_all(to)?;
    for entry in fs::read_dir(from)? {
        let entry = entry?;
        let target = to.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_dir(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_data_file_convention() {
        let config = SiteConfig::default();
        assert_eq!(
            config.books_files,
            vec![
                PathBuf::from("books.csv"),
                PathBuf::from("books.csv.example")
            ]
        );
        assert_eq!(config.locale, Locale::Ko);
    }
}
