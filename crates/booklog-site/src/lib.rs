//! Static site builder for the reading log.
//!
//! Takes a `books.csv` reading list and a directory of Markdown reviews
//! and writes a complete static site: an index page with the year×month
//! heatmap and grouped book columns, a review archive page, and one HTML
//! page per review rendered through [`booklog_renderer`].
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), booklog_site::SiteError> {
//! use std::path::PathBuf;
//! use booklog_site::{Site, SiteConfig};
//!
//! let site = Site::new(SiteConfig {
//!     output_dir: PathBuf::from("_site"),
//!     ..SiteConfig::default()
//! });
//! let summary = site.build()?;
//! println!("{} pages written", summary.pages);
//! # Ok(())
//! # }
//! ```

mod columns;
mod heatmap;
mod page;
mod reviews;
mod site;

pub use columns::render_book_columns;
pub use heatmap::render_heatmap;
pub use page::page_shell;
pub use reviews::{Review, ReviewIndex, render_archive, render_detail_body, render_recent};
pub use site::{BuildSummary, Site, SiteConfig, SiteError};
