//! CLI commands.

use std::path::PathBuf;

use clap::Args;

use booklog_config::{CliSettings, Config};
use booklog_meta::Locale;
use booklog_site::{Site, SiteConfig};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for `booklog build`.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Path to booklog.toml (discovered in parent directories by default).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory containing books.csv and reviews/.
    #[arg(long)]
    pub source: Option<PathBuf>,

    /// Output directory for the generated site.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Language to build (ko or en), overriding the config file.
    #[arg(long)]
    pub language: Option<String>,

    /// Verbose logging.
    #[arg(long, short)]
    pub verbose: bool,
}

impl BuildArgs {
    pub(crate) fn execute(self, output: &Output) -> Result<(), CliError> {
        let settings = CliSettings {
            source_dir: self.source,
            output_dir: self.out,
        };
        let config = Config::load(self.config.as_deref(), &settings)?;

        let language = self
            .language
            .unwrap_or_else(|| config.site.language.clone());
        let site = Site::new(SiteConfig {
            title: config.site.title.clone(),
            locale: Locale::from_tag(&language),
            books_files: config.books_files(),
            reviews_dir: config.reviews_dir(),
            assets_dir: config.assets_dir(),
            output_dir: config.output_dir(),
        });

        let summary = site.build()?;
        output.success(&format!(
            "Built {} pages ({} books, {} reviews) into {}",
            summary.pages,
            summary.books,
            summary.reviews,
            config.output_dir().display()
        ));
        Ok(())
    }
}
