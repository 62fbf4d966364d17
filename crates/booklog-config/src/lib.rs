//! Configuration management for booklog.
//!
//! Parses `booklog.toml` with serde and provides auto-discovery of the
//! config file in parent directories. All settings have defaults, so a
//! missing file is not an error — the builder runs against the current
//! directory's conventions (`books.csv`, `reviews/`, `assets/`, `_site`).
//!
//! CLI flags can be applied during load via [`CliSettings`].

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "booklog.toml";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded
/// config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the directory data paths are resolved against.
    pub source_dir: Option<PathBuf>,
    /// Override the output directory.
    pub output_dir: Option<PathBuf>,
}

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site presentation settings.
    pub site: SiteSection,
    /// Data and output locations, relative to the config file.
    pub paths: PathsSection,

    /// Directory relative paths resolve against (set after loading).
    #[serde(skip)]
    base_dir: PathBuf,
    /// Output override from the CLI (set after loading).
    #[serde(skip)]
    output_override: Option<PathBuf>,
}

/// Site presentation settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Title shown in every page's `<title>`.
    pub title: String,
    /// Language tag for the generated site (`ko` or `en`).
    pub language: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: "독서 기록".to_owned(),
            language: "ko".to_owned(),
        }
    }
}

/// Data and output locations.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct PathsSection {
    /// CSV candidates tried in order.
    pub books: Vec<String>,
    pub reviews: String,
    pub assets: String,
    pub output: String,
}

impl Default for PathsSection {
    fn default() -> Self {
        Self {
            books: vec!["books.csv".to_owned(), "books.csv.example".to_owned()],
            reviews: "reviews".to_owned(),
            assets: "assets".to_owned(),
            output: "_site".to_owned(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit `path` is parsed as-is; otherwise `booklog.toml` is
    /// discovered upwards from the source directory (or the current
    /// directory). No file found means defaults.
    pub fn load(path: Option<&Path>, cli: &CliSettings) -> Result<Self, ConfigError> {
        let start = cli.source_dir.clone().unwrap_or_else(|| PathBuf::from("."));

        let mut config = if let Some(explicit) = path {
            Self::from_file(explicit)?
        } else if let Some(discovered) = discover(&start) {
            Self::from_file(&discovered)?
        } else {
            Self {
                base_dir: start.clone(),
                ..Self::default()
            }
        };

        if let Some(source_dir) = &cli.source_dir {
            config.base_dir = source_dir.clone();
        }
        config.output_override = cli.output_dir.clone();
        Ok(config)
    }

    /// Parse a specific config file; relative paths resolve against its
    /// directory.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&text)?;
        config.base_dir = path.parent().unwrap_or(Path::new(".")).to_path_buf();
        Ok(config)
    }

    /// CSV candidates, in priority order.
    #[must_use]
    pub fn books_files(&self) -> Vec<PathBuf> {
        self.paths
            .books
            .iter()
            .map(|p| self.base_dir.join(p))
            .collect()
    }

    #[must_use]
    pub fn reviews_dir(&self) -> PathBuf {
        self.base_dir.join(&self.paths.reviews)
    }

    #[must_use]
    pub fn assets_dir(&self) -> PathBuf {
        self.base_dir.join(&self.paths.assets)
    }

    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        self.output_override
            .clone()
            .unwrap_or_else(|| self.base_dir.join(&self.paths.output))
    }
}

/// Walk up from `start` looking for `booklog.toml`.
fn discover(start: &Path) -> Option<PathBuf> {
    let mut dir = Some(start);
    while let Some(current) = dir {
        let candidate = current.join(CONFIG_FILENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        dir = current.parent();
    }
    None
}
