//! Review filename conventions.
//!
//! Review files are named `YYYY-MM-DD_<slug>.md` (or with a `-` before the
//! slug). When front matter omits `title`, `date`, or `permalink`, the
//! missing value is derived from the filename.

use std::sync::LazyLock;

use regex::Regex;

static DATED_SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}[-_](.+)$").unwrap());

static ISO_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4}-\d{2}-\d{2})").unwrap());

static COMPACT_DATE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d{8})").unwrap());

/// Title for a review file: the slug after the date prefix.
///
/// Falls back to everything after the first `_`, then to the whole
/// basename.
#[must_use]
pub fn derive_title(filename: &str) -> String {
    let base = strip_md(filename);
    if let Some(caps) = DATED_SLUG_RE.captures(base) {
        return caps[1].to_owned();
    }
    let after_underscore = base
        .split('_')
        .skip(1)
        .collect::<Vec<_>>()
        .join("_");
    if after_underscore.is_empty() {
        base.to_owned()
    } else {
        after_underscore
    }
}

/// Date token for a review file: the leading `YYYY-MM-DD` (underscores
/// normalized to hyphens) or `YYYYMMDD` prefix.
///
/// Falls back to the first `_`/`-` separated token filtered to digits and
/// hyphens, which may be empty.
#[must_use]
pub fn derive_date(filename: &str) -> String {
    let base = strip_md(filename).replace('_', "-");
    if let Some(caps) = ISO_DATE_RE.captures(&base) {
        return caps[1].to_owned();
    }
    if let Some(caps) = COMPACT_DATE_RE.captures(&base) {
        return caps[1].to_owned();
    }
    filename
        .split(['_', '-'])
        .next()
        .unwrap_or("")
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-')
        .collect()
}

/// Permalink slug for a review file; same rule as the title.
#[must_use]
pub fn derive_permalink(filename: &str) -> String {
    derive_title(filename)
}

/// Strip a case-insensitive `.md` extension.
fn strip_md(filename: &str) -> &str {
    match filename.len().checked_sub(3).and_then(|at| filename.get(at..)) {
        Some(ext) if ext.eq_ignore_ascii_case(".md") => &filename[..filename.len() - 3],
        _ => filename,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn title_from_dated_filename() {
        assert_eq!(derive_title("2024-03-05_my-book.md"), "my-book");
        assert_eq!(derive_title("2024-03-05-my-book.md"), "my-book");
        assert_eq!(derive_title("2024-03-05_어린왕자.md"), "어린왕자");
    }

    #[test]
    fn title_falls_back_to_underscore_split() {
        assert_eq!(derive_title("notes_my_book.md"), "my_book");
        assert_eq!(derive_title("plain.md"), "plain");
        assert_eq!(derive_title("trailing_.md"), "trailing_");
    }

    #[test]
    fn extension_strip_is_case_insensitive() {
        assert_eq!(derive_title("2024-03-05_book.MD"), "book");
    }

    #[test]
    fn date_from_dated_filename() {
        assert_eq!(derive_date("2024-03-05_my-book.md"), "2024-03-05");
        assert_eq!(derive_date("2024-03-05-my-book.md"), "2024-03-05");
        assert_eq!(derive_date("20240305_my-book.md"), "20240305");
    }

    #[test]
    fn date_falls_back_to_leading_token_digits() {
        assert_eq!(derive_date("2024_book.md"), "2024");
        assert_eq!(derive_date("book.md"), "");
    }

    #[test]
    fn permalink_matches_title_rule() {
        assert_eq!(
            derive_permalink("2024-03-05_my-book.md"),
            derive_title("2024-03-05_my-book.md")
        );
    }
}
