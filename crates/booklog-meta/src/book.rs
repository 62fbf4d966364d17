//! A single entry of the reading list.

use std::cmp::Ordering;

use crate::locale::Locale;

/// One read book: a title (Korean and/or English) plus the year and month
/// it was finished.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub english_title: String,
    pub year: i32,
    pub month: u32,
}

impl Book {
    /// The title used for grouping and deduplication: the Korean title
    /// when present, the English one otherwise.
    #[must_use]
    pub fn canonical_title(&self) -> &str {
        if self.title.is_empty() {
            &self.english_title
        } else {
            &self.title
        }
    }

    /// The title to display for a locale, falling back to the other
    /// language when the preferred one is missing.
    #[must_use]
    pub fn localized_title(&self, locale: Locale) -> &str {
        let (preferred, fallback) = match locale {
            Locale::Ko => (&self.title, &self.english_title),
            Locale::En => (&self.english_title, &self.title),
        };
        if preferred.is_empty() {
            fallback
        } else {
            preferred
        }
    }

    /// Comparable `(year, month)` snapshot, later reads compare greater.
    #[must_use]
    pub fn snapshot(&self) -> i32 {
        self.year * 100 + i32::try_from(self.month).unwrap_or(0)
    }
}

/// Newest first: year, then month, then canonical title ascending.
#[must_use]
pub fn compare_desc(a: &Book, b: &Book) -> Ordering {
    b.year
        .cmp(&a.year)
        .then(b.month.cmp(&a.month))
        .then_with(|| a.canonical_title().cmp(b.canonical_title()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(title: &str, english: &str, year: i32, month: u32) -> Book {
        Book {
            title: title.to_owned(),
            english_title: english.to_owned(),
            year,
            month,
        }
    }

    #[test]
    fn canonical_title_prefers_korean() {
        assert_eq!(book("소년이 온다", "Human Acts", 2024, 1).canonical_title(), "소년이 온다");
        assert_eq!(book("", "Human Acts", 2024, 1).canonical_title(), "Human Acts");
    }

    #[test]
    fn localized_title_falls_back() {
        let b = book("소년이 온다", "", 2024, 1);
        assert_eq!(b.localized_title(Locale::En), "소년이 온다");
        let b = book("소년이 온다", "Human Acts", 2024, 1);
        assert_eq!(b.localized_title(Locale::En), "Human Acts");
        assert_eq!(b.localized_title(Locale::Ko), "소년이 온다");
    }

    #[test]
    fn sort_is_newest_first_then_title() {
        let mut books = vec![
            book("b", "", 2023, 5),
            book("a", "", 2024, 1),
            book("c", "", 2024, 3),
            book("a2", "", 2024, 3),
        ];
        books.sort_by(compare_desc);
        let titles: Vec<_> = books.iter().map(Book::canonical_title).collect();
        assert_eq!(titles, vec!["a2", "c", "a", "b"]);
    }

    #[test]
    fn snapshot_orders_by_year_then_month() {
        assert!(book("a", "", 2024, 2).snapshot() > book("a", "", 2024, 1).snapshot());
        assert!(book("a", "", 2025, 1).snapshot() > book("a", "", 2024, 12).snapshot());
    }
}
