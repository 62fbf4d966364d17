//! The parsed book list and its derived groupings.

use std::collections::{BTreeMap, HashMap};

use crate::book::{self, Book};

/// All books from `books.csv`, sorted newest first, with reread counts
/// and latest-read snapshots precomputed per canonical title.
#[derive(Debug, Default)]
pub struct Catalog {
    books: Vec<Book>,
    read_counts: HashMap<String, usize>,
    latest_read: HashMap<String, i32>,
}

impl Catalog {
    /// Parse a CSV export of the reading list.
    ///
    /// The header row names the columns; `title`, `english-title`, `year`,
    /// and `month` are recognized (case-insensitive). Fields may be
    /// wrapped in double quotes. Rows without any title or without a
    /// positive year and month are skipped, never rejected.
    #[must_use]
    pub fn from_csv(text: &str) -> Self {
        let mut lines = text.trim().lines();
        let Some(header_line) = lines.next() else {
            return Self::default();
        };
        let headers: Vec<String> = header_line
            .split(',')
            .map(|h| h.trim().to_lowercase())
            .collect();

        let mut books = Vec::new();
        for line in lines {
            if line.trim().is_empty() {
                continue;
            }
            let cols: Vec<&str> = line.split(',').collect();
            let mut book = Book {
                title: String::new(),
                english_title: String::new(),
                year: 0,
                month: 0,
            };
            for (index, header) in headers.iter().enumerate() {
                let value = unquote(cols.get(index).copied().unwrap_or(""));
                match header.as_str() {
                    "year" => book.year = value.parse().unwrap_or(0),
                    "month" => book.month = value.parse().unwrap_or(0),
                    "title" => book.title = value.to_owned(),
                    "english-title" => book.english_title = value.to_owned(),
                    _ => {}
                }
            }
            let has_title = !book.title.is_empty() || !book.english_title.is_empty();
            if has_title && book.year > 0 && book.month > 0 {
                books.push(book);
            }
        }
        books.sort_by(book::compare_desc);

        let mut read_counts = HashMap::new();
        let mut latest_read: HashMap<String, i32> = HashMap::new();
        for book in &books {
            let key = book.canonical_title().to_owned();
            *read_counts.entry(key.clone()).or_insert(0) += 1;
            let snapshot = book.snapshot();
            latest_read
                .entry(key)
                .and_modify(|latest| *latest = (*latest).max(snapshot))
                .or_insert(snapshot);
        }

        Self {
            books,
            read_counts,
            latest_read,
        }
    }

    /// All books, newest first.
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Books grouped by year; within a year, newest month first.
    #[must_use]
    pub fn by_year(&self) -> BTreeMap<i32, Vec<&Book>> {
        let mut grouped: BTreeMap<i32, Vec<&Book>> = BTreeMap::new();
        for book in &self.books {
            grouped.entry(book.year).or_default().push(book);
        }
        grouped
    }

    /// Number of books finished in a given month.
    #[must_use]
    pub fn month_count(&self, year: i32, month: u32) -> usize {
        self.books
            .iter()
            .filter(|b| b.year == year && b.month == month)
            .count()
    }

    /// Years to display, newest first, from `current_year` down to the
    /// oldest year with data (or just the current year when empty).
    #[must_use]
    pub fn year_range(&self, current_year: i32) -> Vec<i32> {
        let min_year = self
            .books
            .iter()
            .map(|b| b.year)
            .min()
            .unwrap_or(current_year)
            .min(current_year);
        (min_year..=current_year).rev().collect()
    }

    /// How many times a canonical title was read.
    #[must_use]
    pub fn reread_count(&self, canonical_title: &str) -> usize {
        self.read_counts.get(canonical_title).copied().unwrap_or(0)
    }

    /// Whether this entry is the most recent read of its title.
    #[must_use]
    pub fn is_latest_read(&self, book: &Book) -> bool {
        self.latest_read.get(book.canonical_title()) == Some(&book.snapshot())
    }
}

/// Strip one pair of surrounding double quotes, then trim.
fn unquote(raw: &str) -> &str {
    let value = if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        &raw[1..raw.len() - 1]
    } else {
        raw
    };
    value.trim()
}
