//! UI strings for the two supported languages.
//!
//! The site is built once per configured language; all user-facing copy
//! goes through [`Locale`] so the builder never embeds literals.

const MONTH_LABELS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Output language of the generated site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    Ko,
    En,
}

impl Locale {
    /// Parse a language tag; anything starting with `en` is English,
    /// everything else Korean.
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        if tag.trim().to_ascii_lowercase().starts_with("en") {
            Self::En
        } else {
            Self::Ko
        }
    }

    /// Value for the `<html lang>` attribute.
    #[must_use]
    pub fn html_lang(self) -> &'static str {
        match self {
            Self::Ko => "ko",
            Self::En => "en",
        }
    }

    /// Label for a 1-based month.
    #[must_use]
    pub fn month_label(self, month: u32) -> String {
        match self {
            Self::Ko => format!("{month}월"),
            Self::En => MONTH_LABELS_EN
                .get(month.checked_sub(1).map_or(usize::MAX, |m| m as usize))
                .map_or_else(|| format!("M{month}"), |label| (*label).to_owned()),
        }
    }

    #[must_use]
    pub fn heatmap_title(self) -> &'static str {
        match self {
            Self::Ko => "독서 히트맵",
            Self::En => "Reading Heatmap",
        }
    }

    #[must_use]
    pub fn total_books(self, count: usize) -> String {
        match self {
            Self::Ko => format!("총 {count}권 읽었어요"),
            Self::En => format!("Read {count} books in total"),
        }
    }

    #[must_use]
    pub fn heatmap_empty(self) -> &'static str {
        match self {
            Self::Ko => "표시할 데이터가 없어요.",
            Self::En => "No reading data yet.",
        }
    }

    #[must_use]
    pub fn no_books(self) -> &'static str {
        match self {
            Self::Ko => "표시할 책이 없어요.",
            Self::En => "No books to show.",
        }
    }

    #[must_use]
    pub fn year_summary(self, count: usize) -> String {
        match self {
            Self::Ko => format!("{count}권 읽음"),
            Self::En => format!("Read {count} books"),
        }
    }

    #[must_use]
    pub fn cell_title(self, year: i32, month_label: &str, count: usize) -> String {
        match self {
            Self::Ko => format!("{year}년 {month_label}: {count}권"),
            Self::En => format!("{month_label} {year}: {count} books"),
        }
    }

    #[must_use]
    pub fn reread_badge(self, count: usize) -> String {
        match self {
            Self::Ko => format!("{count}회차"),
            Self::En => format!("{count}x read"),
        }
    }

    #[must_use]
    pub fn legend_labels(self) -> [&'static str; 4] {
        ["1", "2", "3", "4+"]
    }

    #[must_use]
    pub fn reviews_title(self) -> &'static str {
        match self {
            Self::Ko => "최근 후기",
            Self::En => "Recent Posts",
        }
    }

    #[must_use]
    pub fn no_reviews(self) -> &'static str {
        match self {
            Self::Ko => "아직 작성된 서평이 없어요.",
            Self::En => "No posts yet.",
        }
    }

    #[must_use]
    pub fn relative_today(self) -> &'static str {
        match self {
            Self::Ko => "오늘",
            Self::En => "Today",
        }
    }

    #[must_use]
    pub fn relative_days(self, n: i64) -> String {
        match self {
            Self::Ko => format!("{n}일 전"),
            Self::En => format!("{n} day{}", plural(n)),
        }
    }

    #[must_use]
    pub fn relative_weeks(self, n: i64) -> String {
        match self {
            Self::Ko => format!("{n}주 전"),
            Self::En => format!("{n} week{}", plural(n)),
        }
    }

    #[must_use]
    pub fn relative_months(self, n: i64) -> String {
        match self {
            Self::Ko => format!("{n}달 전"),
            Self::En => format!("{n} month{}", plural(n)),
        }
    }

    #[must_use]
    pub fn relative_years(self, n: i64) -> String {
        match self {
            Self::Ko => format!("{n}년 전"),
            Self::En => format!("{n} year{}", plural(n)),
        }
    }
}

fn plural(n: i64) -> &'static str {
    if n == 1 { "" } else { "s" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_parsing_defaults_to_korean() {
        assert_eq!(Locale::from_tag("ko"), Locale::Ko);
        assert_eq!(Locale::from_tag("en"), Locale::En);
        assert_eq!(Locale::from_tag("en-US"), Locale::En);
        assert_eq!(Locale::from_tag("fr"), Locale::Ko);
        assert_eq!(Locale::from_tag(""), Locale::Ko);
    }

    #[test]
    fn month_labels() {
        assert_eq!(Locale::Ko.month_label(3), "3월");
        assert_eq!(Locale::En.month_label(3), "Mar");
        assert_eq!(Locale::En.month_label(13), "M13");
    }

    #[test]
    fn english_pluralization() {
        assert_eq!(Locale::En.relative_days(1), "1 day");
        assert_eq!(Locale::En.relative_days(3), "3 days");
        assert_eq!(Locale::Ko.relative_days(3), "3일 전");
    }
}
