//! Date parsing and presentation.
//!
//! Review dates arrive as loosely formatted strings (`2024-03-05`,
//! `2024.3.5`, `20240305`). Parsing is forgiving; anything unparseable is
//! shown as-is rather than rejected.

use chrono::{Datelike, NaiveDate};

use crate::locale::Locale;

/// Weekday names indexed Sunday-first.
const WEEKDAY_KO: [&str; 7] = ["일", "월", "화", "수", "목", "금", "토"];

/// Format a raw date string for the review page header, Korean style:
/// `2024년 3월 5일 (화)`. The weekday is omitted when the date does not
/// resolve to a real calendar day. Unrecognized input is returned as-is.
#[must_use]
pub fn format_date(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    let parts: Vec<&str> = raw.split(['-', '.', '/']).filter(|p| !p.is_empty()).collect();
    if let [y, m, d] = parts[..] {
        return build_date_string(y, m, d);
    }
    if raw.len() == 8 && raw.bytes().all(|b| b.is_ascii_digit()) {
        return build_date_string(&raw[..4], &raw[4..6], &raw[6..8]);
    }
    raw.to_owned()
}

fn build_date_string(y: &str, m: &str, d: &str) -> String {
    let weekday = parse_ymd(y, m, d)
        .map(|date| {
            let index = date.weekday().num_days_from_sunday() as usize;
            format!(" ({})", WEEKDAY_KO[index])
        })
        .unwrap_or_default();
    format!(
        "{}년 {}월 {}일{weekday}",
        strip_zero(y),
        strip_zero(m),
        strip_zero(d)
    )
}

/// Drop leading zeros by round-tripping through an integer; non-numeric
/// input stays untouched.
fn strip_zero(value: &str) -> String {
    value
        .parse::<i64>()
        .map_or_else(|_| value.to_owned(), |n| n.to_string())
}

/// Parse a loosely formatted date: `Y-M-D` with `-`, `.`, or `/`
/// separators, or compact `YYYYMMDD`.
#[must_use]
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let cleaned = value.trim().replace(['.', '/'], "-");
    let parts: Vec<&str> = cleaned.split('-').filter(|p| !p.is_empty()).collect();
    if let [y, m, d] = parts[..] {
        return parse_ymd(y, m, d);
    }
    if cleaned.len() == 8 && cleaned.bytes().all(|b| b.is_ascii_digit()) {
        return parse_ymd(&cleaned[..4], &cleaned[4..6], &cleaned[6..8]);
    }
    None
}

fn parse_ymd(y: &str, m: &str, d: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y.parse().ok()?, m.parse().ok()?, d.parse().ok()?)
}

/// Relative date label for list pages: today, `N일 전`, `N주 전`, and so
/// on. Unparseable input is returned as-is; future dates read as today.
#[must_use]
pub fn format_relative(value: &str, locale: Locale, today: NaiveDate) -> String {
    if value.is_empty() {
        return String::new();
    }
    let Some(parsed) = parse_date(value) else {
        return value.to_owned();
    };

    let diff_days = (today - parsed).num_days();
    if diff_days <= 0 {
        return locale.relative_today().to_owned();
    }
    if diff_days < 7 {
        return locale.relative_days(diff_days);
    }
    let weeks = diff_days / 7;
    if weeks < 4 {
        return locale.relative_weeks(weeks);
    }
    let months = diff_days / 30;
    if months < 12 {
        return locale.relative_months(months);
    }
    locale.relative_years(diff_days / 365)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn formats_iso_dates_with_weekday() {
        // 2024-03-05 was a Tuesday.
        assert_eq!(format_date("2024-03-05"), "2024년 3월 5일 (화)");
        assert_eq!(format_date("2024.3.5"), "2024년 3월 5일 (화)");
        assert_eq!(format_date("20240305"), "2024년 3월 5일 (화)");
    }

    #[test]
    fn invalid_calendar_day_omits_weekday() {
        assert_eq!(format_date("2024-13-99"), "2024년 13월 99일");
    }

    #[test]
    fn unrecognized_input_is_returned_verbatim() {
        assert_eq!(format_date("sometime"), "sometime");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn parses_supported_shapes() {
        assert_eq!(parse_date("2024-03-05"), Some(day(2024, 3, 5)));
        assert_eq!(parse_date("2024/3/5"), Some(day(2024, 3, 5)));
        assert_eq!(parse_date("20240305"), Some(day(2024, 3, 5)));
        assert_eq!(parse_date("not a date"), None);
    }

    #[test]
    fn relative_buckets() {
        let today = day(2024, 3, 31);
        assert_eq!(format_relative("2024-03-31", Locale::Ko, today), "오늘");
        assert_eq!(format_relative("2024-04-02", Locale::Ko, today), "오늘");
        assert_eq!(format_relative("2024-03-28", Locale::Ko, today), "3일 전");
        assert_eq!(format_relative("2024-03-10", Locale::Ko, today), "3주 전");
        assert_eq!(format_relative("2024-01-05", Locale::Ko, today), "2달 전");
        assert_eq!(format_relative("2022-01-05", Locale::En, today), "2 years");
    }

    #[test]
    fn unparseable_relative_input_passes_through() {
        assert_eq!(
            format_relative("언젠가", Locale::Ko, day(2024, 1, 1)),
            "언젠가"
        );
    }
}
