//! End-to-end build over a temporary site tree.

use std::fs;

use chrono::NaiveDate;
use tempfile::TempDir;

use booklog_meta::Locale;
use booklog_site::{Site, SiteConfig};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn config_for(root: &std::path::Path) -> SiteConfig {
    SiteConfig {
        title: "독서 기록".to_owned(),
        locale: Locale::Ko,
        books_files: vec![root.join("books.csv"), root.join("books.csv.example")],
        reviews_dir: root.join("reviews"),
        assets_dir: root.join("assets"),
        output_dir: root.join("_site"),
    }
}

#[test]
fn builds_complete_site_tree() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    fs::write(
        root.join("books.csv"),
        "title,english-title,year,month\n데미안,Demian,2024,3\n데미안,Demian,2022,1\n",
    )
    .unwrap();
    fs::create_dir(root.join("reviews")).unwrap();
    fs::write(
        root.join("reviews").join("2024-03-09_demian.md"),
        concat!(
            "---\n",
            "title: 데미안\n",
            "date: 2024-03-09\n",
            "author: 헤르만 헤세\n",
            "publication_year: 1919\n",
            "---\n",
            "# 감상\n",
            "\n",
            "**좋았다**[^1]\n",
            "\n",
            "[^1]: 정말로\n",
        ),
    )
    .unwrap();
    fs::create_dir(root.join("assets")).unwrap();
    fs::write(root.join("assets").join("style.css"), "body {}\n").unwrap();

    let summary = Site::new(config_for(root))
        .build_with_date(day(2024, 6, 1))
        .unwrap();
    assert_eq!(summary.books, 2);
    assert_eq!(summary.reviews, 1);
    assert_eq!(summary.pages, 3);

    let index = fs::read_to_string(root.join("_site").join("index.html")).unwrap();
    assert!(index.contains("독서 히트맵"));
    assert!(index.contains("heatmap-cell level-1"));
    assert!(index.contains(r#"href="reviews/demian.html""#));
    assert!(index.contains("reread-badge"));
    assert!(index.contains("최근 후기"));

    let archive = fs::read_to_string(root.join("_site").join("reviews").join("index.html")).unwrap();
    assert!(archive.contains(r#"href="demian.html""#));
    assert!(archive.contains("데미안"));

    let detail = fs::read_to_string(root.join("_site").join("reviews").join("demian.html")).unwrap();
    assert!(detail.contains(r#"<h1 id="review-title">데미안</h1>"#));
    assert!(detail.contains(r#"<p id="review-meta">헤르만 헤세 · 1919</p>"#));
    assert!(detail.contains("<strong>좋았다</strong>"));
    assert!(detail.contains(r##"<li id="fn-1">정말로 <a href="#ref-1">↩</a></li>"##));

    assert!(root.join("_site").join("assets").join("style.css").is_file());
}

#[test]
fn falls_back_to_example_csv() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    fs::write(
        root.join("books.csv.example"),
        "title,year,month\n예시 책,2024,1\n",
    )
    .unwrap();

    let summary = Site::new(config_for(root))
        .build_with_date(day(2024, 6, 1))
        .unwrap();
    assert_eq!(summary.books, 1);

    let index = fs::read_to_string(root.join("_site").join("index.html")).unwrap();
    assert!(index.contains("예시 책"));
}

#[test]
fn builds_empty_site_without_any_data() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    let summary = Site::new(config_for(root))
        .build_with_date(day(2024, 6, 1))
        .unwrap();
    assert_eq!(summary.books, 0);
    assert_eq!(summary.reviews, 0);
    assert_eq!(summary.pages, 2);

    let index = fs::read_to_string(root.join("_site").join("index.html")).unwrap();
    assert!(index.contains("표시할 데이터가 없어요."));
    assert!(index.contains("표시할 책이 없어요."));
}
