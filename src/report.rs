//! Persisting collection results as JSON reports.
//!
//! Each run writes one pretty-printed JSON file named after the first seed
//! keyword and the time of the run, e.g.
//! `output/keywords_캠핑_20260825_143005.json`. Reports deserialize back
//! with the same types, so downstream tooling can reload them.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::collector::KeywordSummary;
use crate::error::Result;

/// Directory reports land in unless the caller overrides it.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Longest keyword fragment, in characters, embedded in a file name.
pub const MAX_FILENAME_KEYWORD_CHARS: usize = 20;

const FILENAME_TIMESTAMP: &str = "%Y%m%d_%H%M%S";

/// A saved collection run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordReport {
    /// The first seed the run started from.
    pub seed_keyword: String,
    /// Local wall-clock time the report was assembled.
    pub collected_at: NaiveDateTime,
    pub total_keywords: usize,
    pub golden_count: usize,
    pub keywords: Vec<KeywordSummary>,
}

impl KeywordReport {
    /// Assemble a report for `keywords`, stamped with the current time.
    pub fn new(seed_keyword: impl Into<String>, keywords: Vec<KeywordSummary>) -> Self {
        let golden_count = keywords.iter().filter(|k| k.is_golden).count();
        KeywordReport {
            seed_keyword: seed_keyword.into(),
            collected_at: Local::now().naive_local(),
            total_keywords: keywords.len(),
            golden_count,
            keywords,
        }
    }
}

/// Write `report` into `output_dir`, creating the directory if needed.
///
/// Returns the path of the written file.
pub fn save_report(report: &KeywordReport, output_dir: impl AsRef<Path>) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    fs::create_dir_all(output_dir)?;

    let filename = format!(
        "keywords_{}_{}.json",
        sanitize_for_filename(&report.seed_keyword),
        Local::now().format(FILENAME_TIMESTAMP),
    );
    let path = output_dir.join(filename);

    fs::write(&path, serde_json::to_string_pretty(report)?)?;
    log::info!("Saved report to {}", path.display());
    Ok(path)
}

/// Make a keyword safe to embed in a file name: strip characters that are
/// special on common filesystems, trim, and cap the length in characters.
pub fn sanitize_for_filename(keyword: &str) -> String {
    let cleaned: String = keyword
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*'))
        .collect();
    cleaned
        .trim()
        .chars()
        .take(MAX_FILENAME_KEYWORD_CHARS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::rating::KeywordRating;

    fn summary(keyword: &str, docs: u64) -> KeywordSummary {
        KeywordSummary {
            keyword: keyword.to_string(),
            docs,
            is_golden: docs <= 10_000,
            rating: KeywordRating::from_doc_count(docs),
        }
    }

    #[test]
    fn test_sanitize_removes_special_characters() {
        assert_eq!(sanitize_for_filename("캠핑/의자"), "캠핑의자");
        assert_eq!(sanitize_for_filename("a<b>c:d\"e|f?g*h\\i"), "abcdefghi");
        assert_eq!(sanitize_for_filename("  <캠핑>  "), "캠핑");
    }

    #[test]
    fn test_sanitize_caps_length_in_characters() {
        let long = "가".repeat(30);
        let sanitized = sanitize_for_filename(&long);
        assert_eq!(sanitized.chars().count(), MAX_FILENAME_KEYWORD_CHARS);
    }

    #[test]
    fn test_report_counts() {
        let report = KeywordReport::new(
            "캠핑",
            vec![
                summary("캠핑 의자", 4_000),
                summary("캠핑 텐트", 50_000),
                summary("캠핑 요리", 9_000),
            ],
        );
        assert_eq!(report.total_keywords, 3);
        assert_eq!(report.golden_count, 2);
    }

    #[test]
    fn test_save_report_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let report = KeywordReport::new("캠핑", vec![summary("캠핑 의자", 4_000)]);

        let path = save_report(&report, dir.path()).unwrap();
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("keywords_캠핑_"));
        assert!(name.ends_with(".json"));

        let contents = fs::read_to_string(&path).unwrap();
        // Hangul must be written as-is, not escaped.
        assert!(contents.contains("캠핑 의자"));

        let back: KeywordReport = serde_json::from_str(&contents).unwrap();
        assert_eq!(back, report);
    }

    #[test]
    fn test_save_report_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("reports").join("august");
        let report = KeywordReport::new("제주 여행", Vec::new());

        let path = save_report(&report, &nested).unwrap();
        assert!(path.exists());
        assert_eq!(report.total_keywords, 0);
        assert_eq!(report.golden_count, 0);
    }
}
