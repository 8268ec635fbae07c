//! Output formatting for CLI commands.

use std::path::PathBuf;

use serde::Serialize;

use crate::analyzer::KeywordAnalysis;
use crate::cli::args::{GoldpanArgs, OutputFormat};
use crate::error::Result;
use crate::report::KeywordReport;

/// Result of a collect run, as handed to the renderer.
///
/// JSON output matches the saved report file, with the written path
/// appended when saving was enabled.
#[derive(Debug, Serialize)]
pub struct CollectionOutput {
    #[serde(flatten)]
    pub report: KeywordReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_file: Option<PathBuf>,
}

/// Result of a suggest lookup.
#[derive(Debug, Serialize)]
pub struct SuggestionOutput {
    pub keyword: String,
    pub suggestions: Vec<String>,
}

/// Render a collect result in the configured format.
///
/// `top` caps how many golden keywords the human summary lists.
pub fn output_collection(output: &CollectionOutput, top: usize, args: &GoldpanArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_collection_human(output, top, args),
        OutputFormat::Json => output_json(output, args),
    }
}

/// Render a single-keyword analysis in the configured format.
pub fn output_analysis(analysis: &KeywordAnalysis, args: &GoldpanArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_analysis_human(analysis, args),
        OutputFormat::Json => output_json(analysis, args),
    }
}

/// Render autocomplete suggestions in the configured format.
pub fn output_suggestions(output: &SuggestionOutput, args: &GoldpanArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_suggestions_human(output, args),
        OutputFormat::Json => output_json(output, args),
    }
}

/// Golden TOP-N summary of a collect run.
fn output_collection_human(output: &CollectionOutput, top: usize, args: &GoldpanArgs) -> Result<()> {
    let report = &output.report;

    println!("Golden keywords (top {top}):");
    println!("════════════════════════════");

    let golden: Vec<_> = report
        .keywords
        .iter()
        .filter(|summary| summary.is_golden)
        .take(top)
        .collect();

    if golden.is_empty() {
        println!("No golden keywords found. Try broader seeds or a higher threshold.");
    }
    for (i, summary) in golden.iter().enumerate() {
        println!(
            "{:>2}. {} - {} docs {}",
            i + 1,
            summary.keyword,
            format_count(summary.docs),
            summary.rating.short_label()
        );
    }

    if args.verbosity() > 0 {
        println!();
        println!(
            "Analyzed {} keywords, {} golden.",
            report.total_keywords, report.golden_count
        );
        if let Some(path) = &output.report_file {
            println!("Report saved to: {}", path.display());
        }
    }

    Ok(())
}

/// Section-by-section rendering of one keyword analysis.
fn output_analysis_human(analysis: &KeywordAnalysis, _args: &GoldpanArgs) -> Result<()> {
    println!("Keyword analysis: {}", analysis.keyword);
    println!("═════════════════");
    println!("Documents: {}", format_count(analysis.docs));
    println!("Rating: {}", analysis.rating);
    println!(
        "Golden keyword: {}",
        if analysis.is_golden { "yes" } else { "no" }
    );

    if let Some(competition) = &analysis.competition {
        println!();
        println!("Competition (last 30 days):");
        println!("───────────────────────────");
        println!("Recent posts: {}", format_count(competition.recent));
        println!("Level: {}", competition.level);
    }

    if let Some(recency) = &analysis.recency {
        println!();
        println!("News coverage (last 7 days):");
        println!("────────────────────────────");
        println!("Total articles: {}", format_count(recency.total));
        println!("Recent articles: {}", format_count(recency.recent));
        println!("Activity: {}", recency.activity);
    }

    if !analysis.intent.is_empty() {
        println!();
        println!("Search intent:");
        println!("──────────────");
        for (category, count) in &analysis.intent {
            println!("  {category} ({count})");
        }
    }

    if !analysis.related_keywords.is_empty() {
        println!();
        println!("Related keywords:");
        println!("─────────────────");
        for keyword in &analysis.related_keywords {
            println!("  {keyword}");
        }
    }

    Ok(())
}

/// Numbered suggestion list.
fn output_suggestions_human(output: &SuggestionOutput, _args: &GoldpanArgs) -> Result<()> {
    println!("Suggestions for '{}':", output.keyword);
    println!("─────────────────");

    if output.suggestions.is_empty() {
        println!("No suggestions.");
    }
    for (i, suggestion) in output.suggestions.iter().enumerate() {
        println!("{:>2}. {}", i + 1, suggestion);
    }

    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &GoldpanArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a count with thousands separators.
fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(c);
    }
    formatted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::rating::KeywordRating;
    use crate::collector::KeywordSummary;

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(12_345), "12,345");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn test_collection_output_flattens_report() {
        let output = CollectionOutput {
            report: KeywordReport::new(
                "캠핑",
                vec![KeywordSummary {
                    keyword: "캠핑 의자".to_string(),
                    docs: 3_200,
                    is_golden: true,
                    rating: KeywordRating::VeryGood,
                }],
            ),
            report_file: None,
        };

        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["seed_keyword"], "캠핑");
        assert_eq!(json["total_keywords"], 1);
        assert_eq!(json["golden_count"], 1);
        assert_eq!(json["keywords"][0]["keyword"], "캠핑 의자");
        // The path only appears once a report was written.
        assert!(json.get("report_file").is_none());
    }

    #[test]
    fn test_collection_output_includes_written_path() {
        let output = CollectionOutput {
            report: KeywordReport::new("캠핑", Vec::new()),
            report_file: Some(PathBuf::from("output/keywords_캠핑_20260825_143005.json")),
        };

        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(
            json["report_file"],
            "output/keywords_캠핑_20260825_143005.json"
        );
    }

    #[test]
    fn test_suggestion_output_serialization() {
        let output = SuggestionOutput {
            keyword: "독서모임".to_string(),
            suggestions: vec!["독서모임 추천".to_string(), "독서모임 후기".to_string()],
        };

        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["keyword"], "독서모임");
        assert_eq!(json["suggestions"][1], "독서모임 후기");
    }
}
