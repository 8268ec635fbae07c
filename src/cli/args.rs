//! Command line argument parsing for the goldpan CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::analyzer::AnalysisOptions;
use crate::config::DEFAULT_CONFIG_PATH;

/// goldpan - golden-keyword discovery for Naver blog SEO
#[derive(Parser, Debug, Clone)]
#[command(name = "goldpan")]
#[command(about = "Find low-competition Naver blog keywords worth writing about")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct GoldpanArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=debug, 3=trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Naver API client id (overrides the config file)
    #[arg(long, env = "NAVER_BLOG_CLIENT_ID")]
    pub client_id: Option<String>,

    /// Naver API client secret (overrides the config file)
    #[arg(long, env = "NAVER_BLOG_CLIENT_SECRET")]
    pub client_secret: Option<String>,

    /// Credentials config file
    #[arg(long, value_name = "FILE", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl GoldpanArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Expand seed keywords and rate every candidate found
    Collect(CollectArgs),

    /// Deep-dive one keyword: competition, recency, intent, related terms
    Analyze(AnalyzeArgs),

    /// Show autocomplete suggestions for a keyword
    Suggest(SuggestArgs),
}

/// Arguments for bulk collection
#[derive(Parser, Debug, Clone)]
pub struct CollectArgs {
    /// Seed keywords (comma-separated or repeated)
    #[arg(value_name = "KEYWORD", required = true, value_delimiter = ',')]
    pub seeds: Vec<String>,

    /// Maximum number of candidates to analyze
    #[arg(short, long, default_value = "50")]
    pub max_keywords: usize,

    /// Document-count cutoff (inclusive) for golden keywords
    #[arg(short, long, default_value = "10000")]
    pub golden_threshold: u64,

    /// Directory the JSON report is written into
    #[arg(short, long, value_name = "DIR", default_value = "output")]
    pub output_dir: PathBuf,

    /// Don't write a JSON report
    #[arg(long)]
    pub no_save: bool,

    /// How many golden keywords to highlight in the summary
    #[arg(long, default_value = "10")]
    pub top: usize,
}

impl CollectArgs {
    /// Check if a report file should be written
    pub fn should_save(&self) -> bool {
        !self.no_save
    }
}

/// Arguments for single-keyword analysis
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Keyword to analyze
    #[arg(value_name = "KEYWORD")]
    pub keyword: String,

    /// Skip the competition section (saves one request)
    #[arg(long)]
    pub no_competition: bool,

    /// Skip the recency section (saves one request)
    #[arg(long)]
    pub no_recency: bool,

    /// Skip intent classification
    #[arg(long)]
    pub no_intent: bool,

    /// Skip related-keyword expansion (saves one request)
    #[arg(long)]
    pub no_related: bool,
}

impl AnalyzeArgs {
    /// Translate the skip flags into analysis options
    pub fn analysis_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            competition: !self.no_competition,
            recency: !self.no_recency,
            intent: !self.no_intent,
            related: !self.no_related,
        }
    }
}

/// Arguments for autocomplete suggestions
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Keyword to fetch suggestions for
    #[arg(value_name = "KEYWORD")]
    pub keyword: String,

    /// Maximum number of suggestions
    #[arg(short, long, default_value = "10")]
    pub limit: usize,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
