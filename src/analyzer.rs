//! Deep analysis of a single keyword.
//!
//! [`KeywordAnalyzer`] runs the full sequence of lookups for one keyword:
//! total document count, a title sample, and the optional competition,
//! recency, intent, and related-keyword sections. Individual lookups that
//! fail degrade to their neutral values inside the provider layer, so an
//! analysis always completes once credentials are present; only missing
//! credentials make [`analyze`](KeywordAnalyzer::analyze) fail.
//!
//! Requests are spaced through the configured [`Pacer`] to stay friendly
//! to the provider's rate limits.

use std::sync::Arc;

use serde::{Serialize, Serializer};

use crate::analysis::competition::{COMPETITION_WINDOW_DAYS, CompetitionReport};
use crate::analysis::intent::{IntentCategory, classify_intents};
use crate::analysis::miner::TitleMiner;
use crate::analysis::rating::KeywordRating;
use crate::analysis::recency::{RECENCY_WINDOW_DAYS, RecencyReport};
use crate::error::{GoldpanError, Result};
use crate::keyword::KeywordSet;
use crate::provider::{AutocompleteClient, DEFAULT_SUGGESTION_COUNT, SearchClient};
use crate::throttle::{FixedPacer, Pacer};

/// Titles fetched per keyword for mining and intent analysis.
pub const TITLE_SAMPLE_SIZE: usize = 50;

/// Cap on the merged related-keyword list.
pub const MAX_RELATED_KEYWORDS: usize = 20;

/// Which optional sections an analysis computes. All sections are on by
/// default; turning one off also skips its network lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisOptions {
    pub competition: bool,
    pub recency: bool,
    pub intent: bool,
    pub related: bool,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        AnalysisOptions {
            competition: true,
            recency: true,
            intent: true,
            related: true,
        }
    }
}

/// Complete analysis record for one keyword.
///
/// Optional sections are omitted from the serialized form when they were
/// not computed; the rating serializes as its long console label.
#[derive(Debug, Clone, Serialize)]
pub struct KeywordAnalysis {
    pub keyword: String,
    /// Total blog documents competing for the keyword.
    pub docs: u64,
    pub is_golden: bool,
    #[serde(serialize_with = "long_rating_label")]
    pub rating: KeywordRating,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub competition: Option<CompetitionReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recency: Option<RecencyReport>,
    /// Top intent categories with their marker counts.
    pub intent: Vec<(IntentCategory, u64)>,
    pub related_keywords: Vec<String>,
}

fn long_rating_label<S: Serializer>(rating: &KeywordRating, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(rating.label())
}

/// Runs the per-keyword lookup sequence.
pub struct KeywordAnalyzer {
    search: SearchClient,
    autocomplete: AutocompleteClient,
    pacer: Arc<dyn Pacer>,
}

impl KeywordAnalyzer {
    /// Create an analyzer with the default request pacing.
    pub fn new(search: SearchClient, autocomplete: AutocompleteClient) -> Self {
        KeywordAnalyzer {
            search,
            autocomplete,
            pacer: Arc::new(FixedPacer::default()),
        }
    }

    /// Replace the request pacer, e.g. with [`NoOpPacer`] in tests.
    ///
    /// [`NoOpPacer`]: crate::throttle::NoOpPacer
    pub fn with_pacer(mut self, pacer: Arc<dyn Pacer>) -> Self {
        self.pacer = pacer;
        self
    }

    /// Whether the underlying search client has credentials.
    pub fn is_configured(&self) -> bool {
        self.search.is_configured()
    }

    /// Analyze one keyword.
    ///
    /// Fails only when API credentials are missing; lookup failures along
    /// the way degrade to zero counts and empty sections.
    pub async fn analyze(&self, keyword: &str, options: &AnalysisOptions) -> Result<KeywordAnalysis> {
        if !self.is_configured() {
            return Err(GoldpanError::config(
                "API credentials are not configured; run with --client-id/--client-secret \
                 or add them to the config file",
            ));
        }

        log::info!("Analyzing '{}'", keyword);

        let docs = self.search.document_count(keyword).await;
        self.pacer.request_pause().await;

        let rating = KeywordRating::from_doc_count(docs);

        let posts = self.search.blog_titles(keyword, TITLE_SAMPLE_SIZE).await;
        self.pacer.request_pause().await;
        let titles: Vec<&str> = posts.iter().map(|post| post.title.as_str()).collect();

        let competition = if options.competition {
            let recent = self
                .search
                .recent_blog_count(keyword, COMPETITION_WINDOW_DAYS)
                .await;
            self.pacer.request_pause().await;
            Some(CompetitionReport::from_recent_count(recent))
        } else {
            None
        };

        let recency = if options.recency {
            let counts = self.search.news_counts(keyword, RECENCY_WINDOW_DAYS).await;
            self.pacer.request_pause().await;
            Some(RecencyReport::from_counts(counts))
        } else {
            None
        };

        let intent = if options.intent && !titles.is_empty() {
            classify_intents(&titles)
        } else {
            Vec::new()
        };

        let related_keywords = if options.related && !titles.is_empty() {
            self.related_keywords(keyword, &titles).await
        } else {
            Vec::new()
        };

        Ok(KeywordAnalysis {
            keyword: keyword.to_string(),
            docs,
            is_golden: rating.is_golden(),
            rating,
            competition,
            recency,
            intent,
            related_keywords,
        })
    }

    /// Merge mined title tokens with autocomplete suggestions, mined
    /// candidates first, deduplicated case-insensitively.
    async fn related_keywords(&self, keyword: &str, titles: &[&str]) -> Vec<String> {
        let mined = TitleMiner::new(keyword).mine(titles);
        let suggested = self
            .autocomplete
            .suggestions(keyword, DEFAULT_SUGGESTION_COUNT)
            .await;

        let mut related: KeywordSet = mined.into_iter().chain(suggested).collect();
        related.truncate(MAX_RELATED_KEYWORDS);
        related.into_vec()
    }
}
