//! Bulk keyword collection: expand seeds, then rate everything found.
//!
//! Collection runs in two phases. The expansion phase visits each seed
//! once, mining its top-ranking titles and pulling its autocomplete
//! suggestions into one deduplicated candidate list. The analysis phase
//! then looks up the document count for every candidate, up to the
//! configured quota, and summarizes each into a [`KeywordSummary`].
//!
//! Results come back sorted by ascending document count, so the easiest
//! targets are first. A keyword counts as golden when its document count
//! is at or below the configured threshold.

use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::miner::TitleMiner;
use crate::analysis::rating::KeywordRating;
use crate::analyzer::TITLE_SAMPLE_SIZE;
use crate::error::{GoldpanError, Result};
use crate::keyword::{KeywordSet, normalize};
use crate::provider::{AutocompleteClient, DEFAULT_SUGGESTION_COUNT, SearchClient};
use crate::throttle::{FixedPacer, Pacer};

/// Default cap on how many candidates get analyzed.
pub const DEFAULT_MAX_KEYWORDS: usize = 100;

/// Default document-count threshold at or below which a candidate is
/// considered golden.
pub const DEFAULT_GOLDEN_THRESHOLD: u64 = 10_000;

/// Tuning knobs for a collection run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectOptions {
    /// Analyze at most this many candidates.
    pub max_keywords: usize,
    /// Golden cutoff, inclusive, on total document count.
    pub golden_threshold: u64,
}

impl Default for CollectOptions {
    fn default() -> Self {
        CollectOptions {
            max_keywords: DEFAULT_MAX_KEYWORDS,
            golden_threshold: DEFAULT_GOLDEN_THRESHOLD,
        }
    }
}

/// One analyzed candidate in a collection result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSummary {
    pub keyword: String,
    /// Total blog documents competing for the keyword.
    pub docs: u64,
    pub is_golden: bool,
    pub rating: KeywordRating,
}

/// Working state of the expansion phase.
struct ExpansionState {
    /// Seeds still waiting to be expanded.
    frontier: VecDeque<String>,
    /// Normalized forms already expanded.
    visited: HashSet<String>,
    /// Everything found so far, seeds included, in discovery order.
    discovered: KeywordSet,
}

impl ExpansionState {
    fn new(seeds: &[String]) -> Self {
        let mut discovered = KeywordSet::new();
        for seed in seeds {
            discovered.insert(seed);
        }
        ExpansionState {
            frontier: seeds.iter().cloned().collect(),
            visited: HashSet::new(),
            discovered,
        }
    }
}

/// Runs the expand-then-rate collection pipeline.
pub struct KeywordCollector {
    search: SearchClient,
    autocomplete: AutocompleteClient,
    pacer: Arc<dyn Pacer>,
}

impl KeywordCollector {
    /// Create a collector with the default request pacing.
    pub fn new(search: SearchClient, autocomplete: AutocompleteClient) -> Self {
        KeywordCollector {
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

    /// Expand `seeds` into related candidates and rate them all.
    ///
    /// Fails only when API credentials are missing. Returns summaries
    /// sorted by ascending document count.
    pub async fn collect(
        &self,
        seeds: &[String],
        options: &CollectOptions,
    ) -> Result<Vec<KeywordSummary>> {
        if !self.is_configured() {
            return Err(GoldpanError::config(
                "API credentials are not configured; run with --client-id/--client-secret \
                 or add them to the config file",
            ));
        }

        log::info!("Expanding from {} seed keywords", seeds.len());
        let mut state = ExpansionState::new(seeds);
        self.expand(&mut state).await;

        log::info!(
            "Discovered {} keywords, analyzing up to {}",
            state.discovered.len(),
            options.max_keywords
        );

        let seed_keys: HashSet<String> = seeds.iter().map(|s| normalize(s)).collect();
        let mut candidates = state.discovered;
        candidates.truncate(options.max_keywords);
        let total = candidates.len();

        let mut summaries = Vec::with_capacity(total);
        let mut analyzed_any = false;
        for (index, keyword) in candidates.iter().enumerate() {
            let key = normalize(keyword);
            if state.visited.contains(&key) && !seed_keys.contains(&key) {
                continue;
            }

            if analyzed_any {
                self.pacer.request_pause().await;
            }
            analyzed_any = true;

            log::info!("[{}/{}] Analyzing '{}'", index + 1, total, keyword);
            let docs = self.search.document_count(keyword).await;
            summaries.push(KeywordSummary {
                keyword: keyword.to_string(),
                docs,
                is_golden: docs <= options.golden_threshold,
                rating: KeywordRating::from_doc_count(docs),
            });
        }

        summaries.sort_by_key(|summary| summary.docs);

        let golden = summaries.iter().filter(|s| s.is_golden).count();
        log::info!("Analyzed {} keywords, {} golden", summaries.len(), golden);

        Ok(summaries)
    }

    /// Visit every frontier seed once, merging mined and suggested
    /// candidates into the discovered set.
    async fn expand(&self, state: &mut ExpansionState) {
        let mut expanded_any = false;
        while let Some(seed) = state.frontier.pop_front() {
            let key = normalize(&seed);
            if key.is_empty() || state.visited.contains(&key) {
                continue;
            }
            state.visited.insert(key);

            if expanded_any {
                self.pacer.round_pause().await;
            }
            expanded_any = true;

            log::info!("Expanding '{}'", seed);
            let posts = self.search.blog_titles(&seed, TITLE_SAMPLE_SIZE).await;
            if !posts.is_empty() {
                let titles: Vec<&str> = posts.iter().map(|post| post.title.as_str()).collect();
                for candidate in TitleMiner::new(seed.as_str()).mine(&titles) {
                    state.discovered.insert(&candidate);
                }
            }

            for suggestion in self
                .autocomplete
                .suggestions(&seed, DEFAULT_SUGGESTION_COUNT)
                .await
            {
                state.discovered.insert(&suggestion);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = CollectOptions::default();
        assert_eq!(options.max_keywords, DEFAULT_MAX_KEYWORDS);
        assert_eq!(options.golden_threshold, DEFAULT_GOLDEN_THRESHOLD);
    }

    #[test]
    fn test_expansion_state_dedups_seeds() {
        let seeds = vec![
            "캠핑".to_string(),
            "캠핑 ".to_string(),
            "글램핑".to_string(),
        ];
        let state = ExpansionState::new(&seeds);

        // Duplicate seeds stay in the frontier but collapse in discovery.
        assert_eq!(state.frontier.len(), 3);
        assert_eq!(state.discovered.len(), 2);
        assert!(state.visited.is_empty());
    }

    #[test]
    fn test_summary_serialization_uses_short_rating() {
        let summary = KeywordSummary {
            keyword: "캠핑 의자".to_string(),
            docs: 8_000,
            is_golden: true,
            rating: KeywordRating::Good,
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["keyword"], "캠핑 의자");
        assert_eq!(json["docs"], 8_000);
        assert_eq!(json["is_golden"], true);
        assert_eq!(json["rating"], "⭐⭐ 좋음");

        let back: KeywordSummary = serde_json::from_value(json).unwrap();
        assert_eq!(back, summary);
    }
}
