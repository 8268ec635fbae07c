//! Topicality tiers from recent news coverage.
//!
//! Fresh news coverage means search interest is spiking and a timely post
//! can catch it. The tiers work off the number of articles published in the
//! last week; unlike the other heuristics, more activity reads as a better
//! signal, not a worse one.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::provider::response::NewsCounts;

/// Window, in days, over which recent news is counted.
pub const RECENCY_WINDOW_DAYS: u32 = 7;

/// Lower bound (exclusive) of the hottest tier.
pub const HOT_MIN_RECENT: u64 = 10;
/// Lower bound (exclusive) of the active tier.
pub const ACTIVE_MIN_RECENT: u64 = 5;

/// News activity level for one keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NewsActivity {
    /// More than 10 articles in the window.
    #[serde(rename = "🔥 핫이슈 (신속히 작성!)")]
    Hot,
    /// More than 5 articles in the window.
    #[serde(rename = "📰 이슈 있음 (빠르게 작성)")]
    Active,
    /// At least one article in the window.
    #[serde(rename = "📝 약간의 뉴스 (심층 분석글)")]
    Minor,
    /// No articles in the window.
    #[serde(rename = "📄 이슈 없음 (심층 분석글 추천)")]
    Quiet,
}

impl NewsActivity {
    /// Tier for a count of articles published inside the window.
    pub fn from_recent_count(recent: u64) -> Self {
        if recent > HOT_MIN_RECENT {
            NewsActivity::Hot
        } else if recent > ACTIVE_MIN_RECENT {
            NewsActivity::Active
        } else if recent > 0 {
            NewsActivity::Minor
        } else {
            NewsActivity::Quiet
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NewsActivity::Hot => "🔥 핫이슈 (신속히 작성!)",
            NewsActivity::Active => "📰 이슈 있음 (빠르게 작성)",
            NewsActivity::Minor => "📝 약간의 뉴스 (심층 분석글)",
            NewsActivity::Quiet => "📄 이슈 없음 (심층 분석글 추천)",
        }
    }
}

impl fmt::Display for NewsActivity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Recency section of a keyword analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecencyReport {
    /// Total articles the provider reports for the keyword.
    #[serde(rename = "news_total")]
    pub total: u64,
    /// Articles published in the last [`RECENCY_WINDOW_DAYS`] days.
    #[serde(rename = "news_recent_7days")]
    pub recent: u64,
    #[serde(rename = "rating")]
    pub activity: NewsActivity,
}

impl RecencyReport {
    pub fn from_counts(counts: NewsCounts) -> Self {
        RecencyReport {
            total: counts.total,
            recent: counts.recent,
            activity: NewsActivity::from_recent_count(counts.recent),
        }
    }
}
