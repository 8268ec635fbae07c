//! Publishing-pressure tiers from recent post volume.
//!
//! Total document count says how much already ranks; the number of posts
//! published in the last month says how hard people are still writing. A
//! keyword can look attractive on totals and still be a bad bet when dozens
//! of fresh posts land every week.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Window, in days, over which recent posts are counted.
pub const COMPETITION_WINDOW_DAYS: u32 = 30;

/// Upper bound (exclusive) of the lowest pressure tier.
pub const VERY_LOW_MAX_RECENT: u64 = 10;
/// Upper bound (exclusive) of the second tier.
pub const LOW_MAX_RECENT: u64 = 30;
/// Upper bound (exclusive) of the third tier.
pub const MODERATE_MAX_RECENT: u64 = 50;

/// How actively the keyword is being written about right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompetitionLevel {
    /// Fewer than 10 posts in the window.
    #[serde(rename = "🟢 매우 낮음 (바로 진입!)")]
    VeryLow,
    /// Fewer than 30 posts in the window.
    #[serde(rename = "🟡 낮음 (진입 가능)")]
    Low,
    /// Fewer than 50 posts in the window.
    #[serde(rename = "🟠 보통 (세부 키워드 고려)")]
    Moderate,
    /// 50 or more posts in the window.
    #[serde(rename = "🔴 높음 (세부 키워드 필요)")]
    High,
}

impl CompetitionLevel {
    /// Tier for a count of posts published inside the window.
    pub fn from_recent_count(recent: u64) -> Self {
        if recent < VERY_LOW_MAX_RECENT {
            CompetitionLevel::VeryLow
        } else if recent < LOW_MAX_RECENT {
            CompetitionLevel::Low
        } else if recent < MODERATE_MAX_RECENT {
            CompetitionLevel::Moderate
        } else {
            CompetitionLevel::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CompetitionLevel::VeryLow => "🟢 매우 낮음 (바로 진입!)",
            CompetitionLevel::Low => "🟡 낮음 (진입 가능)",
            CompetitionLevel::Moderate => "🟠 보통 (세부 키워드 고려)",
            CompetitionLevel::High => "🔴 높음 (세부 키워드 필요)",
        }
    }
}

impl fmt::Display for CompetitionLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Competition section of a keyword analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitionReport {
    /// Posts published in the last [`COMPETITION_WINDOW_DAYS`] days.
    #[serde(rename = "recent_30days")]
    pub recent: u64,
    #[serde(rename = "rating")]
    pub level: CompetitionLevel,
}

impl CompetitionReport {
    pub fn from_recent_count(recent: u64) -> Self {
        CompetitionReport {
            recent,
            level: CompetitionLevel::from_recent_count(recent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(CompetitionLevel::from_recent_count(0), CompetitionLevel::VeryLow);
        assert_eq!(CompetitionLevel::from_recent_count(9), CompetitionLevel::VeryLow);
        assert_eq!(CompetitionLevel::from_recent_count(10), CompetitionLevel::Low);
        assert_eq!(CompetitionLevel::from_recent_count(29), CompetitionLevel::Low);
        assert_eq!(CompetitionLevel::from_recent_count(30), CompetitionLevel::Moderate);
        assert_eq!(CompetitionLevel::from_recent_count(49), CompetitionLevel::Moderate);
        assert_eq!(CompetitionLevel::from_recent_count(50), CompetitionLevel::High);
        assert_eq!(CompetitionLevel::from_recent_count(500), CompetitionLevel::High);
    }

    #[test]
    fn test_report_serialization() {
        let report = CompetitionReport::from_recent_count(7);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["recent_30days"], 7);
        assert_eq!(json["rating"], "🟢 매우 낮음 (바로 진입!)");
    }
}
