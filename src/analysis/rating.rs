//! Opportunity tiers derived from total document counts.
//!
//! The fewer blog documents already compete for a keyword, the easier it is
//! for a new post to rank. Counts map onto four tiers; the two lowest mark
//! the keyword as golden.
//!
//! # Examples
//!
//! ```
//! use goldpan::analysis::rating::KeywordRating;
//!
//! let rating = KeywordRating::from_doc_count(3_200);
//! assert_eq!(rating, KeywordRating::VeryGood);
//! assert!(rating.is_golden());
//! assert_eq!(rating.stars(), 3);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Upper bound (exclusive) of the top tier.
pub const VERY_GOOD_MAX_DOCS: u64 = 5_000;
/// Upper bound (exclusive) of the second tier, and the default golden line.
pub const GOOD_MAX_DOCS: u64 = 10_000;
/// Upper bound (exclusive) of the third tier.
pub const AVERAGE_MAX_DOCS: u64 = 20_000;

/// Opportunity tier for one keyword.
///
/// Serializes as the short Korean label used in saved reports; console
/// output uses the longer [`label`](KeywordRating::label) form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeywordRating {
    /// Fewer than 5,000 documents: low competition.
    #[serde(rename = "⭐⭐⭐ 매우 좋음")]
    VeryGood,
    /// Fewer than 10,000 documents: easy to enter.
    #[serde(rename = "⭐⭐ 좋음")]
    Good,
    /// Fewer than 20,000 documents: reasonable competition.
    #[serde(rename = "⭐ 보통")]
    Average,
    /// 20,000 documents or more: saturated.
    #[serde(rename = "경쟁 있음")]
    Crowded,
}

impl KeywordRating {
    /// Tier for a total blog document count.
    pub fn from_doc_count(docs: u64) -> Self {
        if docs < VERY_GOOD_MAX_DOCS {
            KeywordRating::VeryGood
        } else if docs < GOOD_MAX_DOCS {
            KeywordRating::Good
        } else if docs < AVERAGE_MAX_DOCS {
            KeywordRating::Average
        } else {
            KeywordRating::Crowded
        }
    }

    /// Star count shown in summaries, 3 down to 0.
    pub fn stars(&self) -> u8 {
        match self {
            KeywordRating::VeryGood => 3,
            KeywordRating::Good => 2,
            KeywordRating::Average => 1,
            KeywordRating::Crowded => 0,
        }
    }

    /// Whether this tier counts as a golden keyword.
    pub fn is_golden(&self) -> bool {
        matches!(self, KeywordRating::VeryGood | KeywordRating::Good)
    }

    /// Long console label, with the tier explanation in parentheses.
    pub fn label(&self) -> &'static str {
        match self {
            KeywordRating::VeryGood => "⭐⭐⭐ 매우 좋음 (저경쟁 블루오션)",
            KeywordRating::Good => "⭐⭐ 좋음 (진입 용이)",
            KeywordRating::Average => "⭐ 보통 (적정 경쟁)",
            KeywordRating::Crowded => "경쟁 있음 (레드오션)",
        }
    }

    /// Short label used in saved reports.
    pub fn short_label(&self) -> &'static str {
        match self {
            KeywordRating::VeryGood => "⭐⭐⭐ 매우 좋음",
            KeywordRating::Good => "⭐⭐ 좋음",
            KeywordRating::Average => "⭐ 보통",
            KeywordRating::Crowded => "경쟁 있음",
        }
    }
}

impl fmt::Display for KeywordRating {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}
