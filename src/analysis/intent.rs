//! Search-intent classification over blog titles.
//!
//! Each intent category owns a fixed set of marker substrings. Scoring is
//! purely lexical: all titles are joined into one lowercased text and every
//! non-overlapping occurrence of a marker counts toward its category. The
//! top categories tell a writer which angle the audience is searching from,
//! e.g. whether "수원 갈비" readers want restaurant reviews or recipes.
//!
//! # Examples
//!
//! ```
//! use goldpan::analysis::intent::{IntentCategory, classify_intents};
//!
//! let titles = vec![
//!     "캠핑 의자 추천 BEST 5".to_string(),
//!     "캠핑 의자 솔직 후기".to_string(),
//!     "초보 캠핑 장비 추천".to_string(),
//! ];
//! let ranked = classify_intents(&titles);
//! assert_eq!(ranked[0], (IntentCategory::Recommendation, 3));
//! assert_eq!(ranked[1], (IntentCategory::Review, 2));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// How many top categories a classification reports.
pub const TOP_INTENTS: usize = 3;

/// What a searcher is after, judged from title wording.
///
/// Serializes as the Korean category name used in reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IntentCategory {
    /// Who someone is: profile, age, career.
    #[serde(rename = "정보/프로필")]
    Profile,
    /// First-hand usage and visit reviews.
    #[serde(rename = "후기/리뷰")]
    Review,
    /// Instructions, setup, tips.
    #[serde(rename = "방법/가이드")]
    HowTo,
    /// Picks, rankings, comparisons.
    #[serde(rename = "추천/비교")]
    Recommendation,
    /// Breaking events and coverage.
    #[serde(rename = "뉴스/이슈")]
    News,
    /// Prices, discounts, cost questions.
    #[serde(rename = "가격/비용")]
    Price,
    /// Places to eat and itineraries.
    #[serde(rename = "여행/맛집")]
    Travel,
    /// Plot, endings, interpretation.
    #[serde(rename = "감상/분석")]
    Commentary,
}

impl IntentCategory {
    /// Every category, in ranking tie-break order.
    pub const ALL: [IntentCategory; 8] = [
        IntentCategory::Profile,
        IntentCategory::Review,
        IntentCategory::HowTo,
        IntentCategory::Recommendation,
        IntentCategory::News,
        IntentCategory::Price,
        IntentCategory::Travel,
        IntentCategory::Commentary,
    ];

    /// Korean display name, identical to the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            IntentCategory::Profile => "정보/프로필",
            IntentCategory::Review => "후기/리뷰",
            IntentCategory::HowTo => "방법/가이드",
            IntentCategory::Recommendation => "추천/비교",
            IntentCategory::News => "뉴스/이슈",
            IntentCategory::Price => "가격/비용",
            IntentCategory::Travel => "여행/맛집",
            IntentCategory::Commentary => "감상/분석",
        }
    }

    /// Marker substrings counted for this category. English markers are
    /// lowercase; matching happens against lowercased text.
    pub fn markers(&self) -> &'static [&'static str] {
        match self {
            IntentCategory::Profile => {
                &["프로필", "누구", "나이", "학력", "약력", "경력", "인물"]
            }
            IntentCategory::Review => {
                &["후기", "리뷰", "솔직", "실제", "사용", "체험", "방문"]
            }
            IntentCategory::HowTo => {
                &["방법", "하는법", "만들기", "설치", "사용법", "가이드", "팁"]
            }
            IntentCategory::Recommendation => {
                &["추천", "비교", "순위", "best", "top", "베스트", "인기"]
            }
            IntentCategory::News => {
                &["라며", "사건", "뉴스", "속보", "발표", "결정", "판결"]
            }
            IntentCategory::Price => {
                &["가격", "비용", "얼마", "할인", "세일", "무료", "유료"]
            }
            IntentCategory::Travel => {
                &["맛집", "여행", "코스", "일정", "예약", "관광", "포인"]
            }
            IntentCategory::Commentary => {
                &["줄거리", "결말", "해석", "분석", "정리", "요약", "스포"]
            }
        }
    }
}

impl fmt::Display for IntentCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rank intent categories over a set of titles.
///
/// Returns up to [`TOP_INTENTS`] categories with a nonzero marker count,
/// highest count first. Ties keep the [`IntentCategory::ALL`] order.
pub fn classify_intents<S: AsRef<str>>(titles: &[S]) -> Vec<(IntentCategory, u64)> {
    let text = titles
        .iter()
        .map(|t| t.as_ref())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    let mut scores: Vec<(IntentCategory, u64)> = IntentCategory::ALL
        .iter()
        .map(|&category| {
            let count = category
                .markers()
                .iter()
                .map(|marker| text.matches(marker).count() as u64)
                .sum();
            (category, count)
        })
        .filter(|(_, count)| *count > 0)
        .collect();

    scores.sort_by(|a, b| b.1.cmp(&a.1));
    scores.truncate(TOP_INTENTS);
    scores
}
