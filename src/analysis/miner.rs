//! Related-keyword extraction from blog titles.
//!
//! Titles ranking for a keyword tend to repeat the qualifiers searchers
//! actually type ("캠핑 의자", "캠핑 초보"). The miner splits titles on
//! punctuation and whitespace, drops stop words and the words of the base
//! keyword itself, and keeps tokens that recur across titles. Each kept
//! token is combined with the base keyword into a longer-tail candidate.
//!
//! # Examples
//!
//! ```
//! use goldpan::analysis::miner::TitleMiner;
//!
//! let miner = TitleMiner::new("캠핑");
//! let titles = vec![
//!     "캠핑 의자 추천",
//!     "초보 캠핑 의자 고르기",
//!     "캠핑 테이블과 의자 세트",
//! ];
//! assert_eq!(miner.mine(&titles), vec!["캠핑 의자".to_string()]);
//! ```

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;

/// Tokens shorter than this many characters are noise.
pub const MIN_TOKEN_CHARS: usize = 2;
/// A token must appear in at least this many places to be kept.
pub const MIN_TOKEN_COUNT: usize = 2;
/// Frequency ranking considers at most this many distinct tokens.
pub const CANDIDATE_POOL_SIZE: usize = 30;
/// At most this many combined keywords come out of one mining pass.
pub const MAX_COMBINED_KEYWORDS: usize = 15;

/// Particles, fillers, and function words that never make a useful
/// keyword qualifier. English function words are matched as written, so
/// they only apply to lowercase tokens.
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "의", "가", "이", "은", "들", "는", "좀", "잘", "걍", "과", "도", "를", "으로",
        "자", "에", "와", "한", "하다", "및", "그", "저", "것", "수", "등", "더", "위",
        "중", "로", "만", "있다", "없다", "하는", "되는", "the", "a", "an", "is", "are",
        "was", "were", "be", "been", "being", "have", "has", "had", "있는", "없는",
        "하고", "되고", "된", "할", "될", "인", "적", "다음", "에서", "까지", "부터",
        "으로서",
    ]
    .into_iter()
    .collect()
});

/// Delimiters used when tokenizing the base keyword.
static BASE_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,\s·|:\-\[\]()]+").expect("valid split pattern"));

/// Title tokenization additionally splits on CJK quote brackets.
static TITLE_SPLIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,\s·|:\-\[\]()「」『』【】]+").expect("valid split pattern"));

/// Extracts recurring qualifier tokens from titles and combines them with
/// a base keyword.
#[derive(Debug, Clone)]
pub struct TitleMiner {
    base_keyword: String,
    /// Lowercased words of the base keyword, excluded from extraction.
    base_tokens: HashSet<String>,
}

impl TitleMiner {
    pub fn new(base_keyword: impl Into<String>) -> Self {
        let base_keyword = base_keyword.into();
        let base_tokens = BASE_SPLIT
            .split(&base_keyword.to_lowercase())
            .map(str::trim)
            .filter(|word| word.chars().count() >= MIN_TOKEN_CHARS)
            .map(str::to_string)
            .collect();
        TitleMiner {
            base_keyword,
            base_tokens,
        }
    }

    pub fn base_keyword(&self) -> &str {
        &self.base_keyword
    }

    /// Mine `titles` for recurring qualifier tokens.
    ///
    /// Returns `"{base} {token}"` combinations, most frequent token first;
    /// tokens tied on frequency keep their first appearance order.
    pub fn mine<S: AsRef<str>>(&self, titles: &[S]) -> Vec<String> {
        // Counts in first-appearance order so the frequency sort can stay
        // stable across ties.
        let mut counts: Vec<(String, usize)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for title in titles {
            let cleaned = title.as_ref().replace(&self.base_keyword, "");
            for token in TITLE_SPLIT.split(&cleaned) {
                let token = token.trim();
                if !self.is_candidate(token) {
                    continue;
                }
                match index.get(token) {
                    Some(&at) => counts[at].1 += 1,
                    None => {
                        index.insert(token.to_string(), counts.len());
                        counts.push((token.to_string(), 1));
                    }
                }
            }
        }

        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts.truncate(CANDIDATE_POOL_SIZE);

        counts
            .into_iter()
            .filter(|(_, count)| *count >= MIN_TOKEN_COUNT)
            .take(MAX_COMBINED_KEYWORDS)
            .map(|(token, _)| format!("{} {}", self.base_keyword, token))
            .collect()
    }

    fn is_candidate(&self, token: &str) -> bool {
        token.chars().count() >= MIN_TOKEN_CHARS
            && !STOP_WORDS.contains(token)
            && !self.base_tokens.contains(&token.to_lowercase())
    }
}
