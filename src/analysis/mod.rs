//! Scoring heuristics and keyword extraction.
//!
//! Everything in this module is pure: the provider layer fetches counts and
//! titles, and these functions turn them into tiers, rankings, and candidate
//! keywords without doing any I/O of their own.

pub mod competition;
pub mod intent;
pub mod miner;
pub mod rating;
pub mod recency;

pub use competition::{COMPETITION_WINDOW_DAYS, CompetitionLevel, CompetitionReport};
pub use intent::{IntentCategory, TOP_INTENTS, classify_intents};
pub use miner::TitleMiner;
pub use rating::KeywordRating;
pub use recency::{NewsActivity, RECENCY_WINDOW_DAYS, RecencyReport};
