//! # Goldpan
//!
//! Golden-keyword discovery for Naver blog SEO.
//!
//! Goldpan expands a small set of seed keywords into a ranked corpus of
//! candidates by mining blog search titles and autocomplete suggestions,
//! then rates every candidate by how hard it is to compete for.
//!
//! ## Features
//!
//! - Seed expansion from blog-title mining and autocomplete suggestions
//! - Document-count ratings with golden-keyword detection
//! - Competition, news-recency, and search-intent heuristics
//! - Sequential, rate-limited provider access with injectable pacing
//! - JSON report output for downstream tooling

pub mod analysis;
pub mod analyzer;
pub mod cli;
pub mod collector;
pub mod config;
pub mod error;
pub mod keyword;
pub mod provider;
pub mod report;
pub mod throttle;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
