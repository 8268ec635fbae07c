//! Client for the Naver blog and news search endpoints.
//!
//! All lookups go through one authenticated HTTP client. The public methods
//! never fail: a transport error, a non-success status, or a payload that
//! does not parse all degrade to the method's documented neutral value
//! (zero counts, an empty title list) with a warning in the log. Missing
//! credentials are caught before any request is sent.

use std::time::Duration;

use chrono::{Local, NaiveDateTime, NaiveTime};

use crate::config::Credentials;
use crate::error::{GoldpanError, Result};
use crate::provider::response::{
    BlogPost, NewsCounts, SearchItem, SearchResponse, parse_news_date, parse_post_date,
};

/// Production base URL for the search endpoints.
pub const DEFAULT_SEARCH_BASE_URL: &str = "https://openapi.naver.com/v1/search";

/// Upper bound the provider accepts for the `display` parameter.
pub const MAX_DISPLAY: usize = 100;

const CLIENT_ID_HEADER: &str = "X-Naver-Client-Id";
const CLIENT_SECRET_HEADER: &str = "X-Naver-Client-Secret";

/// Single-item count probes are cheap; give them a short deadline.
const COUNT_TIMEOUT: Duration = Duration::from_secs(5);
/// Full result pages can be slow on the provider side.
const PAGE_TIMEOUT: Duration = Duration::from_secs(10);

/// Authenticated client for the blog and news search endpoints.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    credentials: Credentials,
    base_url: String,
}

impl SearchClient {
    /// Create a client against the production endpoints.
    pub fn new(credentials: Credentials) -> Self {
        SearchClient {
            http: reqwest::Client::new(),
            credentials,
            base_url: DEFAULT_SEARCH_BASE_URL.to_string(),
        }
    }

    /// Override the base URL, mainly for tests against a local server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Whether both API credentials are present.
    pub fn is_configured(&self) -> bool {
        self.credentials.is_configured()
    }

    /// Total number of blog documents matching `keyword`, or 0 when the
    /// lookup fails.
    pub async fn document_count(&self, keyword: &str) -> u64 {
        match self.try_document_count(keyword).await {
            Ok(total) => total,
            Err(e) => {
                log::warn!("Document count lookup failed for '{}': {}", keyword, e);
                0
            }
        }
    }

    /// Up to `display` blog posts matching `keyword`, most relevant first.
    /// Returns an empty list when the lookup fails.
    pub async fn blog_titles(&self, keyword: &str, display: usize) -> Vec<BlogPost> {
        match self.try_blog_titles(keyword, display).await {
            Ok(posts) => posts,
            Err(e) => {
                log::warn!("Blog title lookup failed for '{}': {}", keyword, e);
                Vec::new()
            }
        }
    }

    /// Number of blog posts about `keyword` published in the last `days`
    /// days, out of the latest result page. Returns 0 when the lookup fails.
    pub async fn recent_blog_count(&self, keyword: &str, days: u32) -> u64 {
        match self.try_recent_blog_count(keyword, days).await {
            Ok(count) => count,
            Err(e) => {
                log::warn!("Recent blog lookup failed for '{}': {}", keyword, e);
                0
            }
        }
    }

    /// Total news coverage and the share published in the last `days` days.
    /// Returns zero counts when the lookup fails.
    pub async fn news_counts(&self, keyword: &str, days: u32) -> NewsCounts {
        match self.try_news_counts(keyword, days).await {
            Ok(counts) => counts,
            Err(e) => {
                log::warn!("News lookup failed for '{}': {}", keyword, e);
                NewsCounts::default()
            }
        }
    }

    async fn try_document_count(&self, keyword: &str) -> Result<u64> {
        let response = self
            .fetch("blog", &[("query", keyword), ("display", "1")], COUNT_TIMEOUT)
            .await?;
        log::debug!("'{}' matches {} blog documents", keyword, response.total);
        Ok(response.total)
    }

    async fn try_blog_titles(&self, keyword: &str, display: usize) -> Result<Vec<BlogPost>> {
        let display = display.min(MAX_DISPLAY).to_string();
        let response = self
            .fetch(
                "blog",
                &[("query", keyword), ("display", &display), ("sort", "sim")],
                PAGE_TIMEOUT,
            )
            .await?;
        Ok(response.items.into_iter().map(BlogPost::from).collect())
    }

    async fn try_recent_blog_count(&self, keyword: &str, days: u32) -> Result<u64> {
        let response = self
            .fetch(
                "blog",
                &[("query", keyword), ("display", "100"), ("sort", "date")],
                PAGE_TIMEOUT,
            )
            .await?;
        let cutoff = Local::now().naive_local() - chrono::Duration::days(i64::from(days));
        Ok(count_posts_since(&response.items, cutoff))
    }

    async fn try_news_counts(&self, keyword: &str, days: u32) -> Result<NewsCounts> {
        let response = self
            .fetch(
                "news",
                &[("query", keyword), ("display", "100"), ("sort", "date")],
                PAGE_TIMEOUT,
            )
            .await?;
        let cutoff = Local::now().naive_local() - chrono::Duration::days(i64::from(days));
        Ok(NewsCounts {
            total: response.total,
            recent: count_news_since(&response.items, cutoff),
        })
    }

    async fn fetch(
        &self,
        endpoint: &str,
        query: &[(&str, &str)],
        timeout: Duration,
    ) -> Result<SearchResponse> {
        if !self.credentials.is_configured() {
            return Err(GoldpanError::config("API credentials are not configured"));
        }

        let url = format!("{}/{}", self.base_url, endpoint);
        let response = self
            .http
            .get(&url)
            .header(CLIENT_ID_HEADER, &self.credentials.client_id)
            .header(CLIENT_SECRET_HEADER, &self.credentials.client_secret)
            .query(query)
            .timeout(timeout)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<SearchResponse>().await?)
    }
}

/// Count items whose post date, taken at midnight, falls on or after
/// `cutoff`. Items without a parseable date are excluded.
fn count_posts_since(items: &[SearchItem], cutoff: NaiveDateTime) -> u64 {
    items
        .iter()
        .filter_map(|item| parse_post_date(&item.postdate))
        .filter(|date| date.and_time(NaiveTime::MIN) >= cutoff)
        .count() as u64
}

/// Count items whose stated publish time falls on or after `cutoff`.
/// Items without a parseable date are excluded.
fn count_news_since(items: &[SearchItem], cutoff: NaiveDateTime) -> u64 {
    items
        .iter()
        .filter_map(|item| parse_news_date(&item.pub_date))
        .filter(|published| *published >= cutoff)
        .count() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn post_item(postdate: &str) -> SearchItem {
        SearchItem {
            postdate: postdate.to_string(),
            ..SearchItem::default()
        }
    }

    fn news_item(pub_date: &str) -> SearchItem {
        SearchItem {
            pub_date: pub_date.to_string(),
            ..SearchItem::default()
        }
    }

    fn cutoff(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_count_posts_since() {
        let items = vec![
            post_item("20260110"),
            post_item("20260105"),
            post_item("20251201"),
            post_item("garbage"),
            post_item(""),
        ];

        assert_eq!(count_posts_since(&items, cutoff(2026, 1, 1, 0)), 2);
        assert_eq!(count_posts_since(&items, cutoff(2025, 11, 1, 0)), 3);
        assert_eq!(count_posts_since(&items, cutoff(2026, 2, 1, 0)), 0);
    }

    #[test]
    fn test_count_posts_since_cutoff_includes_time_of_day() {
        // A post dated the cutoff day counts only against a midnight cutoff,
        // because the post itself is taken at midnight.
        let items = vec![post_item("20260110")];
        assert_eq!(count_posts_since(&items, cutoff(2026, 1, 10, 0)), 1);
        assert_eq!(count_posts_since(&items, cutoff(2026, 1, 10, 9)), 0);
    }

    #[test]
    fn test_count_news_since() {
        let items = vec![
            news_item("Tue, 27 Jan 2026 08:02:27 +0900"),
            news_item("Mon, 05 Jan 2026 23:59:59 +0900"),
            news_item("not a date"),
        ];

        assert_eq!(count_news_since(&items, cutoff(2026, 1, 20, 0)), 1);
        assert_eq!(count_news_since(&items, cutoff(2026, 1, 1, 0)), 2);
        assert_eq!(count_news_since(&items, cutoff(2026, 2, 1, 0)), 0);
    }

    #[test]
    fn test_with_base_url_overrides_default() {
        let client = SearchClient::new(Credentials::new("id", "secret"));
        assert_eq!(client.base_url, DEFAULT_SEARCH_BASE_URL);

        let client = client.with_base_url("http://127.0.0.1:9/v1/search");
        assert_eq!(client.base_url, "http://127.0.0.1:9/v1/search");
    }

    #[test]
    fn test_unconfigured_client() {
        let client = SearchClient::new(Credentials::default());
        assert!(!client.is_configured());

        let client = SearchClient::new(Credentials::new("id", "secret"));
        assert!(client.is_configured());
    }
}
