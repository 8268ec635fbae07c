//! Client for the Naver autocomplete endpoint.
//!
//! Autocomplete is an unauthenticated browser endpoint rather than part of
//! the developer API, so the client sends a browser user agent and takes no
//! credentials. Like the search client, the public method never fails; a
//! broken lookup yields an empty suggestion list with a warning in the log.

use std::time::Duration;

use crate::error::Result;
use crate::provider::response::SuggestResponse;

/// Production URL of the autocomplete endpoint.
pub const DEFAULT_SUGGEST_BASE_URL: &str = "https://ac.search.naver.com/nx/ac";

/// Default number of suggestions to keep per keyword.
pub const DEFAULT_SUGGESTION_COUNT: usize = 10;

const SUGGEST_TIMEOUT: Duration = Duration::from_secs(5);

/// The endpoint only answers requests that look like a browser.
const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Fixed endpoint parameters; only the query term varies per request.
const SUGGEST_PARAMS: [(&str, &str); 10] = [
    ("con", "1"),
    ("frm", "nv"),
    ("ans", "2"),
    ("r_format", "json"),
    ("r_enc", "UTF-8"),
    ("r_unicode", "0"),
    ("t_koreng", "1"),
    ("run", "2"),
    ("rev", "4"),
    ("q_enc", "UTF-8"),
];

/// Client for search-box keyword suggestions.
#[derive(Debug, Clone)]
pub struct AutocompleteClient {
    http: reqwest::Client,
    base_url: String,
}

impl AutocompleteClient {
    /// Create a client against the production endpoint.
    pub fn new() -> Self {
        AutocompleteClient {
            http: reqwest::Client::new(),
            base_url: DEFAULT_SUGGEST_BASE_URL.to_string(),
        }
    }

    /// Override the base URL, mainly for tests against a local server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Up to `max_count` search-box suggestions for `keyword`, in provider
    /// order. Returns an empty list when the lookup fails.
    pub async fn suggestions(&self, keyword: &str, max_count: usize) -> Vec<String> {
        match self.try_suggestions(keyword, max_count).await {
            Ok(suggestions) => suggestions,
            Err(e) => {
                log::warn!("Autocomplete lookup failed for '{}': {}", keyword, e);
                Vec::new()
            }
        }
    }

    async fn try_suggestions(&self, keyword: &str, max_count: usize) -> Result<Vec<String>> {
        let response = self
            .http
            .get(&self.base_url)
            .header(reqwest::header::USER_AGENT, BROWSER_USER_AGENT)
            .query(&[("q", keyword)])
            .query(&SUGGEST_PARAMS)
            .timeout(SUGGEST_TIMEOUT)
            .send()
            .await?
            .error_for_status()?
            .json::<SuggestResponse>()
            .await?;

        let mut suggestions = response.into_suggestions();
        suggestions.truncate(max_count);
        log::debug!("'{}' has {} autocomplete suggestions", keyword, suggestions.len());
        Ok(suggestions)
    }
}

impl Default for AutocompleteClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_base_url_overrides_default() {
        let client = AutocompleteClient::new();
        assert_eq!(client.base_url, DEFAULT_SUGGEST_BASE_URL);

        let client = client.with_base_url("http://127.0.0.1:9/ac");
        assert_eq!(client.base_url, "http://127.0.0.1:9/ac");
    }
}
