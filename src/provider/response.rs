//! Typed payloads for the provider endpoints.
//!
//! The Naver search endpoints return loosely structured JSON; everything is
//! validated and converted into typed records right here at the client
//! boundary. A payload that does not match the expected shape is treated
//! the same as a transport failure: the caller falls back to its documented
//! default instead of letting a half-parsed value travel into the analysis
//! pipeline.
//!
//! Date handling follows the provider's two formats: blog posts carry a
//! compact `YYYYMMDD` post date, news items an RFC-822 style `pubDate`.
//! Dates that fail to parse are silently dropped (they are neither recent
//! nor an error).

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One blog search hit, converted from the wire item.
///
/// Titles and descriptions have the provider's `<b>`/`</b>` emphasis markup
/// already stripped; `posted` holds the publish date when it parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    /// Post title, markup stripped.
    pub title: String,
    /// Blog (author) name.
    pub blogger: String,
    /// Publish date, when the provider's `YYYYMMDD` value parsed.
    pub posted: Option<NaiveDate>,
    /// Permalink.
    pub link: String,
    /// Snippet, markup stripped.
    pub description: String,
}

/// News coverage counts for one keyword.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsCounts {
    /// Total matching articles the provider reports.
    pub total: u64,
    /// Articles published inside the recency window.
    pub recent: u64,
}

/// Wire shape shared by the blog and news search endpoints.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchResponse {
    #[serde(default)]
    pub(crate) total: u64,
    #[serde(default)]
    pub(crate) items: Vec<SearchItem>,
}

/// One wire item from either search endpoint. Fields not present in the
/// payload default to empty.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchItem {
    #[serde(default)]
    pub(crate) title: String,
    #[serde(default, rename = "bloggername")]
    pub(crate) blogger_name: String,
    #[serde(default)]
    pub(crate) postdate: String,
    #[serde(default, rename = "pubDate")]
    pub(crate) pub_date: String,
    #[serde(default)]
    pub(crate) link: String,
    #[serde(default)]
    pub(crate) description: String,
}

impl From<SearchItem> for BlogPost {
    fn from(item: SearchItem) -> Self {
        BlogPost {
            title: strip_emphasis(&item.title),
            blogger: item.blogger_name,
            posted: parse_post_date(&item.postdate),
            link: item.link,
            description: strip_emphasis(&item.description),
        }
    }
}

/// Wire shape of the autocomplete endpoint: a nested array structure where
/// the first inner array holds one-element suggestion entries.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct SuggestResponse {
    #[serde(default)]
    pub(crate) items: Vec<Vec<Vec<serde_json::Value>>>,
}

impl SuggestResponse {
    /// Extract suggestions in provider order: `items[0][*][0]`, keeping
    /// only string entries.
    pub(crate) fn into_suggestions(self) -> Vec<String> {
        let Some(group) = self.items.into_iter().next() else {
            return Vec::new();
        };
        group
            .into_iter()
            .filter_map(|entry| {
                entry
                    .into_iter()
                    .next()
                    .and_then(|v| v.as_str().map(str::to_string))
            })
            .collect()
    }
}

/// Remove the provider's inline emphasis markup (`<b>`, `</b>`).
pub fn strip_emphasis(text: &str) -> String {
    text.replace("<b>", "").replace("</b>", "")
}

/// Parse the blog endpoint's compact `YYYYMMDD` post date.
///
/// Anything that is not exactly eight characters of valid date is `None`.
pub fn parse_post_date(value: &str) -> Option<NaiveDate> {
    if value.len() != 8 {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y%m%d").ok()
}

/// Parse the news endpoint's RFC-822 style `pubDate` into the wall-clock
/// time it states, with the offset dropped.
pub fn parse_news_date(value: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_rfc2822(value)
        .ok()
        .map(|dt| dt.naive_local())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_emphasis() {
        assert_eq!(strip_emphasis("<b>독서모임</b> 후기"), "독서모임 후기");
        assert_eq!(strip_emphasis("no markup"), "no markup");
        assert_eq!(strip_emphasis("<b><b>double</b></b>"), "double");
    }

    #[test]
    fn test_parse_post_date() {
        assert_eq!(
            parse_post_date("20260812"),
            NaiveDate::from_ymd_opt(2026, 8, 12)
        );
        assert_eq!(parse_post_date("2026081"), None);
        assert_eq!(parse_post_date("202608123"), None);
        assert_eq!(parse_post_date("2026081x"), None);
        assert_eq!(parse_post_date(""), None);
    }

    #[test]
    fn test_parse_news_date_keeps_stated_wall_clock() {
        let parsed = parse_news_date("Tue, 27 Jan 2026 08:02:27 +0900").unwrap();
        assert_eq!(parsed.format("%Y-%m-%d %H:%M:%S").to_string(), "2026-01-27 08:02:27");

        assert_eq!(parse_news_date("not a date"), None);
        assert_eq!(parse_news_date(""), None);
    }

    #[test]
    fn test_blog_post_conversion() {
        let item = SearchItem {
            title: "<b>캠핑</b> 장비 정리".to_string(),
            blogger_name: "camper".to_string(),
            postdate: "20260501".to_string(),
            pub_date: String::new(),
            link: "https://blog.example/1".to_string(),
            description: "<b>캠핑</b> 후기".to_string(),
        };

        let post = BlogPost::from(item);
        assert_eq!(post.title, "캠핑 장비 정리");
        assert_eq!(post.blogger, "camper");
        assert_eq!(post.posted, NaiveDate::from_ymd_opt(2026, 5, 1));
        assert_eq!(post.description, "캠핑 후기");
    }

    #[test]
    fn test_search_response_tolerates_missing_fields() {
        let response: SearchResponse = serde_json::from_str(r#"{"total": 42}"#).unwrap();
        assert_eq!(response.total, 42);
        assert!(response.items.is_empty());

        let response: SearchResponse =
            serde_json::from_str(r#"{"items": [{"title": "only title"}]}"#).unwrap();
        assert_eq!(response.total, 0);
        assert_eq!(response.items[0].title, "only title");
        assert!(response.items[0].postdate.is_empty());
    }

    #[test]
    fn test_suggest_extraction_takes_first_elements() {
        let response: SuggestResponse = serde_json::from_str(
            r#"{"items": [[["독서모임 추천"], ["독서모임 후기", 3]], [["ignored second group"]]]}"#,
        )
        .unwrap();
        assert_eq!(
            response.into_suggestions(),
            vec!["독서모임 추천".to_string(), "독서모임 후기".to_string()]
        );
    }

    #[test]
    fn test_suggest_extraction_handles_odd_shapes() {
        let empty: SuggestResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(empty.into_suggestions().is_empty());

        let no_groups: SuggestResponse = serde_json::from_str(r#"{"items": []}"#).unwrap();
        assert!(no_groups.into_suggestions().is_empty());

        // A non-string first element is skipped rather than stringified.
        let mixed: SuggestResponse =
            serde_json::from_str(r#"{"items": [[[7], ["ok"]]]}"#).unwrap();
        assert_eq!(mixed.into_suggestions(), vec!["ok".to_string()]);
    }
}
