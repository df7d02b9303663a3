use std::time::Duration;

use crate::error::RedditError;
use crate::types::{parse_listing, RedditPost};

const DEFAULT_BASE_URL: &str = "https://www.reddit.com";

/// Search window and ordering are fixed: pain points go stale fast, so only
/// the past 24 hours are searched, in upstream relevance order.
const SEARCH_TIME_WINDOW: &str = "day";
const SEARCH_SORT: &str = "relevance";

const ERROR_BODY_LIMIT: usize = 200;

/// Client for the public Reddit JSON API.
///
/// Manages the HTTP client, client-identifier header, and base URL. Use
/// [`RedditClient::new`] for production or [`RedditClient::with_base_url`]
/// to point at a mock server in tests. Proxy configuration is picked up
/// from the environment by the underlying transport.
pub struct RedditClient {
    client: reqwest::Client,
    base_url: String,
}

impl RedditClient {
    /// Creates a new client pointed at the production Reddit API.
    ///
    /// # Errors
    ///
    /// Returns [`RedditError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(user_agent: &str, timeout_secs: u64) -> Result<Self, RedditError> {
        Self::with_base_url(user_agent, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`RedditError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_base_url(
        user_agent: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, RedditError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Searches Reddit posts from the past 24 hours, in relevance order.
    ///
    /// `keyword` is passed through verbatim, including any quoting syntax
    /// meaningful to Reddit search. `limit` bounds the raw fetch size, not
    /// any downstream filtering.
    ///
    /// # Errors
    ///
    /// Returns [`RedditError::Upstream`] on a non-success HTTP status
    /// (carrying the status and a truncated response body) and
    /// [`RedditError::Http`] on transport failure. An unexpected response
    /// shape yields an empty vector, not an error.
    pub async fn search(&self, keyword: &str, limit: usize) -> Result<Vec<RedditPost>, RedditError> {
        let url = format!("{}/search.json", self.base_url);
        tracing::debug!(keyword, limit, "searching Reddit");

        let params: Vec<(&str, String)> = vec![
            ("q", keyword.to_string()),
            ("t", SEARCH_TIME_WINDOW.to_string()),
            ("limit", limit.to_string()),
            ("sort", SEARCH_SORT.to_string()),
        ];

        let response = self.client.get(&url).query(&params).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RedditError::Upstream {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let value: serde_json::Value = response.json().await?;
        Ok(parse_listing(value))
    }

    /// Fetches the comment listing for a post by its relative permalink.
    ///
    /// The thread-detail payload is a two-element array whose second
    /// element is the comment listing; fewer elements or a malformed
    /// listing yield an empty vector. Comment enrichment is best-effort —
    /// callers are expected to degrade any error here rather than fail.
    ///
    /// # Errors
    ///
    /// Returns [`RedditError::Upstream`] on a non-success HTTP status and
    /// [`RedditError::Http`] on transport or body-decode failure.
    pub async fn fetch_thread(&self, permalink: &str) -> Result<Vec<RedditPost>, RedditError> {
        let url = format!("{}{}.json", self.base_url, permalink);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RedditError::Upstream {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let value: serde_json::Value = response.json().await?;
        let comments = match value {
            serde_json::Value::Array(mut elements) if elements.len() >= 2 => {
                parse_listing(elements.swap_remove(1))
            }
            _ => {
                tracing::warn!(permalink, "thread payload is not a two-element array");
                Vec::new()
            }
        };
        Ok(comments)
    }
}

/// Cap diagnostic bodies so error messages stay loggable.
fn truncate_body(body: &str) -> String {
    body.chars().take(ERROR_BODY_LIMIT).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_body_caps_long_bodies() {
        let long = "x".repeat(500);
        assert_eq!(truncate_body(&long).len(), ERROR_BODY_LIMIT);
    }

    #[test]
    fn truncate_body_keeps_short_bodies() {
        assert_eq!(truncate_body("oops"), "oops");
    }

    #[test]
    fn with_base_url_strips_trailing_slash() {
        let client = RedditClient::with_base_url("test-agent/1.0", 30, "http://localhost:9999/")
            .expect("client construction should not fail");
        assert_eq!(client.base_url, "http://localhost:9999");
    }
}
