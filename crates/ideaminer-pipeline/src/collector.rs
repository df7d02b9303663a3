use futures::future;

use ideaminer_reddit::{RedditClient, RedditPost};

use crate::error::CollectError;
use crate::types::CollectedItem;

/// Raw-fetch ceiling for the search call; deliberately larger than any
/// caller-facing result limit so filtering has headroom.
const RAW_FETCH_LIMIT: usize = 50;

/// At most this many top-level replies feed the comments summary.
const MAX_SUMMARY_COMMENTS: usize = 10;

const COMMENT_SEPARATOR: &str = "\n---\n";
const NO_COMMENTS_PLACEHOLDER: &str = "No comments found.";
const FETCH_FAILED_PLACEHOLDER: &str = "Could not fetch comments.";

const REMOVED_SENTINEL: &str = "[removed]";
const DELETED_SENTINEL: &str = "[deleted]";

/// Search-and-collect stage: query, filter, truncate, and enrich each
/// surviving post with a summary of its comment thread.
pub struct Collector {
    reddit: RedditClient,
}

impl Collector {
    #[must_use]
    pub fn new(reddit: RedditClient) -> Self {
        Self { reddit }
    }

    /// Collects up to `limit` posts matching `keyword` from the past 24
    /// hours, each with at least `min_ups` upvotes and usable body text.
    ///
    /// Thread fetches for the retained posts are issued all at once and
    /// joined; a single thread's failure degrades that one item to a
    /// placeholder summary and never affects the others. Upstream order is
    /// preserved throughout — no re-ranking.
    ///
    /// # Errors
    ///
    /// Returns [`CollectError::Search`] when the search call itself fails;
    /// that is the only fatal path in this stage.
    pub async fn collect(
        &self,
        keyword: &str,
        min_ups: i64,
        limit: usize,
    ) -> Result<Vec<CollectedItem>, CollectError> {
        let posts = self.reddit.search(keyword, RAW_FETCH_LIMIT).await?;
        let raw_count = posts.len();

        let accepted: Vec<RedditPost> = posts
            .into_iter()
            .filter(|post| accepts(post, min_ups))
            .take(limit)
            .collect();

        tracing::debug!(
            keyword,
            raw = raw_count,
            accepted = accepted.len(),
            "filtered search results"
        );

        let fetches = accepted
            .iter()
            .map(|post| self.reddit.fetch_thread(&post.permalink));
        let threads = future::join_all(fetches).await;

        let items = accepted
            .into_iter()
            .zip(threads)
            .map(|(post, thread)| {
                let comments_summary = match thread {
                    Ok(comments) => summarize_comments(&comments),
                    Err(e) => {
                        tracing::warn!(
                            permalink = %post.permalink,
                            error = %e,
                            "comment fetch failed, substituting placeholder"
                        );
                        FETCH_FAILED_PLACEHOLDER.to_string()
                    }
                };
                CollectedItem {
                    post,
                    comments_summary,
                }
            })
            .collect();

        Ok(items)
    }
}

/// Acceptance predicate: enough upvotes and body text that is neither
/// empty nor a moderation sentinel. Rejected posts are dropped silently.
fn accepts(post: &RedditPost, min_ups: i64) -> bool {
    post.ups >= min_ups && is_usable_body(&post.body)
}

fn is_usable_body(body: &str) -> bool {
    !body.is_empty() && body != REMOVED_SENTINEL && body != DELETED_SENTINEL
}

/// Reduce a comment listing to the summary string: first 10 comments,
/// sentinel/empty bodies dropped, survivors joined with a separator.
fn summarize_comments(comments: &[RedditPost]) -> String {
    let joined = comments
        .iter()
        .take(MAX_SUMMARY_COMMENTS)
        .map(|comment| comment.body.as_str())
        .filter(|body| is_usable_body(body))
        .collect::<Vec<_>>()
        .join(COMMENT_SEPARATOR);

    if joined.is_empty() {
        NO_COMMENTS_PLACEHOLDER.to_string()
    } else {
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_with(ups: i64, body: &str) -> RedditPost {
        RedditPost {
            id: "x".to_string(),
            title: "a title".to_string(),
            author: "author".to_string(),
            ups,
            num_comments: 0,
            permalink: "/r/test/comments/x/".to_string(),
            subreddit: "test".to_string(),
            body: body.to_string(),
            created_utc: 0,
        }
    }

    fn comment(body: &str) -> RedditPost {
        RedditPost {
            title: String::new(),
            ..post_with(1, body)
        }
    }

    #[test]
    fn accepts_requires_upvote_floor() {
        assert!(accepts(&post_with(5, "real complaint"), 5));
        assert!(!accepts(&post_with(4, "real complaint"), 5));
    }

    #[test]
    fn accepts_rejects_empty_and_sentinel_bodies() {
        assert!(!accepts(&post_with(100, ""), 5));
        assert!(!accepts(&post_with(100, "[removed]"), 5));
        assert!(!accepts(&post_with(100, "[deleted]"), 5));
    }

    #[test]
    fn summarize_joins_bodies_with_separator() {
        let comments = vec![comment("first"), comment("second")];
        assert_eq!(summarize_comments(&comments), "first\n---\nsecond");
    }

    #[test]
    fn summarize_drops_sentinels_and_empties() {
        let comments = vec![
            comment("[deleted]"),
            comment("kept"),
            comment(""),
            comment("[removed]"),
        ];
        assert_eq!(summarize_comments(&comments), "kept");
    }

    #[test]
    fn summarize_caps_at_ten_before_filtering() {
        // Ten sentinels occupy the whole window; the valid eleventh is
        // never considered.
        let mut comments = vec![comment("[deleted]"); 10];
        comments.push(comment("too late"));
        assert_eq!(summarize_comments(&comments), NO_COMMENTS_PLACEHOLDER);
    }

    #[test]
    fn summarize_empty_listing_uses_placeholder() {
        assert_eq!(summarize_comments(&[]), NO_COMMENTS_PLACEHOLDER);
    }
}
