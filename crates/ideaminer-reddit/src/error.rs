use thiserror::Error;

#[derive(Debug, Error)]
pub enum RedditError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Reddit API error (status {status}): {body}")]
    Upstream { status: u16, body: String },
}
