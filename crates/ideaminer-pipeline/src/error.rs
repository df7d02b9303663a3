use thiserror::Error;

use ideaminer_reddit::RedditError;

#[derive(Debug, Error)]
pub enum CollectError {
    /// The upstream search call failed; nothing was collected.
    #[error("Reddit search failed: {0}")]
    Search(#[from] RedditError),
}
