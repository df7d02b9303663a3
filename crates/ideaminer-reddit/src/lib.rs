//! Reddit search and thread-detail client.
//!
//! Wraps `reqwest` with the two read operations the pipeline needs: a
//! keyword search over the public `search.json` endpoint and a per-post
//! comment fetch via `{permalink}.json`. Raw listing envelopes are
//! normalized into flat [`RedditPost`] records; the envelope shape is not
//! contractually guaranteed upstream, so a missing or malformed listing
//! container degrades to an empty result instead of failing.

mod client;
mod error;
mod types;

pub use client::RedditClient;
pub use error::RedditError;
pub use types::RedditPost;
