use serde::Serialize;

use ideaminer_analyzer::Analysis;
use ideaminer_reddit::RedditPost;

/// A filtered search hit with its comment-thread summary attached.
///
/// `comments_summary` is always present: when a post has no usable replies
/// or its thread fetch failed, a descriptive placeholder stands in — it
/// never degrades to absence.
#[derive(Debug, Clone, Serialize)]
pub struct CollectedItem {
    #[serde(flatten)]
    pub post: RedditPost,
    pub comments_summary: String,
}

/// A collected item with its AI analysis attached.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedItem {
    #[serde(flatten)]
    pub item: CollectedItem,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_analysis: Option<Analysis>,
}

/// Progress events a run publishes, in order: at most one `Collected`,
/// then zero or more `ItemEnriched` (collection order, successes only),
/// then exactly one `Terminal`.
#[derive(Debug, Clone)]
pub enum RunEvent {
    Collected { total: usize },
    ItemEnriched { index: usize, item: EnrichedItem },
    Terminal(RunStatus),
}

/// How a run ended.
#[derive(Debug, Clone)]
pub enum RunStatus {
    /// The analysis loop completed; `analyzed` counts successes and may be
    /// less than the collected count.
    Done { analyzed: usize },
    /// Filtering removed every candidate — a valid outcome, not an error.
    NothingFound,
    /// The collect stage failed; the run produced nothing.
    Failed { message: String },
}

/// Consumer-side observer for a run's progressive results.
///
/// Implementations receive events in publication order from a single
/// writer; a terminal printer, a channel sender, or a test recorder all
/// fit behind this seam.
pub trait RunSink: Send + Sync {
    fn publish(&self, event: RunEvent);
}
