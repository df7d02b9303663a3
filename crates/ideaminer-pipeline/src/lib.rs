//! Pain-point enrichment pipeline.
//!
//! Two stages: [`Collector`] searches Reddit, filters candidates against
//! quality thresholds, and fan-out fetches comment threads; the
//! [`Orchestrator`] then drives each collected item through the analyzer
//! one at a time, streaming enriched results to a [`RunSink`] as they
//! complete. A failed search is fatal to a run; everything past that point
//! degrades per item.

mod collector;
mod error;
mod orchestrator;
mod types;

pub use collector::Collector;
pub use error::CollectError;
pub use orchestrator::Orchestrator;
pub use types::{CollectedItem, EnrichedItem, RunEvent, RunSink, RunStatus};
