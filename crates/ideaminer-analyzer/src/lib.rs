//! Product-idea analysis client.
//!
//! Submits a collected pain point to an OpenAI-compatible chat-completions
//! backend (DeepSeek in production) as a single-turn, JSON-mode request and
//! parses the structured result. The model's output is trusted at the
//! syntax level only: anything that parses as JSON is accepted verbatim —
//! see [`Analysis`].

mod client;
mod error;
mod prompt;
mod types;

pub use client::{AnalyzerClient, AnalyzerConfig};
pub use error::AnalyzerError;
pub use types::{Analysis, AnalysisInput};
