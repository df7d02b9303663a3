use ideaminer_analyzer::{AnalysisInput, AnalyzerClient};

use crate::collector::Collector;
use crate::types::{EnrichedItem, RunEvent, RunSink, RunStatus};

/// End-to-end driver for a single search run: collect, then analyze each
/// item in order, publishing progress to a sink as results land.
pub struct Orchestrator {
    collector: Collector,
    analyzer: AnalyzerClient,
}

impl Orchestrator {
    #[must_use]
    pub fn new(collector: Collector, analyzer: AnalyzerClient) -> Self {
        Self {
            collector,
            analyzer,
        }
    }

    /// Runs the full pipeline for one keyword/threshold pair.
    ///
    /// A collect failure terminates the run with `Failed`; an empty
    /// collected set terminates with `NothingFound`. Otherwise each item is
    /// analyzed strictly sequentially — one request in flight at a time,
    /// so results reveal progressively in collection order and the paid
    /// backend sees backpressure. A per-item analysis failure skips that
    /// item; the run always reaches `Done` with the success count.
    ///
    /// Returns the enriched items, which mirror what the sink observed.
    pub async fn run(
        &self,
        keyword: &str,
        min_ups: i64,
        limit: usize,
        sink: &dyn RunSink,
    ) -> Vec<EnrichedItem> {
        let collected = match self.collector.collect(keyword, min_ups, limit).await {
            Ok(items) => items,
            Err(e) => {
                tracing::error!(keyword, error = %e, "collect stage failed");
                sink.publish(RunEvent::Terminal(RunStatus::Failed {
                    message: e.to_string(),
                }));
                return Vec::new();
            }
        };

        if collected.is_empty() {
            tracing::info!(keyword, "no candidates survived filtering");
            sink.publish(RunEvent::Terminal(RunStatus::NothingFound));
            return Vec::new();
        }

        sink.publish(RunEvent::Collected {
            total: collected.len(),
        });

        let mut enriched = Vec::new();
        for (index, item) in collected.into_iter().enumerate() {
            let input = AnalysisInput {
                title: &item.post.title,
                text: &item.post.body,
                subreddit: &item.post.subreddit,
                comments: &item.comments_summary,
            };

            match self.analyzer.analyze(&input).await {
                Ok(analysis) => {
                    let enriched_item = EnrichedItem {
                        item,
                        ai_analysis: Some(analysis),
                    };
                    enriched.push(enriched_item.clone());
                    sink.publish(RunEvent::ItemEnriched {
                        index,
                        item: enriched_item,
                    });
                }
                Err(e) => {
                    tracing::warn!(
                        index,
                        title = %item.post.title,
                        error = %e,
                        "analysis failed, skipping item"
                    );
                }
            }
        }

        sink.publish(RunEvent::Terminal(RunStatus::Done {
            analyzed: enriched.len(),
        }));
        enriched
    }
}
