use ideaminer_analyzer::{AnalyzerClient, AnalyzerConfig};
use ideaminer_core::AppConfig;
use ideaminer_pipeline::{Collector, Orchestrator, RunEvent, RunSink, RunStatus};
use ideaminer_reddit::RedditClient;

/// Prints run progress to the terminal as the orchestrator publishes it.
struct PrintSink;

impl RunSink for PrintSink {
    fn publish(&self, event: RunEvent) {
        match event {
            RunEvent::Collected { total } => {
                println!("found {total} candidate posts, analyzing one by one...\n");
            }
            RunEvent::ItemEnriched { index, item } => {
                let post = &item.item.post;
                println!(
                    "[{}] r/{} ({} ups) {}",
                    index + 1,
                    post.subreddit,
                    post.ups,
                    post.title
                );
                if let Some(analysis) = &item.ai_analysis {
                    let score = analysis
                        .viability_score()
                        .map_or_else(|| "?".to_string(), |s| s.to_string());
                    println!(
                        "    {} — {} (viability {score}/100)",
                        analysis.product_name().unwrap_or("(unnamed product)"),
                        analysis.tagline().unwrap_or("")
                    );
                    if let Some(pain) = analysis.core_pain_point() {
                        println!("    pain: {pain}");
                    }
                    if let Some(solution) = analysis.solution() {
                        println!("    solution: {solution}");
                    }
                }
                println!();
            }
            RunEvent::Terminal(RunStatus::Done { analyzed }) => {
                println!("done: {analyzed} product ideas generated");
            }
            RunEvent::Terminal(RunStatus::NothingFound) => {
                println!("nothing found in the past 24 hours — try another keyword");
            }
            RunEvent::Terminal(RunStatus::Failed { message }) => {
                eprintln!("search failed: {message}");
            }
        }
    }
}

pub(crate) async fn run(
    config: &AppConfig,
    keyword: &str,
    min_ups: i64,
    limit: usize,
) -> anyhow::Result<()> {
    let api_key = config
        .analyzer_api_key
        .clone()
        .ok_or_else(|| anyhow::anyhow!("DEEPSEEK_API_KEY is required for the mine command"))?;

    let reddit = RedditClient::with_base_url(
        &config.user_agent,
        config.request_timeout_secs,
        &config.reddit_base_url,
    )?;
    let analyzer = AnalyzerClient::with_base_url(
        AnalyzerConfig {
            api_key,
            model: config.analyzer_model.clone(),
            temperature: config.analyzer_temperature,
            timeout_secs: config.request_timeout_secs,
        },
        &config.analyzer_base_url,
    )?;

    let orchestrator = Orchestrator::new(Collector::new(reddit), analyzer);

    println!("mining r/all for: {keyword} (min {min_ups} ups, past 24h)\n");
    orchestrator.run(keyword, min_ups, limit, &PrintSink).await;

    Ok(())
}
