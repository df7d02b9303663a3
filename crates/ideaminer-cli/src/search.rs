use ideaminer_core::AppConfig;
use ideaminer_pipeline::Collector;
use ideaminer_reddit::RedditClient;

pub(crate) async fn run(
    config: &AppConfig,
    keyword: &str,
    min_ups: i64,
    limit: usize,
) -> anyhow::Result<()> {
    let reddit = RedditClient::with_base_url(
        &config.user_agent,
        config.request_timeout_secs,
        &config.reddit_base_url,
    )?;
    let collector = Collector::new(reddit);

    let items = collector.collect(keyword, min_ups, limit).await?;
    tracing::info!(keyword, count = items.len(), "collect finished");

    println!("{}", serde_json::to_string_pretty(&items)?);
    Ok(())
}
