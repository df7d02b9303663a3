mod api;
mod middleware;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use ideaminer_analyzer::{AnalyzerClient, AnalyzerConfig};
use ideaminer_pipeline::Collector;
use ideaminer_reddit::RedditClient;

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = ideaminer_core::load_app_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let reddit = RedditClient::with_base_url(
        &config.user_agent,
        config.request_timeout_secs,
        &config.reddit_base_url,
    )?;

    let analyzer = match &config.analyzer_api_key {
        Some(api_key) => Some(Arc::new(AnalyzerClient::with_base_url(
            AnalyzerConfig {
                api_key: api_key.clone(),
                model: config.analyzer_model.clone(),
                temperature: config.analyzer_temperature,
                timeout_secs: config.request_timeout_secs,
            },
            &config.analyzer_base_url,
        )?)),
        None => {
            tracing::warn!("DEEPSEEK_API_KEY not set; the analyze endpoint will answer 503");
            None
        }
    };

    let state = AppState {
        collector: Arc::new(Collector::new(reddit)),
        analyzer,
    };
    let app = build_app(state);

    tracing::info!(addr = %config.bind_addr, env = %config.env, "starting server");
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
