use std::time::Duration;

use crate::error::AnalyzerError;
use crate::prompt::build_prompt;
use crate::types::{Analysis, AnalysisInput, ChatMessage, ChatRequest, ChatResponse, ResponseFormat};

const DEFAULT_BASE_URL: &str = "https://api.deepseek.com";
const ERROR_BODY_LIMIT: usize = 200;

/// Backend settings for the analyzer.
#[derive(Clone)]
pub struct AnalyzerConfig {
    pub api_key: String,
    pub model: String,
    /// On the backend's nominal 0-2 scale; 1.3 biases toward creative
    /// variation in the generated product ideas.
    pub temperature: f32,
    pub timeout_secs: u64,
}

/// Client for an OpenAI-compatible chat-completions backend.
///
/// One request per analysis, JSON output mode, no retries. Use
/// [`AnalyzerClient::with_base_url`] to point at a mock server in tests.
pub struct AnalyzerClient {
    client: reqwest::Client,
    config: AnalyzerConfig,
    base_url: String,
}

impl AnalyzerClient {
    /// Creates a new client pointed at the production backend.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(config: AnalyzerConfig) -> Result<Self, AnalyzerError> {
        Self::with_base_url(config, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_base_url(config: AnalyzerConfig, base_url: &str) -> Result<Self, AnalyzerError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            config,
        })
    }

    /// Analyzes one collected pain point into a product idea.
    ///
    /// Submits a single-turn chat-completions request and parses the first
    /// choice's message content as JSON. The parsed object is accepted
    /// verbatim — see [`Analysis`] for the trust boundary.
    ///
    /// # Errors
    ///
    /// - [`AnalyzerError::Api`] on a non-success HTTP status.
    /// - [`AnalyzerError::EmptyResponse`] when the backend returns no
    ///   choices or no message content.
    /// - [`AnalyzerError::InvalidJson`] when the content is not
    ///   syntactically valid JSON.
    /// - [`AnalyzerError::Http`] on transport failure.
    pub async fn analyze(&self, input: &AnalysisInput<'_>) -> Result<Analysis, AnalyzerError> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            temperature: self.config.temperature,
            response_format: ResponseFormat {
                kind: "json_object",
            },
            messages: vec![ChatMessage {
                role: "user",
                content: build_prompt(input),
            }],
        };

        tracing::debug!(
            model = %self.config.model,
            subreddit = input.subreddit,
            "submitting analysis request"
        );

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnalyzerError::Api {
                status: status.as_u16(),
                body: body.chars().take(ERROR_BODY_LIMIT).collect(),
            });
        }

        let chat: ChatResponse = response.json().await?;
        let content = chat
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(AnalyzerError::EmptyResponse)?;

        let value: serde_json::Value = serde_json::from_str(&content)?;
        Ok(Analysis::from_value(value))
    }
}
