use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("analyzer API error (status {status}): {body}")]
    Api { status: u16, body: String },

    #[error("analyzer returned no content")]
    EmptyResponse,

    #[error("analyzer returned invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
