use axum::{
    extract::State,
    response::IntoResponse,
    Extension, Json,
};
use serde::Deserialize;

use ideaminer_analyzer::AnalysisInput;

use crate::api::{ApiError, AppState};
use crate::middleware::RequestId;

#[derive(Debug, Deserialize)]
pub(super) struct AnalyzeRequest {
    title: Option<String>,
    text: Option<String>,
    #[serde(default)]
    subreddit: Option<String>,
    #[serde(default)]
    comments: Option<String>,
}

/// `POST /api/v1/analyze` — analyze one collected item.
///
/// Returns the backend's analysis JSON verbatim; `title` and `text` are
/// required, the rest default to empty.
pub(super) async fn run_analyze(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let title = request.title.unwrap_or_default();
    let text = request.text.unwrap_or_default();
    if title.is_empty() || text.is_empty() {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "missing text or title",
        ));
    }

    let Some(analyzer) = state.analyzer.as_ref() else {
        return Err(ApiError::new(
            req_id.0,
            "unavailable",
            "analysis backend is not configured",
        ));
    };

    let input = AnalysisInput {
        title: &title,
        text: &text,
        subreddit: request.subreddit.as_deref().unwrap_or_default(),
        comments: request.comments.as_deref().unwrap_or_default(),
    };

    let analysis = analyzer.analyze(&input).await.map_err(|e| {
        tracing::error!(error = %e, "analysis failed");
        ApiError::new(req_id.0, "upstream_failed", e.to_string())
    })?;

    Ok(Json(analysis.into_value()))
}
