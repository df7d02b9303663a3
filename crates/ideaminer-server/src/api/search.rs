use axum::{
    extract::{Query, State},
    response::IntoResponse,
    Extension, Json,
};
use serde::Deserialize;

use crate::api::{ApiError, AppState};
use crate::middleware::RequestId;

const DEFAULT_KEYWORD: &str = "I hate";
const DEFAULT_MIN_UPS: i64 = 5;

#[derive(Debug, Deserialize)]
pub(super) struct SearchParams {
    q: Option<String>,
    min_ups: Option<i64>,
    limit: Option<usize>,
}

/// `GET /api/v1/search` — run the collect stage and return the items.
///
/// Analysis is not involved here; the consumer drives that per item
/// through the analyze endpoint.
pub(super) async fn run_search(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, ApiError> {
    let keyword = params
        .q
        .filter(|q| !q.is_empty())
        .unwrap_or_else(|| DEFAULT_KEYWORD.to_string());
    let min_ups = params.min_ups.unwrap_or(DEFAULT_MIN_UPS);
    let limit = normalize_limit(params.limit);

    let items = state
        .collector
        .collect(&keyword, min_ups, limit)
        .await
        .map_err(|e| {
            tracing::error!(keyword = %keyword, error = %e, "collect failed");
            ApiError::new(req_id.0, "upstream_failed", e.to_string())
        })?;

    tracing::info!(keyword = %keyword, count = items.len(), "collect run served");
    Ok(Json(items))
}

pub(super) fn normalize_limit(limit: Option<usize>) -> usize {
    limit.unwrap_or(10).clamp(1, 25)
}
