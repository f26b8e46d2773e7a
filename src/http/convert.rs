use std::time::Instant;

use axum::{
    extract::{Query, State},
    http::HeaderMap,
};
use serde::Deserialize;

use crate::http::error::{ApiError, ApiResult};
use crate::http::request::request_id;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::upstream::decode_subscription_url;

#[derive(Debug, Deserialize)]
pub struct ConvertParams {
    pub subscription_url: Option<String>,
}

/// `GET /convert?subscription_url=...`
///
/// Validates, fetches and transforms the subscription, returning YAML as `text/plain`.
pub async fn convert(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ConvertParams>,
) -> ApiResult<String> {
    let start_time = Instant::now();
    let request_id = request_id(&headers).to_string();

    let result = run(&state, params).await;
    match &result {
        Ok(body) => {
            tracing::info!(request_id = %request_id, bytes = body.len(), "Subscription converted");
            metrics::record_conversion("ok", start_time);
        }
        Err(e) => {
            tracing::warn!(
                request_id = %request_id,
                status = %e.status_code(),
                error = %e,
                "Conversion failed"
            );
            metrics::record_conversion(e.outcome(), start_time);
        }
    }
    result
}

async fn run(state: &AppState, params: ConvertParams) -> ApiResult<String> {
    let raw_url = params
        .subscription_url
        .ok_or(ApiError::MissingParameter("subscription_url"))?;
    let url = decode_subscription_url(&raw_url)?;

    tracing::debug!(host = url.host_str().unwrap_or_default(), "Fetching subscription");
    let raw = state.fetcher.fetch(&url).await?;
    metrics::record_upstream_bytes(raw.len());

    Ok(state.injector.inject(&raw)?)
}
