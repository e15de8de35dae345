//! Request metrics middleware

use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};
use std::time::Instant;

use super::AppState;

const UNMATCHED_ROUTE: &str = "unmatched";

/// 記錄 (method, route, statusCode) 與回應時間，慢請求另外發 warn
pub async fn track_metrics(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| UNMATCHED_ROUTE.to_string());

    let start = Instant::now();
    let response = next.run(request).await;
    let elapsed = start.elapsed();
    let status = response.status().as_u16();

    if elapsed > state.slow_request_threshold {
        tracing::warn!(
            method = %method,
            route = %route,
            elapsed_ms = elapsed.as_millis() as u64,
            "Slow request"
        );
    }

    state
        .metrics
        .observe_request(method.as_str(), &route, status, elapsed);

    response
}
