//! API route handlers

use axum::{
    extract::{RawQuery, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::error::{ApiError, ApiResult};
use super::AppState;
use crate::domain::model::ConversionInput;

const QUERY_PARAM: &str = "query";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResponse {
    pub input: String,
    pub output: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_mb: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu_usage: Option<f32>,
}

/// 取第一個 `query` 參數；查詢字串格式錯誤也不會讓框架直接回錯
fn query_value(raw_query: Option<&str>) -> Option<String> {
    let raw_query = raw_query?;
    url::form_urlencoded::parse(raw_query.as_bytes())
        .find(|(key, _)| key == QUERY_PARAM)
        .map(|(_, value)| value.into_owned())
}

/// `GET /romannumeral?query=<value>`
pub async fn roman_numeral(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> ApiResult<Json<ConversionResponse>> {
    let raw = query_value(raw_query.as_deref());
    let input = ConversionInput::from(raw.as_deref());

    let conversion = state.service.convert(&input)?;

    Ok(Json(ConversionResponse {
        input: conversion.input.to_string(),
        output: conversion.output.into_string(),
    }))
}

/// Liveness probe
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let stats = if state.monitor.is_enabled() {
        // sysinfo 取樣會阻塞，移出 async worker
        let monitor = Arc::clone(&state.monitor);
        tokio::task::spawn_blocking(move || monitor.get_stats())
            .await
            .ok()
            .flatten()
    } else {
        None
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.monitor.uptime().as_secs(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        memory_mb: stats.as_ref().map(|s| s.memory_usage_mb),
        cpu_usage: stats.as_ref().map(|s| s.cpu_usage),
    })
}

/// Prometheus scrape endpoint
pub async fn metrics(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let body = state
        .metrics
        .export()
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        body,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_value() {
        assert_eq!(query_value(Some("query=25")), Some("25".to_string()));
        assert_eq!(query_value(Some("query=1%2E5")), Some("1.5".to_string()));
        assert_eq!(query_value(Some("query=+7")), Some(" 7".to_string()));
        assert_eq!(query_value(Some("other=1&query=9&query=10")), Some("9".to_string()));
        assert_eq!(query_value(Some("query=")), Some(String::new()));
        assert_eq!(query_value(Some("q=1")), None);
        assert_eq!(query_value(None), None);
    }
}
