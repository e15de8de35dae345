//! API route definitions

use axum::{
    http::{HeaderValue, Method},
    middleware::from_fn_with_state,
    routing::get,
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use super::{handlers, middleware::track_metrics, AppState};
use crate::config::CorsSettings;
use crate::utils::error::{AppError, Result};

pub fn build_router(state: AppState, cors: &CorsSettings) -> Result<Router> {
    let router = Router::new()
        .route("/romannumeral", get(handlers::roman_numeral))
        .route("/health", get(handlers::health))
        .route("/metrics", get(handlers::metrics))
        // 用 layer 而非 route_layer，404 才會以 unmatched 記錄
        .layer(from_fn_with_state(state.clone(), track_metrics))
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    if !cors.enabled {
        return Ok(router);
    }

    Ok(router.layer(cors_layer(cors)?))
}

fn cors_layer(cors: &CorsSettings) -> Result<CorsLayer> {
    if cors.allowed_origins.is_empty() {
        return Ok(CorsLayer::permissive());
    }

    let origins = cors
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| AppError::InvalidConfigValueError {
                field: "cors.allowed_origins".to_string(),
                value: origin.clone(),
                reason: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET]))
}
