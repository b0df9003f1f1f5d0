//! Health and cache maintenance handlers

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::cache::CacheStats;
use crate::error::AppError;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /api/cache/stats
pub async fn cache_stats(State(state): State<AppState>) -> Json<CacheStats> {
    Json(state.cache.stats())
}

/// POST /api/cache/invalidate
pub async fn invalidate_cache(State(state): State<AppState>) -> StatusCode {
    state.cache.invalidate_all();
    StatusCode::NO_CONTENT
}

/// Fallback for unknown routes
pub async fn not_found() -> AppError {
    AppError::NotFound
}
