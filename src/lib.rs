//! Quoting service for the pest-control marketing site.
//!
//! The core is [`pricing::calculate_pricing`], a pure function from acreage,
//! program and visit cadence to a [`pricing::PriceQuote`]. The rest of the
//! crate serves it to the site's quoting form over JSON.

pub mod cache;
pub mod config;
pub mod error;
pub mod pricing;
pub mod routes;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use cache::AppCache;
use config::Config;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub cache: AppCache,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let cache = AppCache::new(config.quote_cache_capacity, config.quote_cache_ttl);
        Self {
            cache,
            config: Arc::new(config),
        }
    }
}

/// Build the application router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health))
        .route("/api/cache/stats", get(routes::health::cache_stats))
        .route("/api/cache/invalidate", post(routes::health::invalidate_cache))
        .nest("/api/pricing", pricing::router())
        .fallback(routes::health::not_found)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
