//! HTTP routes for the quoting API.

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};

use crate::error::Result;
use crate::AppState;

use super::models::PricingRequest;
use super::requests::QuoteRequest;
use super::responses::{PriceQuoteResponse, TierResponse, TierTableResponse};
use super::services;
use super::tiers::{default_tiers, CUSTOM_THRESHOLD};

/// Pricing routes, mounted under `/api/pricing`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/quote", get(quote_query).post(quote_json))
        .route("/tiers", get(tiers))
}

/// POST /api/pricing/quote
async fn quote_json(
    State(state): State<AppState>,
    req: std::result::Result<Json<QuoteRequest>, JsonRejection>,
) -> Result<Json<PriceQuoteResponse>> {
    let Json(req) = req?;
    Ok(respond(&state, req.into()).await)
}

/// GET /api/pricing/quote?acreage=..&program=..&frequencyDays=..
async fn quote_query(
    State(state): State<AppState>,
    req: std::result::Result<Query<QuoteRequest>, QueryRejection>,
) -> Result<Json<PriceQuoteResponse>> {
    let Query(req) = req?;
    Ok(respond(&state, req.into()).await)
}

async fn respond(state: &AppState, request: PricingRequest) -> Json<PriceQuoteResponse> {
    let quote = services::quote(&state.cache, &request).await;
    Json(PriceQuoteResponse::new(
        &quote,
        &request,
        &state.config.currency,
    ))
}

/// GET /api/pricing/tiers
async fn tiers(State(state): State<AppState>) -> Json<TierTableResponse> {
    Json(TierTableResponse {
        tiers: default_tiers()
            .iter()
            .map(|tier| TierResponse::new(tier, &state.config.currency))
            .collect(),
        custom_threshold: CUSTOM_THRESHOLD,
    })
}
