//! Response DTOs for pricing API endpoints.
//!
//! Amounts are rounded to cents here; the engine itself works unrounded.

use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::to_money;
use super::models::{FailureKind, PriceQuote, PricingRequest, Program};
use super::tiers::PricingTier;

/// Money value for JSON responses; `amount` is null when not representable
#[derive(Debug, Clone, Serialize)]
pub struct MoneyResponse {
    #[serde(with = "rust_decimal::serde::str_option")]
    pub amount: Option<Decimal>,
    pub currency: String,
}

impl MoneyResponse {
    fn from_amount(amount: f64, currency: &str) -> Self {
        Self {
            amount: to_money(amount),
            currency: currency.to_string(),
        }
    }
}

/// Why a quote is custom, for the form to pick its call-to-action
#[derive(Debug, Serialize)]
pub struct CustomReasonResponse {
    pub code: &'static str,
    pub kind: FailureKind,
}

/// Response for a quote request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuoteResponse {
    pub is_custom: bool,
    #[serde(with = "rust_decimal::serde::str_option")]
    pub per_visit: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str_option")]
    pub per_month: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str_option")]
    pub annual_total: Option<Decimal>,
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<CustomReasonResponse>,
    pub tier: Option<&'static str>,
    pub currency: String,
    pub program: Program,
    pub frequency_days: u32,
}

impl PriceQuoteResponse {
    pub fn new(quote: &PriceQuote, request: &PricingRequest, currency: &str) -> Self {
        Self {
            is_custom: quote.is_custom(),
            per_visit: quote.per_visit().and_then(to_money),
            per_month: quote.per_month().and_then(to_money),
            annual_total: quote.annual_total().and_then(to_money),
            message: quote.message(),
            reason: quote.reason().map(|reason| CustomReasonResponse {
                code: reason.code(),
                kind: reason.kind(),
            }),
            tier: quote.tier().map(|tier| tier.label),
            currency: currency.to_string(),
            program: request.program,
            frequency_days: request.frequency_days,
        }
    }
}

/// One row of the published tier table
#[derive(Debug, Serialize)]
pub struct TierResponse {
    pub label: &'static str,
    pub max_acreage: f64,
    pub per_visit: MoneyResponse,
    pub annual: MoneyResponse,
}

impl TierResponse {
    pub fn new(tier: &PricingTier, currency: &str) -> Self {
        Self {
            label: tier.label,
            max_acreage: tier.max_acreage,
            per_visit: MoneyResponse::from_amount(tier.per_visit_rate, currency),
            annual: MoneyResponse::from_amount(tier.annual_rate, currency),
        }
    }
}

/// Response for the tier listing
#[derive(Debug, Serialize)]
pub struct TierTableResponse {
    pub tiers: Vec<TierResponse>,
    pub custom_threshold: f64,
}

/// Generic error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}
