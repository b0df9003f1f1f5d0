//! Pricing & quoting engine.
//!
//! Turns a property's acreage, a service program and a visit cadence into
//! a price quote. The engine (`calculators`) is a pure function over the
//! static tier table (`tiers`); `services` and `routes` expose it over
//! HTTP for the site's quoting form.

pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;
pub mod tiers;

// Re-export commonly used items
pub use calculators::{calculate_pricing, calculate_pricing_with, round_money};
pub use models::{CustomReason, FailureKind, PriceQuote, PricingRequest, Program};
pub use routes::router;
pub use tiers::{PricingTier, CUSTOM_THRESHOLD, TIERS};
