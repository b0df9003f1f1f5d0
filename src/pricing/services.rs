//! Quoting service: the engine behind the application cache.

use std::sync::Arc;
use tracing::{debug, error, info};

use crate::cache::{AppCache, QuoteKey};

use super::calculators::calculate_pricing;
use super::models::{CustomReason, PriceQuote, PricingRequest};

/// Quote a request, reusing a cached result for an identical request.
///
/// Concurrent identical requests share one computation.
pub async fn quote(cache: &AppCache, request: &PricingRequest) -> Arc<PriceQuote> {
    cache
        .quotes
        .get_with(QuoteKey::from(request), async {
            debug!("Cache MISS for quote: {:?}", request);
            let quote = calculate_pricing(request);
            log_outcome(request, &quote);
            Arc::new(quote)
        })
        .await
}

fn log_outcome(request: &PricingRequest, quote: &PriceQuote) {
    match quote.reason() {
        None => {}
        Some(reason) if matches!(reason, CustomReason::TierNotConfigured { .. }) => {
            error!(
                acreage = request.acreage,
                program = %request.program,
                "Tier table has no band for a serviceable acreage: {}",
                reason.code()
            );
        }
        Some(reason) => {
            info!(
                acreage = request.acreage,
                program = %request.program,
                frequency_days = request.frequency_days,
                reason = reason.code(),
                "Request routed to custom quote"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::models::Program;

    #[tokio::test]
    async fn test_quote_matches_engine() {
        let cache = AppCache::default();
        let request = PricingRequest::new(0.12, Program::Subscription, 21);

        let quoted = quote(&cache, &request).await;
        assert_eq!(*quoted, calculate_pricing(&request));
    }

    #[tokio::test]
    async fn test_quote_is_memoized() {
        let cache = AppCache::default();
        let request = PricingRequest::new(1.4, Program::Annual, 21);

        let first = quote(&cache, &request).await;
        let second = quote(&cache, &request).await;
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn test_concurrent_identical_requests_share_result() {
        let cache = AppCache::default();
        let request = PricingRequest::new(0.8, Program::Subscription, 14);

        let (first, second) = tokio::join!(quote(&cache, &request), quote(&cache, &request));
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn test_custom_outcomes_are_returned() {
        let cache = AppCache::default();
        let request = PricingRequest::new(2.5, Program::Subscription, 21);

        let quoted = quote(&cache, &request).await;
        assert!(quoted.is_custom());
    }
}
