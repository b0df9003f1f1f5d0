//! In-memory caching using moka
//!
//! Memoizes engine output per exact request. Quotes depend only on their
//! inputs and the static tier table, so entries never go stale; the TTL
//! only bounds memory held for one-off inputs.

use moka::future::Cache;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::pricing::models::{PriceQuote, PricingRequest, Program};

/// Cache key for a quote request.
///
/// Acreage is keyed by its bit pattern so that every distinct `f64`
/// (including NaN payloads) maps to its own entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuoteKey {
    acreage_bits: u64,
    program: Program,
    frequency_days: u32,
}

impl From<&PricingRequest> for QuoteKey {
    fn from(request: &PricingRequest) -> Self {
        Self {
            acreage_bits: request.acreage.to_bits(),
            program: request.program,
            frequency_days: request.frequency_days,
        }
    }
}

/// Application cache
#[derive(Clone)]
pub struct AppCache {
    /// Quotes (request -> PriceQuote)
    pub quotes: Cache<QuoteKey, Arc<PriceQuote>>,
}

impl AppCache {
    /// Create a new cache instance with the given capacity and TTL
    pub fn new(max_capacity: u64, ttl: Duration) -> Self {
        Self {
            quotes: Cache::builder()
                .max_capacity(max_capacity)
                .time_to_live(ttl)
                .time_to_idle(ttl / 2)
                .build(),
        }
    }

    /// Get cache statistics for monitoring
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            quotes_size: self.quotes.entry_count(),
        }
    }

    /// Invalidate all caches
    pub fn invalidate_all(&self) {
        self.quotes.invalidate_all();
        info!("All caches invalidated");
    }
}

impl Default for AppCache {
    fn default() -> Self {
        // 10k quotes, 1 hour TTL
        Self::new(10_000, Duration::from_secs(60 * 60))
    }
}

/// Cache statistics for monitoring endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CacheStats {
    pub quotes_size: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_key_distinguishes_inputs() {
        let base = PricingRequest::new(0.5, Program::Subscription, 30);
        let key = QuoteKey::from(&base);

        assert_eq!(key, QuoteKey::from(&base));
        assert_ne!(
            key,
            QuoteKey::from(&PricingRequest::new(0.5, Program::Annual, 30))
        );
        assert_ne!(
            key,
            QuoteKey::from(&PricingRequest::new(0.5, Program::Subscription, 14))
        );
        assert_ne!(
            key,
            QuoteKey::from(&PricingRequest::new(0.51, Program::Subscription, 30))
        );
    }

    #[test]
    fn test_quote_key_nan_is_stable() {
        let request = PricingRequest::new(f64::NAN, Program::Subscription, 30);
        assert_eq!(QuoteKey::from(&request), QuoteKey::from(&request));
    }

    #[tokio::test]
    async fn test_insert_and_invalidate() {
        let cache = AppCache::default();
        let request = PricingRequest::new(0.5, Program::Annual, 30);
        let key = QuoteKey::from(&request);
        let quote = crate::pricing::calculate_pricing(&request);

        cache.quotes.insert(key, Arc::new(quote.clone())).await;
        assert_eq!(cache.quotes.get(&key).await.as_deref(), Some(&quote));

        cache.invalidate_all();
        assert!(cache.quotes.get(&key).await.is_none());
    }
}
