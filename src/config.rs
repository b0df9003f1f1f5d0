//! Runtime configuration from the environment (and `.env`, if present).

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

/// Longest quote cache TTL accepted (one year)
pub const MAX_QUOTE_CACHE_TTL_SECS: u64 = 365 * 24 * 60 * 60;

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Service configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub quote_cache_capacity: u64,
    pub quote_cache_ttl: Duration,
    /// ISO currency code reported alongside quotes
    pub currency: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            quote_cache_capacity: 10_000,
            quote_cache_ttl: Duration::from_secs(60 * 60),
            currency: "USD".to_string(),
        }
    }
}

impl Config {
    /// Load from process environment, reading `.env` first if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!("Failed to load .env file: {}", e);
            }
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load using an arbitrary key lookup. Unset or empty keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let ttl_secs: u64 = parse_or(
            get("QUOTE_CACHE_TTL_SECS"),
            "QUOTE_CACHE_TTL_SECS",
            defaults.quote_cache_ttl.as_secs(),
        )?;
        if ttl_secs > MAX_QUOTE_CACHE_TTL_SECS {
            return Err(ConfigError::Invalid {
                key: "QUOTE_CACHE_TTL_SECS",
                value: ttl_secs.to_string(),
            });
        }

        Ok(Self {
            bind_addr: parse_or(get("BIND_ADDR"), "BIND_ADDR", defaults.bind_addr)?,
            quote_cache_capacity: parse_or(
                get("QUOTE_CACHE_CAPACITY"),
                "QUOTE_CACHE_CAPACITY",
                defaults.quote_cache_capacity,
            )?,
            quote_cache_ttl: Duration::from_secs(ttl_secs),
            currency: get("QUOTE_CURRENCY")
                .map(|c| c.trim().to_uppercase())
                .unwrap_or(defaults.currency),
        })
    }
}

fn parse_or<T: FromStr>(
    value: Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(v) => v
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: v }),
    }
}
