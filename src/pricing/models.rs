//! Value types for the quoting engine.
//!
//! A `PriceQuote` is either a computed quote or a custom-quote outcome with
//! the reason the engine could not price the request automatically.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::tiers::{PricingTier, CUSTOM_THRESHOLD};

/// Service program selected by the customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Program {
    OneTime,
    Subscription,
    Annual,
}

impl Program {
    pub fn as_str(&self) -> &'static str {
        match self {
            Program::OneTime => "one-time",
            Program::Subscription => "subscription",
            Program::Annual => "annual",
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown program: {0}")]
pub struct UnknownProgram(pub String);

impl FromStr for Program {
    type Err = UnknownProgram;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "one-time" | "one_time" | "onetime" => Ok(Program::OneTime),
            "subscription" => Ok(Program::Subscription),
            "annual" => Ok(Program::Annual),
            other => Err(UnknownProgram(other.to_string())),
        }
    }
}

/// Input to the engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingRequest {
    /// Property size in acres
    pub acreage: f64,
    pub program: Program,
    /// Days between visits
    pub frequency_days: u32,
}

impl PricingRequest {
    pub fn new(acreage: f64, program: Program, frequency_days: u32) -> Self {
        Self {
            acreage,
            program,
            frequency_days,
        }
    }
}

/// Broad class of a custom-quote outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Customer input was unusable; fixable by re-entering it
    Validation,
    /// Request is outside what the engine prices; needs a human quote
    OutOfRange,
}

/// Why a request could not be priced automatically.
///
/// The `Display` text is shown to the customer.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CustomReason {
    #[error("Please enter a valid acreage greater than zero.")]
    InvalidAcreage,

    #[error("Please choose a valid visit frequency of at least one day.")]
    InvalidFrequency,

    #[error(
        "Properties over {max} acres need a custom quote. Contact us and we'll put together a custom quote for your {acreage} acres.",
        max = CUSTOM_THRESHOLD
    )]
    ExceedsServiceableArea { acreage: f64 },

    #[error("We couldn't price {acreage} acres automatically. Please request a custom quote.")]
    TierNotConfigured { acreage: f64 },
}

impl CustomReason {
    pub fn kind(&self) -> FailureKind {
        match self {
            CustomReason::InvalidAcreage | CustomReason::InvalidFrequency => {
                FailureKind::Validation
            }
            CustomReason::ExceedsServiceableArea { .. }
            | CustomReason::TierNotConfigured { .. } => FailureKind::OutOfRange,
        }
    }

    /// Short machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            CustomReason::InvalidAcreage => "invalid_acreage",
            CustomReason::InvalidFrequency => "invalid_frequency",
            CustomReason::ExceedsServiceableArea { .. } => "exceeds_serviceable_area",
            CustomReason::TierNotConfigured { .. } => "tier_not_configured",
        }
    }
}

/// A quote the engine priced from the tier table
#[derive(Debug, Clone, PartialEq)]
pub struct ComputedQuote {
    pub tier: PricingTier,
    pub per_visit: Option<f64>,
    /// 30-day-month equivalent cost
    pub per_month: f64,
    pub annual_total: Option<f64>,
    pub message: Option<String>,
}

/// Request that must be quoted by hand
#[derive(Debug, Clone, PartialEq)]
pub struct CustomQuote {
    pub reason: CustomReason,
}

/// Engine output
#[derive(Debug, Clone, PartialEq)]
pub enum PriceQuote {
    Computed(ComputedQuote),
    Custom(CustomQuote),
}

impl PriceQuote {
    pub fn custom(reason: CustomReason) -> Self {
        PriceQuote::Custom(CustomQuote { reason })
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, PriceQuote::Custom(_))
    }

    pub fn per_visit(&self) -> Option<f64> {
        match self {
            PriceQuote::Computed(q) => q.per_visit,
            PriceQuote::Custom(_) => None,
        }
    }

    pub fn per_month(&self) -> Option<f64> {
        match self {
            PriceQuote::Computed(q) => Some(q.per_month),
            PriceQuote::Custom(_) => None,
        }
    }

    pub fn annual_total(&self) -> Option<f64> {
        match self {
            PriceQuote::Computed(q) => q.annual_total,
            PriceQuote::Custom(_) => None,
        }
    }

    /// Always present for custom quotes
    pub fn message(&self) -> Option<String> {
        match self {
            PriceQuote::Computed(q) => q.message.clone(),
            PriceQuote::Custom(c) => Some(c.reason.to_string()),
        }
    }

    pub fn tier(&self) -> Option<&PricingTier> {
        match self {
            PriceQuote::Computed(q) => Some(&q.tier),
            PriceQuote::Custom(_) => None,
        }
    }

    pub fn reason(&self) -> Option<&CustomReason> {
        match self {
            PriceQuote::Computed(_) => None,
            PriceQuote::Custom(c) => Some(&c.reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_program_parse() {
        assert_eq!("subscription".parse::<Program>(), Ok(Program::Subscription));
        assert_eq!(" Annual ".parse::<Program>(), Ok(Program::Annual));
        assert_eq!("one-time".parse::<Program>(), Ok(Program::OneTime));
        assert_eq!(
            "weekly".parse::<Program>(),
            Err(UnknownProgram("weekly".to_string()))
        );
    }

    #[test]
    fn test_program_serde_names() {
        assert_eq!(
            serde_json::to_string(&Program::OneTime).unwrap(),
            "\"one-time\""
        );
        let parsed: Program = serde_json::from_str("\"annual\"").unwrap();
        assert_eq!(parsed, Program::Annual);
    }

    #[test]
    fn test_custom_reason_messages() {
        let msg = CustomReason::InvalidAcreage.to_string().to_lowercase();
        assert!(msg.contains("valid acreage"));

        let msg = CustomReason::ExceedsServiceableArea { acreage: 2.5 }
            .to_string()
            .to_lowercase();
        assert!(msg.contains("custom quote"));
        assert!(msg.contains("2.5"));

        let msg = CustomReason::TierNotConfigured { acreage: 1.0 }
            .to_string()
            .to_lowercase();
        assert!(msg.contains("custom quote"));
    }

    #[test]
    fn test_custom_reason_kind() {
        assert_eq!(CustomReason::InvalidAcreage.kind(), FailureKind::Validation);
        assert_eq!(CustomReason::InvalidFrequency.kind(), FailureKind::Validation);
        assert_eq!(
            CustomReason::ExceedsServiceableArea { acreage: 3.0 }.kind(),
            FailureKind::OutOfRange
        );
    }

    #[test]
    fn test_custom_quote_accessors() {
        let quote = PriceQuote::custom(CustomReason::InvalidAcreage);
        assert!(quote.is_custom());
        assert_eq!(quote.per_visit(), None);
        assert_eq!(quote.per_month(), None);
        assert_eq!(quote.annual_total(), None);
        assert!(quote.message().is_some());
        assert!(quote.tier().is_none());
    }
}
