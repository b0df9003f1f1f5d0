//! Request DTOs for pricing API endpoints.

use serde::Deserialize;

use super::models::{PricingRequest, Program};

/// Request to quote a property, as posted by the quoting form.
///
/// Also accepted as query parameters on `GET /api/pricing/quote`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub acreage: f64,
    pub program: Program,
    #[serde(default = "default_frequency_days")]
    pub frequency_days: u32,
}

fn default_frequency_days() -> u32 {
    30
}

impl From<QuoteRequest> for PricingRequest {
    fn from(req: QuoteRequest) -> Self {
        PricingRequest::new(req.acreage, req.program, req.frequency_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_quote_request() {
        let req: QuoteRequest = serde_json::from_str(
            r#"{"acreage": 0.12, "program": "subscription", "frequencyDays": 21}"#,
        )
        .unwrap();
        let request = PricingRequest::from(req);
        assert_eq!(request, PricingRequest::new(0.12, Program::Subscription, 21));
    }

    #[test]
    fn test_frequency_defaults_to_monthly() {
        let req: QuoteRequest =
            serde_json::from_str(r#"{"acreage": 1.4, "program": "annual"}"#).unwrap();
        assert_eq!(req.frequency_days, 30);
    }

    #[test]
    fn test_unknown_program_rejected() {
        let result = serde_json::from_str::<QuoteRequest>(
            r#"{"acreage": 1.0, "program": "weekly"}"#,
        );
        assert!(result.is_err());
    }
}
