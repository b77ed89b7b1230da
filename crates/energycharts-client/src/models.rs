//! Request and response models for the `/price` endpoint

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

/// Bidding zone used when a request names none
pub const DEFAULT_BIDDING_ZONE: &str = "DE-LU";

/// Parameters of a price request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceRequest {
    /// Bidding zone code, e.g. `DE-LU`
    pub bzn: String,
    /// Start date as understood by the upstream API
    pub start: Option<String>,
    /// End date as understood by the upstream API
    pub end: Option<String>,
}

impl PriceRequest {
    /// Create a request for the given bidding zone without a date range
    pub fn new(bzn: impl Into<String>) -> Self {
        Self {
            bzn: bzn.into(),
            start: None,
            end: None,
        }
    }

    /// Set the start date
    pub fn with_start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }

    /// Set the end date
    pub fn with_end(mut self, end: impl Into<String>) -> Self {
        self.end = Some(end.into());
        self
    }

    /// Query-string pairs in wire order.
    ///
    /// `bzn` is always present; empty dates are left out.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = vec![("bzn", self.bzn.as_str())];
        for (key, value) in [("start", &self.start), ("end", &self.end)] {
            if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
                pairs.push((key, value));
            }
        }
        pairs
    }
}

impl Default for PriceRequest {
    fn default() -> Self {
        Self::new(DEFAULT_BIDDING_ZONE)
    }
}

/// Response body of the `/price` endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceResponse {
    /// License notice shipped with the data
    pub license_info: String,
    /// UTC Unix timestamps in seconds
    pub unix_seconds: Vec<i64>,
    /// Prices index-aligned with `unix_seconds`, usually EUR/MWh
    pub price: Vec<f64>,
    /// Unit of `price`
    pub unit: String,
    /// Whether the upstream endpoint is deprecated
    pub deprecated: bool,
}

impl PriceResponse {
    /// Number of price points
    pub fn len(&self) -> usize {
        self.unix_seconds.len()
    }

    /// Whether the series holds no price points
    pub fn is_empty(&self) -> bool {
        self.unix_seconds.is_empty()
    }

    /// Check that timestamps and prices line up
    pub fn validate(&self) -> ClientResult<()> {
        if self.unix_seconds.len() != self.price.len() {
            return Err(ClientError::Validation(format!(
                "{} timestamps but {} prices",
                self.unix_seconds.len(),
                self.price.len()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_pairs_default_zone() {
        let request = PriceRequest::default();
        assert_eq!(request.query_pairs(), vec![("bzn", "DE-LU")]);
    }

    #[test]
    fn test_query_pairs_with_range() {
        let request = PriceRequest::new("AT")
            .with_start("2024-01-01")
            .with_end("2024-01-02");
        assert_eq!(
            request.query_pairs(),
            vec![("bzn", "AT"), ("start", "2024-01-01"), ("end", "2024-01-02")]
        );
    }

    #[test]
    fn test_query_pairs_skip_empty_dates() {
        let request = PriceRequest::new("DE-LU").with_start("").with_end("2024-01-02");
        assert_eq!(request.query_pairs(), vec![("bzn", "DE-LU"), ("end", "2024-01-02")]);
    }

    #[test]
    fn test_response_from_wire() {
        let body = r#"{
            "license_info": "CC BY 4.0 (creativecommons.org/licenses/by/4.0) from Bundesnetzagentur | SMARD.de",
            "unix_seconds": [1704067200, 1704070800],
            "price": [89.5, 92.3],
            "unit": "EUR / MWh",
            "deprecated": false
        }"#;
        let response: PriceResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.len(), 2);
        assert_eq!(response.price[1], 92.3);
        assert!(response.validate().is_ok());
    }

    #[test]
    fn test_validate_length_mismatch() {
        let response = PriceResponse {
            license_info: String::new(),
            unix_seconds: vec![1704067200, 1704070800],
            price: vec![89.5],
            unit: "EUR / MWh".to_string(),
            deprecated: false,
        };
        match response.validate() {
            Err(ClientError::Validation(msg)) => assert_eq!(msg, "2 timestamps but 1 prices"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
