//! EnergyChartsClient: HTTP client for the energy-charts.info API
//!
//! Every request is retried with exponential backoff; a single attempt is
//! bounded by a timeout. Timeouts are not retried.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{info, warn};

use crate::client::PriceSource;
use crate::error::{ClientError, ClientResult};
use crate::models::{PriceRequest, PriceResponse};

/// Public energy-charts API root
pub const DEFAULT_BASE_URL: &str = "https://api.energy-charts.info/";

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root; endpoint paths are appended to it
    pub base_url: String,
    /// Maximum number of attempts per request
    pub max_retries: u32,
    /// Timeout of a single attempt
    pub timeout: Duration,
    /// Delay before the second attempt
    pub initial_backoff: Duration,
    /// Upper bound for any delay between attempts
    pub max_backoff: Duration,
}

impl ClientConfig {
    /// Create a configuration for a different API root
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Delay after the given failed attempt (1-based)
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
        self.initial_backoff
            .saturating_mul(factor)
            .min(self.max_backoff)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_retries: 3,
            timeout: Duration::from_secs(10),
            initial_backoff: Duration::from_millis(1000),
            max_backoff: Duration::from_millis(5000),
        }
    }
}

/// Retrying client for the energy-charts.info API.
///
/// Construct one per process and share it behind an `Arc`.
pub struct EnergyChartsClient {
    http_client: Client,
    base_url: Url,
    config: ClientConfig,
}

impl EnergyChartsClient {
    /// Create a new client from configuration
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let mut base = config.base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;
        let http_client = Client::builder().build()?;

        Ok(Self {
            http_client,
            base_url,
            config,
        })
    }

    /// Configuration this client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build the URL of an endpoint with its query string
    pub fn endpoint_url(&self, endpoint: &str, pairs: &[(&str, &str)]) -> ClientResult<Url> {
        let mut url = self
            .base_url
            .join(endpoint)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", endpoint, e)))?;
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs.iter());
        }
        Ok(url)
    }

    /// Fetch and decode any endpoint, retrying failed attempts
    pub async fn fetch_from_endpoint<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        pairs: &[(&str, &str)],
    ) -> ClientResult<T> {
        let url = self.endpoint_url(endpoint, pairs)?;
        let mut attempt = 1;

        loop {
            info!("Fetching data from {} (attempt {})", url, attempt);
            match self.fetch_once(&url).await {
                Ok(value) => return Ok(value),
                Err(e) if attempt < self.config.max_retries && e.is_retryable() => {
                    let delay = self.config.backoff_delay(attempt);
                    warn!(
                        "Attempt {} failed, retrying in {}ms: {}",
                        attempt,
                        delay.as_millis(),
                        e
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn fetch_once<T: DeserializeOwned>(&self, url: &Url) -> ClientResult<T> {
        let response = self
            .http_client
            .get(url.clone())
            .timeout(self.config.timeout)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response.json::<T>().await.map_err(|e| self.classify(e))
    }

    fn classify(&self, error: reqwest::Error) -> ClientError {
        if error.is_timeout() {
            ClientError::Timeout(self.config.timeout.as_millis())
        } else {
            ClientError::Http(error)
        }
    }
}

#[async_trait]
impl PriceSource for EnergyChartsClient {
    async fn get_prices(&self, request: &PriceRequest) -> ClientResult<PriceResponse> {
        let response: PriceResponse = self
            .fetch_from_endpoint("price", &request.query_pairs())
            .await?;
        response.validate()?;
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_doubles_and_caps() {
        let config = ClientConfig::default();
        assert_eq!(config.backoff_delay(1), Duration::from_millis(1000));
        assert_eq!(config.backoff_delay(2), Duration::from_millis(2000));
        assert_eq!(config.backoff_delay(3), Duration::from_millis(4000));
        assert_eq!(config.backoff_delay(4), Duration::from_millis(5000));
        assert_eq!(config.backoff_delay(40), Duration::from_millis(5000));
    }

    #[test]
    fn test_endpoint_url() {
        let client = EnergyChartsClient::new(ClientConfig::default()).unwrap();
        let request = PriceRequest::new("DE-LU").with_start("2024-01-01");
        let url = client.endpoint_url("price", &request.query_pairs()).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.energy-charts.info/price?bzn=DE-LU&start=2024-01-01"
        );
    }

    #[test]
    fn test_base_url_without_trailing_slash() {
        let config = ClientConfig::with_base_url("http://127.0.0.1:9000/api");
        let client = EnergyChartsClient::new(config).unwrap();
        let url = client.endpoint_url("price", &[("bzn", "AT")]).unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:9000/api/price?bzn=AT");
    }

    #[test]
    fn test_invalid_base_url() {
        let result = EnergyChartsClient::new(ClientConfig::with_base_url("not a url"));
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }
}
