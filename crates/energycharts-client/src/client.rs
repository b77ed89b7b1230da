//! PriceSource trait, the seam between request handling and the upstream API

use async_trait::async_trait;

use crate::error::ClientResult;
use crate::models::{PriceRequest, PriceResponse};

/// Anything that can produce a validated price series.
///
/// Implemented by:
/// - `EnergyChartsClient` fetches from the energy-charts.info API with retries
/// - test doubles that serve canned series
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetch the price series for a bidding zone and date range
    async fn get_prices(&self, request: &PriceRequest) -> ClientResult<PriceResponse>;
}
