//! Energycharts client: fetches day-ahead price series from energy-charts.info
//!
//! The client is an explicitly constructed value: callers build an
//! [`EnergyChartsClient`] from a [`ClientConfig`] and hand it around behind the
//! [`PriceSource`] trait, so request handlers can be exercised with fakes.
//!
//! # Quick Start
//!
//! ```no_run
//! use energycharts_client::{ClientConfig, EnergyChartsClient, PriceRequest, PriceSource};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = EnergyChartsClient::new(ClientConfig::default()).unwrap();
//!     let request = PriceRequest::new("DE-LU").with_start("2024-01-01");
//!     let prices = client.get_prices(&request).await.unwrap();
//!     println!("{} price points", prices.len());
//! }
//! ```

pub mod client;
pub mod error;
pub mod models;
pub mod remote;

pub use client::PriceSource;
pub use error::{ClientError, ClientResult};
pub use models::{PriceRequest, PriceResponse, DEFAULT_BIDDING_ZONE};
pub use remote::{ClientConfig, EnergyChartsClient, DEFAULT_BASE_URL};
