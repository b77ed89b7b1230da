//! Energy-charts RDF adapter
//!
//! Serves day-ahead electricity prices from the energy-charts.info API as
//! RDF: every price point becomes a SOSA observation whose result is a QUDT
//! quantity in EUR/kWh.
//!
//! # Modules
//!
//! - [`rdf`]: namespaces, vocabulary, observation mapping and serializers
//! - [`http`]: content negotiation and the axum API
//! - [`config`]: server configuration
//!
//! The upstream client lives in the `energycharts-client` crate.
//!
//! ## Example Usage
//!
//! ```rust
//! use energycharts_rdf::prices_to_rdf;
//! use energycharts_client::PriceResponse;
//!
//! let response = PriceResponse {
//!     license_info: "CC BY 4.0".to_string(),
//!     unix_seconds: vec![1704067200],
//!     price: vec![89.5],
//!     unit: "EUR / MWh".to_string(),
//!     deprecated: false,
//! };
//!
//! let ntriples = prices_to_rdf(&response, Some("application/n-triples")).unwrap();
//! assert!(ntriples.contains("<http://www.w3.org/ns/sosa/Observation>"));
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod http;
pub mod rdf;

pub use config::ServerConfig;

pub use http::{negotiate, router, ApiError, AppState, HttpServer, ResponseFormat};

pub use rdf::{
    prices_to_rdf, ConversionError, ConversionResult,
    NamespaceManager, ObservationGraphBuilder, PriceSeries,
    RdfSerializer, RdfSyntax, ENERGY_CHARTS,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
