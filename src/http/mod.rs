//! HTTP API
//!
//! - `GET /` service descriptor
//! - `GET /prices` price series as JSON or RDF, chosen by the Accept header

pub mod error;
pub mod handler;
pub mod middleware;
pub mod negotiation;
pub mod server;

pub use error::{ApiError, ApiResult, FETCH_FAILED_MESSAGE};
pub use handler::{PricesQuery, SERVICE_NAME};
pub use negotiation::{negotiate, parse_accept_header, MediaRange, ResponseFormat};
pub use server::{router, AppState, HttpServer};
