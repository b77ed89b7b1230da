//! Error responses of the HTTP API

use crate::rdf::{MappingError, SerializeError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use energycharts_client::ClientError;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Body text of every failed `/prices` request
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch energy price data";

/// Request handling errors
///
/// Clients only ever see a generic 500; the detail goes to the log.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Upstream request failed or returned an unusable payload
    #[error("Upstream error: {0}")]
    Fetch(#[from] ClientError),

    /// Price series could not be mapped to observations
    #[error("Mapping error: {0}")]
    Mapping(#[from] MappingError),

    /// Observations could not be written in the negotiated syntax
    #[error("Serialization error: {0}")]
    Serialize(#[from] SerializeError),

    /// Blocking serialization task panicked or was cancelled
    #[error("Serialization task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("Error fetching prices: {}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": FETCH_FAILED_MESSAGE })),
        )
            .into_response()
    }
}
