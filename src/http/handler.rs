//! HTTP handlers for the price adapter API

use super::error::ApiResult;
use super::negotiation::ResponseFormat;
use super::server::AppState;
use crate::rdf::{PriceSeries, RdfSerializer, SerializedRdf, ENERGY_CHARTS};
use axum::extract::{Query, State};
use axum::http::header::{CONTENT_TYPE, VARY};
use axum::response::{IntoResponse, Response};
use axum::Json;
use energycharts_client::{PriceRequest, DEFAULT_BIDDING_ZONE};
use serde_json::json;
use tracing::{debug, info};

/// Service name reported by the status endpoint
pub const SERVICE_NAME: &str = "Energycharts RDF Adapter";

/// Query string of `GET /prices`
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PricesQuery {
    pub bzn: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
}

impl PricesQuery {
    /// Collect the known parameters from decoded query pairs.
    ///
    /// A repeated key keeps its first value; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "bzn" => &mut query.bzn,
                "start" => &mut query.start,
                "end" => &mut query.end,
                _ => continue,
            };
            slot.get_or_insert(value);
        }
        query
    }

    /// Upstream request for this query; a missing or empty zone means `DE-LU`
    pub fn into_request(self) -> PriceRequest {
        let bzn = self
            .bzn
            .filter(|bzn| !bzn.is_empty())
            .unwrap_or_else(|| DEFAULT_BIDDING_ZONE.to_string());

        PriceRequest {
            bzn,
            start: self.start,
            end: self.end,
        }
    }
}

/// Handler for `GET /`
pub async fn status_handler() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": SERVICE_NAME,
        "endpoints": ["/prices"],
        "version": crate::VERSION,
    }))
}

/// Handler for `GET /prices`
///
/// Fetches the series upstream, then either passes the JSON through or
/// renders it as RDF in the negotiated syntax.
pub async fn prices_handler(
    State(state): State<AppState>,
    format: ResponseFormat,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ApiResult<Response> {
    let request = PricesQuery::from_pairs(pairs).into_request();
    info!(
        "Fetching prices for {} ({:?} .. {:?}) as {}",
        request.bzn,
        request.start,
        request.end,
        format.content_type()
    );

    let prices = state.prices.get_prices(&request).await?;

    let syntax = match format {
        ResponseFormat::Json => return Ok(Json(prices).into_response()),
        ResponseFormat::Rdf(syntax) => syntax,
    };

    let builder = state.builder.clone();
    let document = tokio::task::spawn_blocking(move || -> ApiResult<SerializedRdf> {
        let quads = builder.build(PriceSeries::from(&prices))?;
        Ok(RdfSerializer::serialize(&quads, &ENERGY_CHARTS, syntax)?)
    })
    .await??;

    debug!("Rendered {} bytes of {}", document.bytes.len(), syntax);

    Ok((
        [(CONTENT_TYPE, document.content_type), (VARY, "Accept")],
        document.bytes,
    )
        .into_response())
}
