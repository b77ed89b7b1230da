//! HTTP server for the price adapter

use super::handler::{prices_handler, status_handler};
use super::middleware::cors;
use crate::config::ServerConfig;
use crate::rdf::ObservationGraphBuilder;
use axum::routing::get;
use axum::Router;
use energycharts_client::PriceSource;
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use tracing::{info, Level};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    /// Where price series come from
    pub prices: Arc<dyn PriceSource>,
    /// Series → observation graph mapping
    pub builder: Arc<ObservationGraphBuilder>,
}

impl AppState {
    /// State with the default observation IRIs
    pub fn new(prices: Arc<dyn PriceSource>) -> Self {
        Self {
            prices,
            builder: Arc::new(ObservationGraphBuilder::default()),
        }
    }
}

/// Build the application router
///
/// Every request is logged at `info` with method, path, status and latency.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(status_handler))
        .route("/prices", get(prices_handler))
        .layer(axum::middleware::from_fn(cors))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
        .with_state(state)
}

/// HTTP server serving the adapter API
pub struct HttpServer {
    state: AppState,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self { state, config }
    }

    /// Start the HTTP server and run until Ctrl-C
    pub async fn start(&self) -> std::io::Result<()> {
        let app = router(self.state.clone());

        let addr = self.config.socket_addr();
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        info!("Energy-charts RDF adapter listening on http://{}", listener.local_addr()?);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("Server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
