use clap::Parser;
use energycharts_client::{ClientConfig, EnergyChartsClient, DEFAULT_BASE_URL};
use energycharts_rdf::config::{DEFAULT_ADDRESS, DEFAULT_PORT};
use energycharts_rdf::{AppState, HttpServer, ServerConfig};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "energycharts-rdf", version, about = "Energy-charts price data as RDF")]
struct Cli {
    /// Port to listen on
    #[arg(long, default_value_t = DEFAULT_PORT, env = "PORT")]
    port: u16,

    /// Address to bind
    #[arg(long, default_value = DEFAULT_ADDRESS, env = "BIND_ADDRESS")]
    bind: String,

    /// Root of the energy-charts API
    #[arg(long, default_value = DEFAULT_BASE_URL, env = "ENERGY_CHARTS_API_URL")]
    api_base_url: String,

    /// Attempts per upstream request
    #[arg(long, default_value_t = 3, env = "ENERGY_CHARTS_MAX_RETRIES")]
    max_retries: u32,

    /// Timeout of one upstream attempt in milliseconds
    #[arg(long, default_value_t = 10_000, env = "ENERGY_CHARTS_TIMEOUT_MS")]
    timeout_ms: u64,
}

impl Cli {
    fn into_config(self) -> ServerConfig {
        ServerConfig {
            address: self.bind,
            port: self.port,
            client: ClientConfig {
                base_url: self.api_base_url,
                max_retries: self.max_retries.max(1),
                timeout: Duration::from_millis(self.timeout_ms),
                ..ClientConfig::default()
            },
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Cli::parse().into_config();
    info!(
        "Energy-charts RDF adapter v{} (upstream {})",
        energycharts_rdf::version(),
        config.client.base_url
    );

    let client = EnergyChartsClient::new(config.client.clone())?;
    let state = AppState::new(Arc::new(client));

    HttpServer::new(config, state).start().await?;
    Ok(())
}
