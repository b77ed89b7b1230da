//! Server configuration

use energycharts_client::ClientConfig;

/// Default listening port
pub const DEFAULT_PORT: u16 = 8000;

/// Default bind address
pub const DEFAULT_ADDRESS: &str = "0.0.0.0";

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address
    pub address: String,
    /// Port
    pub port: u16,
    /// Upstream client settings
    pub client: ClientConfig,
}

impl ServerConfig {
    /// `address:port` string for binding
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.address, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            client: ClientConfig::default(),
        }
    }
}
