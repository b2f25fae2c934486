//! Server Config

use clap::Args;

/// Server runtime network settings.
#[derive(Debug, Args)]
pub struct ServerRuntimeConfig {
    /// Address the storefront API listens on
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port the storefront API listens on
    #[arg(short, long, env = "SERVER_PORT", default_value = "8698")]
    pub port: u16,
}

impl ServerRuntimeConfig {
    /// `host:port` for the listener.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
