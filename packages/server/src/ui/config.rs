//! Server configuration from command-line flags and environment.

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "irori-server", version, about = "Single-room WebSocket chat server")]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "HTTP_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "HTTP_PORT", default_value_t = 3000)]
    pub port: u16,

    /// Default log level when RUST_LOG is not set
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl ServerConfig {
    /// `host:port` string to bind the listener on
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
