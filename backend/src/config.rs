//! Runtime configuration, read from command-line flags with environment
//! variable fallbacks.

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_IP_LOOKUP_URL: &str = "https://ipapi.co/json/";

#[derive(Debug, Clone, Parser)]
#[command(name = "heritage-hub")]
#[command(about = "Community temple heritage submissions: location resolution, storage and reporting")]
pub struct Config {
    /// Address the HTTP server binds to
    #[arg(long, env = "HERITAGE_HOST", default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, env = "HERITAGE_PORT", default_value_t = 8080)]
    pub port: u16,

    /// SQLite database file; created with its schema on first start
    #[arg(long, env = "HERITAGE_DATABASE", default_value = "temple_heritage.db")]
    pub database: PathBuf,

    /// IP geolocation endpoint queried by `POST /api/location/ip`
    #[arg(long, env = "HERITAGE_IP_LOOKUP_URL", default_value = DEFAULT_IP_LOOKUP_URL)]
    pub ip_lookup_url: String,

    #[arg(long, env = "HERITAGE_IP_LOOKUP_TIMEOUT_SECS", default_value_t = 5)]
    pub ip_lookup_timeout_secs: u64,

    /// Upper bound on the bytes of a single submission, in megabytes
    #[arg(long, env = "HERITAGE_MAX_UPLOAD_MB", default_value_t = 50)]
    pub max_upload_mb: usize,
}

impl Config {
    pub fn bind_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }

    pub fn ip_lookup_timeout(&self) -> Duration {
        Duration::from_secs(self.ip_lookup_timeout_secs)
    }

    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb * 1024 * 1024
    }
}
