//! Command-line and environment configuration

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(name = "brahms", version, about = "Search a music catalog and file tracks into playlists")]
pub struct Config {
    /// Base URL of the catalog service
    #[arg(long, env = "BRAHMS_SERVER_URL", default_value = "http://127.0.0.1:5000")]
    pub server_url: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "BRAHMS_REQUEST_TIMEOUT_SECS", default_value_t = 10)]
    pub request_timeout_secs: u64,

    /// Directory for the rolling log files
    #[arg(long, env = "BRAHMS_LOG_DIR", default_value = ".logs")]
    pub log_dir: PathBuf,
}

impl Config {
    pub fn base_url(&self) -> &str {
        self.server_url.trim_end_matches('/')
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
