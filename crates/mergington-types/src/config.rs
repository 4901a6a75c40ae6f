//! Service configuration types.
//!
//! `ServiceConfig` represents the `config.toml` that controls the listen
//! address, static asset directory, capacity policy and seed catalog.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level configuration for the activity directory service.
///
/// Loaded from `~/.mergington/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Host to bind the HTTP server to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory served under `/static`.
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    /// Reject signups once an activity reaches `max_participants`.
    #[serde(default = "default_enforce_capacity")]
    pub enforce_capacity: bool,

    /// Optional TOML seed catalog replacing the built-in activities.
    #[serde(default)]
    pub seed_file: Option<PathBuf>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_enforce_capacity() -> bool {
    true
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            enforce_capacity: default_enforce_capacity(),
            seed_file: None,
        }
    }
}

impl ServiceConfig {
    /// `host:port` string suitable for `TcpListener::bind`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
