//! Service configuration loader for Mergington.
//!
//! Reads `config.toml` from the data directory (`~/.mergington/` by default)
//! and deserializes it into [`ServiceConfig`]. Falls back to sensible defaults
//! when the file is missing or malformed.

use std::path::{Path, PathBuf};

use mergington_types::config::ServiceConfig;

/// Resolve the data directory.
///
/// `$MERGINGTON_DATA_DIR` wins, then `~/.mergington`, then `./.mergington`.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("MERGINGTON_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".mergington");
    }

    PathBuf::from(".mergington")
}

/// Default location of the config file inside `data_dir`.
pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join("config.toml")
}

/// Load service configuration from `config_path`.
///
/// - If the file does not exist, returns [`ServiceConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_service_config(config_path: &Path) -> ServiceConfig {
    let content = match tokio::fs::read_to_string(config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config found at {}, using defaults", config_path.display());
            return ServiceConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return ServiceConfig::default();
        }
    };

    match toml::from_str::<ServiceConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            ServiceConfig::default()
        }
    }
}
