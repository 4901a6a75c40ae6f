//! Application state shared by CLI commands and REST API handlers.

use std::path::Path;
use std::sync::Arc;

use mergington_core::service::activity::{ActivityService, CapacityPolicy};
use mergington_infra::seed::build_registry;
use mergington_types::config::ServiceConfig;

/// Shared application state holding the activity service.
///
/// The registry is built once here and shared with every handler through
/// the `Arc`; there is no process-wide global.
#[derive(Clone)]
pub struct AppState {
    pub activity_service: Arc<ActivityService>,
    pub config: Arc<ServiceConfig>,
}

impl AppState {
    /// Build the registry from the configured seed and wire the service.
    ///
    /// A relative `seed_file` is resolved against `config_dir`.
    pub async fn init(config: ServiceConfig, config_dir: &Path) -> anyhow::Result<Self> {
        let seed_path = config.seed_file.as_ref().map(|p| {
            if p.is_relative() {
                config_dir.join(p)
            } else {
                p.clone()
            }
        });

        let registry = build_registry(seed_path.as_deref()).await?;
        let capacity = CapacityPolicy::from_enforce_flag(config.enforce_capacity);

        tracing::debug!(
            activities = registry.len(),
            ?capacity,
            "activity service ready"
        );

        Ok(Self::new(ActivityService::new(registry, capacity), config))
    }

    pub fn new(activity_service: ActivityService, config: ServiceConfig) -> Self {
        Self {
            activity_service: Arc::new(activity_service),
            config: Arc::new(config),
        }
    }
}
