use std::sync::Arc;

use settings_source::ConfigSource;
use software_inventory::InventoryCollector;
use tokio_util::sync::CancellationToken;

use crate::config::AppConfig;
use crate::services::audio_dependencies::build_collector;
use crate::services::audio_settings::build_source;
use crate::services::i18n::Catalog;
use crate::services::views::Views;

/// Application shared state accessible from axum handlers.
#[derive(Clone)]
pub struct SharedState {
    inner: Arc<SharedStateInner>,
}

struct SharedStateInner {
    /// Application configuration (fixed at startup)
    config: AppConfig,
    /// Backend answering audio settings lookups
    settings_source: Box<dyn ConfigSource>,
    /// Software inventory via libsysteminfo.sh
    inventory: InventoryCollector,
    /// Widget templates with the translation catalog
    views: Views,
    /// Cancelled on shutdown
    shutdown_token: CancellationToken,
}

impl SharedState {
    /// Create shared state from a loaded config.
    pub fn new(config: AppConfig) -> Result<Self, anyhow::Error> {
        let catalog = Catalog::load(&config.ui_language)?;
        let settings_source = build_source(&config);
        let inventory = build_collector(&config);

        Ok(Self {
            inner: Arc::new(SharedStateInner {
                settings_source,
                inventory,
                views: Views::new(catalog),
                shutdown_token: CancellationToken::new(),
                config,
            }),
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    pub fn settings_source(&self) -> &dyn ConfigSource {
        self.inner.settings_source.as_ref()
    }

    pub fn inventory(&self) -> &InventoryCollector {
        &self.inner.inventory
    }

    pub fn views(&self) -> &Views {
        &self.inner.views
    }

    pub fn shutdown_token(&self) -> &CancellationToken {
        &self.inner.shutdown_token
    }
}
