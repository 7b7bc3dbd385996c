pub mod app;
pub mod config;
pub mod server;
pub mod services;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use config::AppConfig;
use services::log_buffer::LogCaptureLayer;

/// Install the global subscriber: `RUST_LOG` filter (default `info`),
/// stderr output, and the in-memory buffer behind `/api/logs`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(LogCaptureLayer::new())
        .init();
}

/// Load .env from multiple candidate paths.
fn load_dotenv() {
    let candidates = [".env", "../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::info!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::info!("No .env file found, using system environment variables");
}

/// Load and validate runtime configuration.
pub fn init_foundation() -> Result<AppConfig, anyhow::Error> {
    load_dotenv();

    let config = AppConfig::load()?;
    tracing::info!(
        install_dir = %config.install_dir.display(),
        backend = %config.settings_backend,
        language = %config.ui_language,
        "Configuration loaded (port={})",
        config.server_port
    );
    Ok(config)
}
