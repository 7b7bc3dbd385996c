//! Runtime application configuration loaded from the environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use super::SettingsBackend;
use super::defaults::get_default;
use super::validation::validate_setting;

/// Runtime configuration, fixed for the process lifetime.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_port: u16,
    pub bind_address: IpAddr,
    pub install_dir: PathBuf,
    pub config_file: PathBuf,
    pub shell: PathBuf,
    pub settings_backend: SettingsBackend,
    pub settings_namespace: String,
    pub settings_timeout: Duration,
    pub inventory_timeout: Duration,
    pub ui_language: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let install_dir = PathBuf::from("/opt/disk2iso");
        Self {
            server_port: 8080,
            bind_address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            config_file: default_config_file(&install_dir),
            install_dir,
            shell: PathBuf::from("/bin/bash"),
            settings_backend: SettingsBackend::Script,
            settings_namespace: "disk2iso".into(),
            settings_timeout: Duration::from_secs(2),
            inventory_timeout: Duration::from_secs(10),
            ui_language: "de".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from process environment variables.
    pub fn load() -> Result<Self, anyhow::Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup. Unset or empty keys use defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let g = |key: &str| -> Result<String, anyhow::Error> {
            let value = lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| get_default(key).unwrap_or_default().to_string());
            validate_setting(key, &value)
                .map_err(|e| anyhow::anyhow!("invalid value for {key} ({value:?}): {e}"))?;
            Ok(value)
        };

        let install_dir = PathBuf::from(g("DISK2ISO_INSTALL_DIR")?);
        let config_file = match g("DISK2ISO_CONFIG_FILE")?.as_str() {
            "" => default_config_file(&install_dir),
            path => PathBuf::from(path),
        };

        Ok(Self {
            server_port: g("SERVER_PORT")?.parse()?,
            bind_address: g("BIND_ADDRESS")?.parse()?,
            config_file,
            install_dir,
            shell: PathBuf::from(g("DISK2ISO_SHELL")?),
            settings_backend: g("SETTINGS_BACKEND")?
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e))?,
            settings_namespace: g("SETTINGS_NAMESPACE")?,
            settings_timeout: Duration::from_secs(g("SETTINGS_TIMEOUT_SECS")?.parse()?),
            inventory_timeout: Duration::from_secs(g("INVENTORY_TIMEOUT_SECS")?.parse()?),
            ui_language: g("UI_LANGUAGE")?,
        })
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_address, self.server_port)
    }

    /// `libsettings.sh` under the installation root.
    pub fn settings_library(&self) -> PathBuf {
        self.install_dir.join("lib").join("libsettings.sh")
    }

    /// `libsysteminfo.sh` under the installation root.
    pub fn systeminfo_library(&self) -> PathBuf {
        self.install_dir.join("lib").join("libsysteminfo.sh")
    }
}

fn default_config_file(install_dir: &std::path::Path) -> PathBuf {
    install_dir.join("conf").join("config.sh")
}
