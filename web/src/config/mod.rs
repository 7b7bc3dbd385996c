//! Configuration management: defaults, validation, loading from the environment.

pub mod app_config;
pub mod defaults;
pub mod validation;

pub use app_config::AppConfig;

use std::fmt;
use std::str::FromStr;

/// Where audio settings are read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsBackend {
    /// `settings_get_value_conf` from `libsettings.sh`, one call per key.
    Script,
    /// The shell-style config file, parsed in-process.
    File,
}

impl FromStr for SettingsBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "script" => Ok(Self::Script),
            "file" => Ok(Self::File),
            other => Err(format!("unknown settings backend '{other}'")),
        }
    }
}

impl fmt::Display for SettingsBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Script => "script",
            Self::File => "file",
        })
    }
}
