//! All setting definitions with their default values.

use std::collections::HashMap;
use std::sync::LazyLock;

type DefTuple = (&'static str, &'static str, &'static str);

const DEFS: &[DefTuple] = &[
    ("SERVER_PORT", "8080", "HTTP port of the widget server"),
    ("BIND_ADDRESS", "0.0.0.0", "IP address the server listens on"),
    ("DISK2ISO_INSTALL_DIR", "/opt/disk2iso", "disk2iso installation root"),
    (
        "DISK2ISO_CONFIG_FILE",
        "",
        "Config file for the file backend (empty: <install dir>/conf/config.sh)",
    ),
    ("DISK2ISO_SHELL", "/bin/bash", "Shell used to call the bash libraries"),
    ("SETTINGS_BACKEND", "script", "Audio settings source: script or file"),
    ("SETTINGS_NAMESPACE", "disk2iso", "Namespace passed to settings_get_value_conf"),
    ("SETTINGS_TIMEOUT_SECS", "2", "Timeout of one settings lookup"),
    ("INVENTORY_TIMEOUT_SECS", "10", "Timeout of the software inventory call"),
    ("UI_LANGUAGE", "de", "Language of rendered widgets: de or en"),
];

/// A single setting definition.
#[derive(Debug, Clone)]
pub struct SettingDef {
    pub key: &'static str,
    pub default: &'static str,
    pub description: &'static str,
}

/// Global setting definitions indexed by key.
pub static DEFAULT_SETTINGS: LazyLock<HashMap<&'static str, SettingDef>> = LazyLock::new(|| {
    DEFS.iter()
        .map(|&(key, default, description)| {
            (
                key,
                SettingDef {
                    key,
                    default,
                    description,
                },
            )
        })
        .collect()
});

/// Get the default value for a setting key, or `None` if not defined.
pub fn get_default(key: &str) -> Option<&'static str> {
    DEFAULT_SETTINGS.get(key).map(|d| d.default)
}
