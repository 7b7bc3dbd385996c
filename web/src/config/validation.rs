//! Setting value validation.

use std::net::IpAddr;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use super::SettingsBackend;
use crate::services::i18n::SUPPORTED_LANGUAGES;

static RE_NAMESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        "SERVER_PORT" => validate_int_range(value, 1, 65535)?,
        "BIND_ADDRESS" => {
            value
                .parse::<IpAddr>()
                .map_err(|_| "must be an IPv4 or IPv6 address")?;
        }
        "DISK2ISO_INSTALL_DIR" | "DISK2ISO_SHELL" => validate_absolute_path(value)?,
        "DISK2ISO_CONFIG_FILE" => {
            if !value.is_empty() {
                validate_absolute_path(value)?;
            }
        }
        "SETTINGS_BACKEND" => {
            value.parse::<SettingsBackend>()?;
        }
        "SETTINGS_NAMESPACE" => {
            if !RE_NAMESPACE.is_match(value) {
                return Err("must be a shell identifier ([A-Za-z_][A-Za-z0-9_]*)".into());
            }
        }
        "SETTINGS_TIMEOUT_SECS" | "INVENTORY_TIMEOUT_SECS" => validate_int_range(value, 1, 300)?,
        "UI_LANGUAGE" => {
            if !SUPPORTED_LANGUAGES.contains(&value) {
                return Err(format!("must be one of {}", SUPPORTED_LANGUAGES.join(", ")));
            }
        }
        _ => {}
    }
    Ok(())
}

fn validate_int_range(value: &str, min: i64, max: i64) -> Result<(), String> {
    let v: i64 = value.parse().map_err(|_| "must be an integer")?;
    if v < min || v > max {
        return Err(format!("must be between {min} and {max}"));
    }
    Ok(())
}

fn validate_absolute_path(value: &str) -> Result<(), String> {
    if !Path::new(value).is_absolute() {
        return Err("must be an absolute path".into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_port() {
        assert!(validate_setting("SERVER_PORT", "8080").is_ok());
        assert!(validate_setting("SERVER_PORT", "0").is_err());
        assert!(validate_setting("SERVER_PORT", "70000").is_err());
        assert!(validate_setting("SERVER_PORT", "http").is_err());
    }

    #[test]
    fn test_valid_backend() {
        assert!(validate_setting("SETTINGS_BACKEND", "script").is_ok());
        assert!(validate_setting("SETTINGS_BACKEND", "file").is_ok());
        assert!(validate_setting("SETTINGS_BACKEND", "database").is_err());
    }

    #[test]
    fn test_valid_paths() {
        assert!(validate_setting("DISK2ISO_INSTALL_DIR", "/opt/disk2iso").is_ok());
        assert!(validate_setting("DISK2ISO_INSTALL_DIR", "opt/disk2iso").is_err());
        assert!(validate_setting("DISK2ISO_CONFIG_FILE", "").is_ok());
        assert!(validate_setting("DISK2ISO_CONFIG_FILE", "conf/config.sh").is_err());
    }

    #[test]
    fn test_valid_namespace_and_language() {
        assert!(validate_setting("SETTINGS_NAMESPACE", "disk2iso").is_ok());
        assert!(validate_setting("SETTINGS_NAMESPACE", "_disk2iso_2").is_ok());
        assert!(validate_setting("SETTINGS_NAMESPACE", "disk2iso; rm").is_err());
        assert!(validate_setting("SETTINGS_NAMESPACE", "disk2iso.audio").is_err());
        assert!(validate_setting("SETTINGS_NAMESPACE", "disk-2iso").is_err());
        assert!(validate_setting("SETTINGS_NAMESPACE", "2disk").is_err());
        assert!(validate_setting("UI_LANGUAGE", "en").is_ok());
        assert!(validate_setting("UI_LANGUAGE", "fr").is_err());
    }

    #[test]
    fn test_valid_timeouts_and_address() {
        assert!(validate_setting("SETTINGS_TIMEOUT_SECS", "2").is_ok());
        assert!(validate_setting("INVENTORY_TIMEOUT_SECS", "0").is_err());
        assert!(validate_setting("BIND_ADDRESS", "127.0.0.1").is_ok());
        assert!(validate_setting("BIND_ADDRESS", "::").is_ok());
        assert!(validate_setting("BIND_ADDRESS", "localhost").is_err());
    }
}
