//! Typed access to disk2iso configuration values.
//!
//! A [`ConfigSource`] answers `get_bool` / `get_int` for a key with a
//! declared default. Two backends exist: [`ScriptSource`] asks
//! `libsettings.sh` once per key, [`FileSource`] reads the shell-style
//! config file directly.
//!
//! Soft failures (missing key, empty answer, unparsable token) keep the
//! default inside the lookup. Hard failures (the backend itself is
//! unreachable) surface as [`SourceError`] so the caller can decide on a
//! fallback for the whole set of values.

pub mod file;
pub mod parse;
pub mod script;

use std::path::PathBuf;

use async_trait::async_trait;

pub use file::FileSource;
pub use script::ScriptSource;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("settings script failed: {0}")]
    Shell(#[from] shell_bridge::ShellError),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A backend that resolves configuration keys.
#[async_trait]
pub trait ConfigSource: Send + Sync {
    /// Short backend name for logs.
    fn kind(&self) -> &'static str;

    /// Raw value for `key`, `None` when the backend has no usable answer.
    ///
    /// `default` is the textual default, forwarded to backends that take one.
    async fn lookup(&self, key: &str, default: &str) -> Result<Option<String>, SourceError>;

    /// Boolean interpretation of a raw value for this backend.
    fn parse_bool(&self, raw: &str) -> bool;

    async fn get_bool(&self, key: &str, default: bool) -> Result<bool, SourceError> {
        let fallback = if default { "true" } else { "false" };
        Ok(match self.lookup(key, fallback).await? {
            Some(raw) => self.parse_bool(&raw),
            None => default,
        })
    }

    async fn get_int(&self, key: &str, default: i64) -> Result<i64, SourceError> {
        let fallback = default.to_string();
        let raw = self.lookup(key, &fallback).await?;
        Ok(match raw.as_deref().map(parse::parse_int) {
            Some(Some(value)) => value,
            Some(None) => {
                tracing::warn!(source = self.kind(), key, raw = ?raw, "Not an integer, keeping default");
                default
            }
            None => default,
        })
    }
}
