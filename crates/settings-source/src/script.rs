//! Settings looked up through `libsettings.sh`.

use async_trait::async_trait;
use shell_bridge::BashLibrary;

use crate::{ConfigSource, SourceError, parse};

/// Function in `libsettings.sh` that prints one config value.
pub const LOOKUP_FUNCTION: &str = "settings_get_value_conf";

/// Asks the settings library for each key: `settings_get_value_conf <ns> <key> <default>`.
#[derive(Debug, Clone)]
pub struct ScriptSource {
    library: BashLibrary,
    namespace: String,
}

impl ScriptSource {
    pub fn new(library: BashLibrary, namespace: impl Into<String>) -> Self {
        Self {
            library,
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

#[async_trait]
impl ConfigSource for ScriptSource {
    fn kind(&self) -> &'static str {
        "script"
    }

    async fn lookup(&self, key: &str, default: &str) -> Result<Option<String>, SourceError> {
        let output = self
            .library
            .call(LOOKUP_FUNCTION, &[self.namespace.as_str(), key, default])
            .await?;

        if !output.success() {
            tracing::warn!(
                key,
                code = ?output.code,
                stderr = output.stderr.trim(),
                "Settings lookup failed, keeping default"
            );
            return Ok(None);
        }

        let value = output.stdout_trimmed();
        if value.is_empty() {
            return Ok(None);
        }
        Ok(Some(value.to_string()))
    }

    fn parse_bool(&self, raw: &str) -> bool {
        parse::parse_strict_bool(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::time::Duration;

    /// Fake `libsettings.sh` backed by a case statement.
    fn fake_library(cases: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".sh")
            .tempfile()
            .expect("temp library");
        write!(
            file,
            "settings_get_value_conf() {{\n  case \"$1:$2\" in\n{cases}\n    *) echo \"$3\" ;;\n  esac\n}}\n"
        )
        .expect("write library");
        file
    }

    fn source(lib: &tempfile::NamedTempFile) -> ScriptSource {
        ScriptSource::new(BashLibrary::new(lib.path()), "disk2iso")
    }

    #[tokio::test]
    async fn reads_values_from_library() {
        let lib = fake_library(
            "    disk2iso:AUDIO_ENABLED) echo ' TRUE ' ;;\n    disk2iso:MP3_QUALITY) echo 5 ;;",
        );
        let src = source(&lib);
        assert!(src.get_bool("AUDIO_ENABLED", false).await.unwrap());
        assert_eq!(src.get_int("MP3_QUALITY", 2).await.unwrap(), 5);
    }

    #[tokio::test]
    async fn anything_but_true_is_false() {
        let lib = fake_library("    disk2iso:AUDIO_ENABLED) echo yes ;;");
        assert!(!source(&lib).get_bool("AUDIO_ENABLED", true).await.unwrap());
    }

    #[tokio::test]
    async fn default_is_forwarded_to_library() {
        let lib = fake_library("");
        let src = source(&lib);
        assert_eq!(src.get_int("MP3_QUALITY", 4).await.unwrap(), 4);
        assert!(!src.get_bool("AUDIO_ENABLED", false).await.unwrap());
    }

    #[tokio::test]
    async fn empty_output_keeps_default() {
        let lib = fake_library("    disk2iso:AUDIO_ENABLED) echo '' ;;");
        assert!(source(&lib).get_bool("AUDIO_ENABLED", true).await.unwrap());
    }

    #[tokio::test]
    async fn non_zero_exit_keeps_default() {
        let lib = fake_library("    disk2iso:MP3_QUALITY) echo 9; return 1 ;;");
        assert_eq!(source(&lib).get_int("MP3_QUALITY", 2).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn malformed_integer_keeps_default() {
        let lib = fake_library("    disk2iso:MP3_QUALITY) echo abc ;;");
        assert_eq!(source(&lib).get_int("MP3_QUALITY", 2).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn missing_library_keeps_default() {
        let src = ScriptSource::new(BashLibrary::new("/nonexistent/libsettings.sh"), "disk2iso");
        assert!(src.get_bool("AUDIO_ENABLED", true).await.unwrap());
        assert_eq!(src.get_int("MP3_QUALITY", 2).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn timeout_is_a_hard_error() {
        let lib = fake_library("    disk2iso:AUDIO_ENABLED) sleep 5 ;;");
        let src = ScriptSource::new(
            BashLibrary::new(lib.path()).with_timeout(Duration::from_millis(200)),
            "disk2iso",
        );
        let err = src.get_bool("AUDIO_ENABLED", true).await.unwrap_err();
        assert!(matches!(err, SourceError::Shell(_)));
    }
}
