//! Audio CD settings shown in the settings widget.

use serde::Serialize;
use settings_source::{ConfigSource, FileSource, ScriptSource, SourceError};
use shell_bridge::BashLibrary;

use crate::config::{AppConfig, SettingsBackend};

pub const AUDIO_ENABLED_KEY: &str = "AUDIO_ENABLED";
pub const MP3_QUALITY_KEY: &str = "MP3_QUALITY";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AudioSettings {
    pub audio_enabled: bool,
    /// LAME VBR quality, 0 (best) to 9 (smallest).
    pub mp3_quality: i64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            audio_enabled: true,
            mp3_quality: 2,
        }
    }
}

/// Build the configured settings backend.
pub fn build_source(config: &AppConfig) -> Box<dyn ConfigSource> {
    match config.settings_backend {
        SettingsBackend::Script => {
            let library = BashLibrary::new(config.settings_library())
                .with_shell(&config.shell)
                .with_timeout(config.settings_timeout);
            Box::new(ScriptSource::new(library, config.settings_namespace.clone()))
        }
        SettingsBackend::File => Box::new(FileSource::new(&config.config_file)),
    }
}

/// Resolve the audio settings, never failing.
///
/// Any hard backend failure discards values read so far and yields
/// [`AudioSettings::default`]; the failure is only visible in the log.
pub async fn resolve_settings(source: &dyn ConfigSource) -> AudioSettings {
    match try_resolve_settings(source).await {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!(
                backend = source.kind(),
                error = %e,
                "Failed to read audio settings, using defaults"
            );
            AudioSettings::default()
        }
    }
}

pub async fn try_resolve_settings(source: &dyn ConfigSource) -> Result<AudioSettings, SourceError> {
    let defaults = AudioSettings::default();
    Ok(AudioSettings {
        audio_enabled: source
            .get_bool(AUDIO_ENABLED_KEY, defaults.audio_enabled)
            .await?,
        mp3_quality: source.get_int(MP3_QUALITY_KEY, defaults.mp3_quality).await?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use std::time::Duration;

    fn file_config(path: &Path) -> AppConfig {
        AppConfig {
            settings_backend: SettingsBackend::File,
            config_file: path.to_path_buf(),
            ..AppConfig::default()
        }
    }

    fn script_config(install_dir: &Path) -> AppConfig {
        AppConfig {
            settings_backend: SettingsBackend::Script,
            install_dir: install_dir.to_path_buf(),
            settings_timeout: Duration::from_millis(300),
            ..AppConfig::default()
        }
    }

    fn write_settings_library(install_dir: &Path, body: &str) {
        let lib_dir = install_dir.join("lib");
        std::fs::create_dir_all(&lib_dir).unwrap();
        std::fs::write(lib_dir.join("libsettings.sh"), body).unwrap();
    }

    #[tokio::test]
    async fn missing_config_file_gives_exact_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let source = build_source(&file_config(&dir.path().join("config.sh")));
        assert_eq!(
            resolve_settings(source.as_ref()).await,
            AudioSettings {
                audio_enabled: true,
                mp3_quality: 2
            }
        );
    }

    #[tokio::test]
    async fn config_file_values_are_used() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.sh");
        std::fs::write(&path, "AUDIO_ENABLED=\"no\"\nMP3_QUALITY=\"5\"\n").unwrap();

        let source = build_source(&file_config(&path));
        assert_eq!(
            resolve_settings(source.as_ref()).await,
            AudioSettings {
                audio_enabled: false,
                mp3_quality: 5
            }
        );
    }

    #[tokio::test]
    async fn malformed_quality_keeps_default_but_not_other_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.sh");
        std::fs::write(&path, "AUDIO_ENABLED=0\nMP3_QUALITY=abc\n").unwrap();

        let source = build_source(&file_config(&path));
        assert_eq!(
            resolve_settings(source.as_ref()).await,
            AudioSettings {
                audio_enabled: false,
                mp3_quality: 2
            }
        );
    }

    #[tokio::test]
    async fn script_backend_reads_library() {
        let dir = tempfile::tempdir().unwrap();
        write_settings_library(
            dir.path(),
            "settings_get_value_conf() {\n  case \"$2\" in\n    AUDIO_ENABLED) echo false ;;\n    MP3_QUALITY) echo 0 ;;\n  esac\n}\n",
        );

        let source = build_source(&script_config(dir.path()));
        assert_eq!(source.kind(), "script");
        assert_eq!(
            resolve_settings(source.as_ref()).await,
            AudioSettings {
                audio_enabled: false,
                mp3_quality: 0
            }
        );
    }

    #[tokio::test]
    async fn missing_script_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let source = build_source(&script_config(&dir.path().join("missing")));
        assert_eq!(resolve_settings(source.as_ref()).await, AudioSettings::default());
    }

    #[tokio::test]
    async fn timeout_discards_values_read_so_far() {
        let dir = tempfile::tempdir().unwrap();
        write_settings_library(
            dir.path(),
            "settings_get_value_conf() {\n  case \"$2\" in\n    AUDIO_ENABLED) echo false ;;\n    MP3_QUALITY) sleep 5 ;;\n  esac\n}\n",
        );

        let source = build_source(&script_config(dir.path()));
        assert!(try_resolve_settings(source.as_ref()).await.is_err());
        assert_eq!(resolve_settings(source.as_ref()).await, AudioSettings::default());
    }
}
