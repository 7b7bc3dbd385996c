//! Audio ripping tools reported by the system-info library.

use chrono::Local;
use serde::Serialize;
use shell_bridge::BashLibrary;
use software_inventory::{AllowList, Inventory, InventoryCollector, ToolRecord};

use crate::config::AppConfig;

/// Tools the audio module depends on.
pub const AUDIO_TOOLS: AllowList = AllowList::new(&[
    "cdparanoia",
    "lame",
    "genisoimage",
    "eyeD3",
    "icedax",
    "cd-info",
    "cdda2wav",
]);

/// Body of `GET /api/widgets/audio/dependencies`.
#[derive(Debug, Clone, Serialize)]
pub struct AudioDependencies {
    /// The handler completed; says nothing about whether the inventory call worked.
    pub success: bool,
    pub software: Vec<ToolRecord>,
    pub timestamp: String,
}

pub fn build_collector(config: &AppConfig) -> InventoryCollector {
    InventoryCollector::new(
        BashLibrary::new(config.systeminfo_library())
            .with_shell(&config.shell)
            .with_timeout(config.inventory_timeout),
    )
}

/// Collect, flatten and filter the inventory. Failures yield an empty list.
pub async fn list_audio_dependencies(collector: &InventoryCollector) -> AudioDependencies {
    let inventory = collector.collect().await.unwrap_or_else(|e| {
        tracing::error!(
            library = %collector.library().library().display(),
            error = %e,
            "Failed to collect software inventory"
        );
        Inventory::default()
    });

    AudioDependencies {
        success: true,
        software: inventory.filter(&AUDIO_TOOLS),
        timestamp: Local::now().to_rfc3339(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn collector_for(install_dir: &Path) -> InventoryCollector {
        build_collector(&AppConfig {
            install_dir: install_dir.to_path_buf(),
            ..AppConfig::default()
        })
    }

    fn write_systeminfo_library(install_dir: &Path, body: &str) {
        let lib_dir = install_dir.join("lib");
        std::fs::create_dir_all(&lib_dir).unwrap();
        std::fs::write(
            lib_dir.join("libsysteminfo.sh"),
            format!("systeminfo_get_software_info() {{\n{body}\n}}\n"),
        )
        .unwrap();
    }

    #[tokio::test]
    async fn filters_audio_tools_in_inventory_order() {
        let dir = tempfile::tempdir().unwrap();
        write_systeminfo_library(
            dir.path(),
            r#"  echo '{"ripping": [{"name":"lame"},{"name":"ffmpeg"}], "burning": [{"name":"cd-info"}]}'"#,
        );

        let deps = list_audio_dependencies(&collector_for(dir.path())).await;
        assert!(deps.success);
        assert_eq!(
            serde_json::to_value(&deps.software).unwrap(),
            serde_json::json!([{"name": "lame"}, {"name": "cd-info"}])
        );
    }

    #[tokio::test]
    async fn non_json_output_gives_empty_success() {
        let dir = tempfile::tempdir().unwrap();
        write_systeminfo_library(dir.path(), "  echo 'ERROR: jq missing'");

        let deps = list_audio_dependencies(&collector_for(dir.path())).await;
        assert!(deps.success);
        assert!(deps.software.is_empty());
        assert!(chrono::DateTime::parse_from_rfc3339(&deps.timestamp).is_ok());
    }

    #[tokio::test]
    async fn missing_library_gives_empty_success() {
        let dir = tempfile::tempdir().unwrap();
        let deps = list_audio_dependencies(&collector_for(&dir.path().join("missing"))).await;
        assert!(deps.success);
        assert!(deps.software.is_empty());
    }
}
