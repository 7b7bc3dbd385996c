//! Runs `systeminfo_get_software_info` and parses its output.

use shell_bridge::BashLibrary;

use crate::{Inventory, InventoryError};

/// Function in `libsysteminfo.sh` that prints the inventory JSON.
pub const INVENTORY_FUNCTION: &str = "systeminfo_get_software_info";

#[derive(Debug, Clone)]
pub struct InventoryCollector {
    library: BashLibrary,
}

impl InventoryCollector {
    pub fn new(library: BashLibrary) -> Self {
        Self { library }
    }

    pub fn library(&self) -> &BashLibrary {
        &self.library
    }

    /// Fresh snapshot; fails on timeout, non-zero exit or unparsable output.
    pub async fn collect(&self) -> Result<Inventory, InventoryError> {
        let output = self.library.call_checked(INVENTORY_FUNCTION, &[]).await?;
        let inventory = Inventory::from_json(output.stdout_trimmed())?;
        tracing::debug!(
            categories = inventory.categories().len(),
            "Software inventory collected"
        );
        Ok(inventory)
    }
}
