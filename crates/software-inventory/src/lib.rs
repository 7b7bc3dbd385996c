//! Software inventory reported by `libsysteminfo.sh`.
//!
//! The system-info library prints one JSON object mapping a category to the
//! tools detected in it. [`Inventory`] keeps that document typed and in
//! order; [`AllowList`] selects the tools a widget cares about.

pub mod allow_list;
pub mod collector;
pub mod model;

pub use allow_list::AllowList;
pub use collector::{INVENTORY_FUNCTION, InventoryCollector};
pub use model::{Category, CategoryValue, Inventory, InventoryItem, ToolRecord};

/// Unified error type for the software-inventory crate.
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("inventory script failed: {0}")]
    Shell(#[from] shell_bridge::ShellError),

    #[error("inventory output is not a valid category map: {0}")]
    Json(#[from] serde_json::Error),
}
