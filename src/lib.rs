// VEX Inventory - Core Library
// Catalog, filtering and the owned-parts store, shared by the CLI and TUI

pub mod catalog;
pub mod filter;
pub mod inventory;
pub mod logging;
pub mod session;

// Re-export commonly used types
pub use catalog::{Catalog, Category, PartDefinition, UnknownCategory};
pub use filter::{visible_parts, CategorySelector};
pub use inventory::{Inventory, InventoryEntry};
pub use session::{Intent, Outcome, Session};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
