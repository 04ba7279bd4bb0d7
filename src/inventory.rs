// 🧰 Inventory Store - parts the team owns, with quantities
//
// Keyed by part id, kept in first-insertion order for stable display.
// An entry never sits at quantity 0: it is dropped as soon as a remove
// takes it to zero or below.

use crate::catalog::PartDefinition;
use serde::{Deserialize, Serialize};
use tracing::debug;

// ============================================================================
// INVENTORY ENTRY
// ============================================================================

/// Owned copy of a part definition plus how many are on hand (always >= 1)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryEntry {
    #[serde(flatten)]
    pub part: PartDefinition,
    pub quantity: u32,
}

impl InventoryEntry {
    pub fn id(&self) -> &str {
        &self.part.id
    }
}

// ============================================================================
// INVENTORY
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct Inventory {
    entries: Vec<InventoryEntry>,
}

impl Inventory {
    pub fn new() -> Self {
        Inventory { entries: Vec::new() }
    }

    /// Add `quantity` of a part, creating the entry on first add.
    ///
    /// Returns the quantity now owned. A zero quantity changes nothing.
    pub fn add(&mut self, part: &PartDefinition, quantity: u32) -> u32 {
        if quantity == 0 {
            return self.quantity_of(&part.id);
        }

        let owned = match self.entries.iter_mut().find(|e| e.part.id == part.id) {
            Some(entry) => {
                entry.quantity = entry.quantity.saturating_add(quantity);
                entry.quantity
            }
            None => {
                self.entries.push(InventoryEntry {
                    part: part.clone(),
                    quantity,
                });
                quantity
            }
        };

        debug!(part_id = %part.id, added = quantity, owned, "inventory add");
        owned
    }

    /// Remove `quantity` of a part.
    ///
    /// Returns `None` when the part is not owned (nothing changes), otherwise
    /// the remaining quantity, where 0 means the entry was dropped.
    pub fn remove(&mut self, part_id: &str, quantity: u32) -> Option<u32> {
        let index = self.entries.iter().position(|e| e.part.id == part_id)?;

        let existing = self.entries[index].quantity;
        let remaining = existing.saturating_sub(quantity);

        if remaining > 0 {
            self.entries[index].quantity = remaining;
        } else {
            // Vec::remove keeps the relative order of the other entries
            self.entries.remove(index);
        }

        debug!(part_id, removed = quantity, remaining, "inventory remove");
        Some(remaining)
    }

    pub fn get(&self, part_id: &str) -> Option<&InventoryEntry> {
        self.entries.iter().find(|e| e.part.id == part_id)
    }

    /// Owned quantity of a part, 0 when absent
    pub fn quantity_of(&self, part_id: &str) -> u32 {
        self.get(part_id).map(|e| e.quantity).unwrap_or(0)
    }

    pub fn entries(&self) -> &[InventoryEntry] {
        &self.entries
    }

    /// Sum of quantities across all entries
    pub fn total_count(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.quantity)).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================
