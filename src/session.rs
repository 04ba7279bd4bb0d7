// 🎛️ Session - the whole state of one tracker run, driven by intents
//
// The UI never touches the catalog or inventory directly: every user action
// becomes an `Intent` and is applied by `Session::dispatch`, one at a time.

use crate::catalog::{Catalog, PartDefinition};
use crate::filter::{self, CategorySelector};
use crate::inventory::Inventory;
use tracing::{debug, warn};

// ============================================================================
// INTENTS & OUTCOMES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    AddPart { part_id: String, quantity: u32 },
    RemovePart { part_id: String, quantity: u32 },
    SetCategory(CategorySelector),
    SetSearchText(String),
    ToggleAddPanel,
}

impl Intent {
    /// Add a single unit of a part
    pub fn add_one(part_id: impl Into<String>) -> Self {
        Intent::AddPart {
            part_id: part_id.into(),
            quantity: 1,
        }
    }

    /// Remove a single unit of a part
    pub fn remove_one(part_id: impl Into<String>) -> Self {
        Intent::RemovePart {
            part_id: part_id.into(),
            quantity: 1,
        }
    }
}

/// What a dispatched intent did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Part added; carries the quantity now owned
    Added { owned: u32 },
    /// Part removed; carries the remaining quantity (0 = entry dropped)
    Removed { remaining: u32 },
    /// Nothing to do (remove of an unowned part, zero quantity)
    Unchanged,
    /// Id is neither owned nor in the catalog
    UnknownPart,
    FilterChanged,
    PanelToggled { visible: bool },
}

// ============================================================================
// SESSION
// ============================================================================

pub struct Session {
    catalog: Catalog,
    inventory: Inventory,
    category: CategorySelector,
    search_text: String,
    show_add_parts: bool,
}

impl Session {
    /// Fresh session: empty inventory, no filters, add-parts panel closed
    pub fn new(catalog: Catalog) -> Self {
        Session {
            catalog,
            inventory: Inventory::new(),
            category: CategorySelector::All,
            search_text: String::new(),
            show_add_parts: false,
        }
    }

    pub fn dispatch(&mut self, intent: Intent) -> Outcome {
        debug!(?intent, "dispatch");

        match intent {
            Intent::AddPart { part_id, quantity } => {
                // Owned entries carry their own copy; fall back to the catalog
                let part: Option<PartDefinition> = self
                    .inventory
                    .get(&part_id)
                    .map(|entry| entry.part.clone())
                    .or_else(|| self.catalog.get(&part_id).cloned());

                match part {
                    Some(part) if quantity > 0 => Outcome::Added {
                        owned: self.inventory.add(&part, quantity),
                    },
                    Some(_) => Outcome::Unchanged,
                    None => {
                        warn!(%part_id, "add ignored: unknown part id");
                        Outcome::UnknownPart
                    }
                }
            }
            Intent::RemovePart { part_id, quantity } => {
                match self.inventory.remove(&part_id, quantity) {
                    Some(remaining) if quantity > 0 => Outcome::Removed { remaining },
                    _ => Outcome::Unchanged,
                }
            }
            Intent::SetCategory(selector) => {
                self.category = selector;
                Outcome::FilterChanged
            }
            Intent::SetSearchText(text) => {
                self.search_text = text;
                Outcome::FilterChanged
            }
            Intent::ToggleAddPanel => {
                self.show_add_parts = !self.show_add_parts;
                Outcome::PanelToggled {
                    visible: self.show_add_parts,
                }
            }
        }
    }

    /// Catalog parts matching the current category and search text
    pub fn visible_parts(&self) -> Vec<&PartDefinition> {
        filter::visible_parts(&self.catalog, self.category, &self.search_text)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn category(&self) -> CategorySelector {
        self.category
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn show_add_parts(&self) -> bool {
        self.show_add_parts
    }

    pub fn total_count(&self) -> u64 {
        self.inventory.total_count()
    }
}

// ============================================================================
// TESTS
// ============================================================================
