//! Bank view model
//!
//! A read-only snapshot of the bank as the interaction layer sees it.
//! Slots are dense per tab; the "All" tab is a synthetic union view and is
//! never a physical destination for single-tab operations.

use serde::{Deserialize, Serialize};

/// Synthetic tab index showing every tab's contents at once
pub const ALL_TAB: i32 = -1;

/// Sentinel destination slot meaning "after the last occupied slot"
pub const APPEND_SLOT: i32 = -1;

/// One occupied bank slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankItem {
    pub item_id: String,
    pub quantity: u32,
    pub slot: i32,
    pub tab_index: i32,
}

impl BankItem {
    /// A placeholder holds a slot for an item that has been fully withdrawn.
    pub fn is_placeholder(&self) -> bool {
        self.quantity == 0
    }
}

/// Snapshot of the bank contents used to resolve drops and affordances
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BankView {
    pub items: Vec<BankItem>,
}

impl BankView {
    pub fn new(items: Vec<BankItem>) -> Self {
        Self { items }
    }

    /// Items in a tab, or everything when asked for the synthetic All tab.
    pub fn items_in_tab(&self, tab_index: i32) -> impl Iterator<Item = &BankItem> {
        self.items
            .iter()
            .filter(move |i| tab_index == ALL_TAB || i.tab_index == tab_index)
    }

    /// Highest occupied slot in a tab, if any.
    pub fn last_slot_in_tab(&self, tab_index: i32) -> Option<i32> {
        self.items_in_tab(tab_index).map(|i| i.slot).max()
    }

    /// The item occupying a physical slot in a tab.
    pub fn item_at(&self, tab_index: i32, slot: i32) -> Option<&BankItem> {
        self.items
            .iter()
            .find(|i| i.tab_index == tab_index && i.slot == slot)
    }
}
