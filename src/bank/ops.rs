//! Bank operation requests
//!
//! Guarded emitters for everything that is not drag and drop: withdrawals,
//! deposits, coins, placeholders, equipment, and tab management. Each
//! emitter validates against the current snapshot before sending and
//! reports whether an intent went out. Invalid requests emit nothing.

use serde::{Deserialize, Serialize};

use crate::bank::intent::{BankIntent, IntentSink};
use crate::bank::model::BankView;

/// Requested quantity for a withdraw or deposit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Amount {
    One,
    Five,
    Ten,
    All,
    Custom(u32),
}

impl Amount {
    /// Concrete quantity against what is available. Fixed amounts clamp to
    /// the available stack; a custom amount must fit exactly.
    pub fn resolve(self, available: u32) -> Option<u32> {
        if available == 0 {
            return None;
        }
        match self {
            Amount::One => Some(1.min(available)),
            Amount::Five => Some(5.min(available)),
            Amount::Ten => Some(10.min(available)),
            Amount::All => Some(available),
            Amount::Custom(0) => None,
            Amount::Custom(n) if n > available => None,
            Amount::Custom(n) => Some(n),
        }
    }
}

/// Withdraw from a bank slot into the inventory.
pub fn request_withdraw(
    view: &BankView,
    slot: i32,
    tab_index: i32,
    amount: Amount,
    sink: &mut dyn IntentSink,
) -> bool {
    let Some(item) = view.item_at(tab_index, slot) else {
        return false;
    };
    let Some(quantity) = amount.resolve(item.quantity) else {
        return false;
    };
    sink.send(BankIntent::Withdraw { slot, tab_index, quantity });
    true
}

/// Deposit from an inventory slot. `available` is the stack size carried.
pub fn request_deposit(
    inventory_slot: i32,
    available: u32,
    amount: Amount,
    sink: &mut dyn IntentSink,
) -> bool {
    let Some(quantity) = amount.resolve(available) else {
        return false;
    };
    sink.send(BankIntent::Deposit { inventory_slot, quantity });
    true
}

pub fn request_deposit_all(sink: &mut dyn IntentSink) {
    sink.send(BankIntent::DepositAll);
}

/// Deposit carried coins. `carried` is the coin pouch balance.
pub fn request_deposit_coins(carried: u32, amount: Amount, sink: &mut dyn IntentSink) -> bool {
    let Some(quantity) = amount.resolve(carried) else {
        return false;
    };
    sink.send(BankIntent::DepositCoins { amount: quantity });
    true
}

/// Withdraw banked coins. `banked` is the coin balance held by the bank.
pub fn request_withdraw_coins(banked: u32, amount: Amount, sink: &mut dyn IntentSink) -> bool {
    let Some(quantity) = amount.resolve(banked) else {
        return false;
    };
    sink.send(BankIntent::WithdrawCoins { amount: quantity });
    true
}

/// Withdraw a full stack, leaving a placeholder in the slot. Only valid on
/// a slot that still holds items.
pub fn request_withdraw_placeholder(
    view: &BankView,
    slot: i32,
    tab_index: i32,
    sink: &mut dyn IntentSink,
) -> bool {
    match view.item_at(tab_index, slot) {
        Some(item) if !item.is_placeholder() => {
            sink.send(BankIntent::WithdrawPlaceholder { slot, tab_index });
            true
        }
        _ => false,
    }
}

/// Remove one placeholder. Only valid on an empty placeholder slot.
pub fn request_release_placeholder(
    view: &BankView,
    slot: i32,
    tab_index: i32,
    sink: &mut dyn IntentSink,
) -> bool {
    match view.item_at(tab_index, slot) {
        Some(item) if item.is_placeholder() => {
            sink.send(BankIntent::ReleasePlaceholder { slot, tab_index });
            true
        }
        _ => false,
    }
}

pub fn request_release_all_placeholders(sink: &mut dyn IntentSink) {
    sink.send(BankIntent::ReleaseAllPlaceholders);
}

pub fn request_toggle_always_placeholder(sink: &mut dyn IntentSink) {
    sink.send(BankIntent::ToggleAlwaysPlaceholder);
}

/// Withdraw an item straight into its equipment slot.
pub fn request_withdraw_to_equipment(
    view: &BankView,
    slot: i32,
    tab_index: i32,
    sink: &mut dyn IntentSink,
) -> bool {
    match view.item_at(tab_index, slot) {
        Some(item) if !item.is_placeholder() => {
            sink.send(BankIntent::WithdrawToEquipment { slot, tab_index });
            true
        }
        _ => false,
    }
}

pub fn request_deposit_equipment(equipment_slot: &str, sink: &mut dyn IntentSink) {
    sink.send(BankIntent::DepositEquipment { equipment_slot: equipment_slot.to_string() });
}

pub fn request_deposit_all_equipment(sink: &mut dyn IntentSink) {
    sink.send(BankIntent::DepositAllEquipment);
}

pub fn request_create_tab(sink: &mut dyn IntentSink) {
    sink.send(BankIntent::CreateTab);
}

/// Delete a physical tab. The synthetic All tab cannot be deleted.
pub fn request_delete_tab(tab_index: i32, sink: &mut dyn IntentSink) -> bool {
    if tab_index < 0 {
        return false;
    }
    sink.send(BankIntent::DeleteTab { tab_index });
    true
}
