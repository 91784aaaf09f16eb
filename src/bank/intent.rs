//! Bank intents
//!
//! Every bank interaction resolves to an intent sent through an injected
//! sink. Nothing in this module mutates bank state: the authoritative
//! server applies the change and pushes a fresh snapshot back. Wire event
//! names stay camelCase to match the server protocol.

use serde::{Deserialize, Serialize};

/// How a same-tab move resolves at the destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveMode {
    /// Exchange the two slots
    Swap,
    /// Shift the destination and everything after it one slot right
    Insert,
}

/// A requested bank mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum BankIntent {
    Withdraw { slot: i32, tab_index: i32, quantity: u32 },
    Deposit { inventory_slot: i32, quantity: u32 },
    DepositAll,
    DepositCoins { amount: u32 },
    WithdrawCoins { amount: u32 },
    Move { from_slot: i32, to_slot: i32, mode: MoveMode, tab_index: i32 },
    MoveToTab { from_slot: i32, from_tab_index: i32, to_tab_index: i32, to_slot: Option<i32> },
    CreateTab,
    DeleteTab { tab_index: i32 },
    WithdrawPlaceholder { slot: i32, tab_index: i32 },
    ReleasePlaceholder { slot: i32, tab_index: i32 },
    ReleaseAllPlaceholders,
    ToggleAlwaysPlaceholder,
    WithdrawToEquipment { slot: i32, tab_index: i32 },
    DepositEquipment { equipment_slot: String },
    DepositAllEquipment,
}

impl BankIntent {
    /// Wire event name for the server protocol
    pub fn event_name(&self) -> &'static str {
        match self {
            BankIntent::Withdraw { .. } => "bankWithdraw",
            BankIntent::Deposit { .. } => "bankDeposit",
            BankIntent::DepositAll => "bankDepositAll",
            BankIntent::DepositCoins { .. } => "bankDepositCoins",
            BankIntent::WithdrawCoins { .. } => "bankWithdrawCoins",
            BankIntent::Move { .. } => "bankMove",
            BankIntent::MoveToTab { .. } => "bankMoveToTab",
            BankIntent::CreateTab => "bankCreateTab",
            BankIntent::DeleteTab { .. } => "bankDeleteTab",
            BankIntent::WithdrawPlaceholder { .. } => "bankWithdrawPlaceholder",
            BankIntent::ReleasePlaceholder { .. } => "bankReleasePlaceholder",
            BankIntent::ReleaseAllPlaceholders => "bankReleaseAllPlaceholders",
            BankIntent::ToggleAlwaysPlaceholder => "bankToggleAlwaysPlaceholder",
            BankIntent::WithdrawToEquipment { .. } => "bankWithdrawToEquipment",
            BankIntent::DepositEquipment { .. } => "bankDepositEquipment",
            BankIntent::DepositAllEquipment => "bankDepositAllEquipment",
        }
    }
}

/// Destination for emitted intents. Fire and forget: senders never learn
/// whether the server accepted the mutation.
pub trait IntentSink {
    fn send(&mut self, intent: BankIntent);
}

/// Collecting sink, used by tests and by batching callers.
impl IntentSink for Vec<BankIntent> {
    fn send(&mut self, intent: BankIntent) {
        self.push(intent);
    }
}
