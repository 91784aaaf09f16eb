//! Bank slot reorganization
//!
//! Client-side interaction layer for an authoritative server bank: a
//! snapshot view model, a drag and drop state machine, guarded request
//! emitters, and the intent protocol they all feed. No module here
//! mutates bank contents; every change round-trips through the server.

pub mod drag;
pub mod intent;
pub mod model;
pub mod ops;

pub use drag::{DragState, SlotAffordance, CROSS_TAB_DROP_COLOR, SAME_TAB_DROP_COLOR};
pub use intent::{BankIntent, IntentSink, MoveMode};
pub use model::{BankItem, BankView, ALL_TAB, APPEND_SLOT};
pub use ops::{
    request_create_tab, request_delete_tab, request_deposit, request_deposit_all,
    request_deposit_all_equipment, request_deposit_coins, request_deposit_equipment,
    request_release_all_placeholders, request_release_placeholder, request_toggle_always_placeholder,
    request_withdraw, request_withdraw_coins, request_withdraw_placeholder,
    request_withdraw_to_equipment, Amount,
};
