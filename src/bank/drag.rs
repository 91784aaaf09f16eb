//! Drag and drop resolution
//!
//! Tracks one in-flight drag and resolves a drop into a single intent.
//! The state machine never mutates the bank view: the server owns slot
//! layout, so a drop emits an intent and waits for the next snapshot.
//! Dropping an item on its own slot is a no-op that still clears the drag.

use crate::bank::intent::{BankIntent, IntentSink, MoveMode};
use crate::bank::model::{BankView, APPEND_SLOT};

/// Highlight color for a drop that stays in the current tab
pub const SAME_TAB_DROP_COLOR: (u8, u8, u8) = (255, 213, 79);
/// Highlight color for a drop that crosses into another tab
pub const CROSS_TAB_DROP_COLOR: (u8, u8, u8) = (79, 195, 247);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HoverTarget {
    Slot { slot: i32, tab_index: i32 },
    Append { tab_index: i32 },
    TabHeader { tab_index: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Drag {
    from_slot: i32,
    from_tab: i32,
    hover: Option<HoverTarget>,
}

/// Visual treatment a slot should receive while a drag is active
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SlotAffordance {
    /// Hovered occupied slot: the drop would exchange or replace here
    pub swap_highlight: bool,
    /// Hovered append position: the drop would insert after the tail
    pub insert_line: bool,
    /// Non-hovered slot during an active drag
    pub faint_guide: bool,
    pub color: Option<(u8, u8, u8)>,
}

/// One in-flight drag, or none
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragState {
    active: Option<Drag>,
}

impl DragState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.active.is_some()
    }

    /// Begin dragging the item in a physical slot.
    pub fn drag_start(&mut self, slot: i32, tab_index: i32) {
        self.active = Some(Drag { from_slot: slot, from_tab: tab_index, hover: None });
    }

    /// Update the hover target to a physical slot.
    pub fn drag_over(&mut self, slot: i32, tab_index: i32) {
        if let Some(drag) = self.active.as_mut() {
            drag.hover = Some(HoverTarget::Slot { slot, tab_index });
        }
    }

    /// Update the hover target to a tab's append position.
    pub fn drag_over_append(&mut self, tab_index: i32) {
        if let Some(drag) = self.active.as_mut() {
            drag.hover = Some(HoverTarget::Append { tab_index });
        }
    }

    /// Update the hover target to another tab's header. Hovering the source
    /// tab's own header is ignored.
    pub fn drag_over_tab_header(&mut self, tab_index: i32) {
        if let Some(drag) = self.active.as_mut() {
            if drag.from_tab != tab_index {
                drag.hover = Some(HoverTarget::TabHeader { tab_index });
            }
        }
    }

    /// Abandon the drag without emitting anything.
    pub fn drag_end(&mut self) {
        self.active = None;
    }

    /// Resolve the drag against its current hover target. Emits at most one
    /// intent and always clears the drag.
    pub fn drop(&mut self, view: &BankView, sink: &mut dyn IntentSink) {
        let Some(drag) = self.active.take() else {
            return;
        };
        let Some(hover) = drag.hover else {
            return;
        };

        match hover {
            HoverTarget::Slot { slot, tab_index } => {
                if slot == drag.from_slot && tab_index == drag.from_tab {
                    return;
                }
                if tab_index == drag.from_tab {
                    sink.send(BankIntent::Move {
                        from_slot: drag.from_slot,
                        to_slot: slot,
                        mode: MoveMode::Swap,
                        tab_index,
                    });
                } else {
                    sink.send(BankIntent::MoveToTab {
                        from_slot: drag.from_slot,
                        from_tab_index: drag.from_tab,
                        to_tab_index: tab_index,
                        to_slot: if slot >= 0 { Some(slot) } else { None },
                    });
                }
            }
            HoverTarget::Append { tab_index } => {
                if tab_index == drag.from_tab {
                    let to_slot = view.last_slot_in_tab(tab_index).map_or(0, |s| s + 1);
                    sink.send(BankIntent::Move {
                        from_slot: drag.from_slot,
                        to_slot,
                        mode: MoveMode::Insert,
                        tab_index,
                    });
                } else {
                    sink.send(BankIntent::MoveToTab {
                        from_slot: drag.from_slot,
                        from_tab_index: drag.from_tab,
                        to_tab_index: tab_index,
                        to_slot: None,
                    });
                }
            }
            HoverTarget::TabHeader { tab_index } => {
                sink.send(BankIntent::MoveToTab {
                    from_slot: drag.from_slot,
                    from_tab_index: drag.from_tab,
                    to_tab_index: tab_index,
                    to_slot: None,
                });
            }
        }
    }

    /// Visual treatment for a physical slot. Pass [`APPEND_SLOT`] for the
    /// tab's append position.
    pub fn affordance(&self, slot: i32, tab_index: i32) -> SlotAffordance {
        let Some(drag) = self.active else {
            return SlotAffordance::default();
        };

        let color = if tab_index == drag.from_tab {
            SAME_TAB_DROP_COLOR
        } else {
            CROSS_TAB_DROP_COLOR
        };

        match drag.hover {
            Some(HoverTarget::Slot { slot: h_slot, tab_index: h_tab })
                if h_slot == slot && h_tab == tab_index =>
            {
                SlotAffordance { swap_highlight: true, color: Some(color), ..Default::default() }
            }
            Some(HoverTarget::Append { tab_index: h_tab })
                if slot == APPEND_SLOT && h_tab == tab_index =>
            {
                SlotAffordance { insert_line: true, color: Some(color), ..Default::default() }
            }
            _ => {
                // The source slot gets no guide; it is where the item came from.
                if slot == drag.from_slot && tab_index == drag.from_tab {
                    SlotAffordance::default()
                } else {
                    SlotAffordance { faint_guide: true, ..Default::default() }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::model::BankItem;

    fn entry(item_id: &str, quantity: u32, slot: i32, tab_index: i32) -> BankItem {
        BankItem { item_id: item_id.to_string(), quantity, slot, tab_index }
    }

    fn view() -> BankView {
        BankView::new(vec![
            entry("bronze_sword", 1, 3, 0),
            entry("iron_ore", 20, 7, 0),
            entry("logs", 50, 0, 1),
        ])
    }

    #[test]
    fn test_drop_on_own_slot_emits_nothing() {
        let mut sink: Vec<BankIntent> = Vec::new();
        let mut drag = DragState::new();
        drag.drag_start(3, 0);
        drag.drag_over(3, 0);
        drag.drop(&view(), &mut sink);
        assert!(sink.is_empty());
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_same_tab_slot_drop_is_swap() {
        let mut sink: Vec<BankIntent> = Vec::new();
        let mut drag = DragState::new();
        drag.drag_start(3, 0);
        drag.drag_over(7, 0);
        drag.drop(&view(), &mut sink);
        assert_eq!(
            sink,
            vec![BankIntent::Move { from_slot: 3, to_slot: 7, mode: MoveMode::Swap, tab_index: 0 }]
        );
    }

    #[test]
    fn test_same_tab_append_is_insert_after_tail() {
        let mut sink: Vec<BankIntent> = Vec::new();
        let mut drag = DragState::new();
        drag.drag_start(3, 0);
        drag.drag_over_append(0);
        drag.drop(&view(), &mut sink);
        // Highest occupied slot in tab 0 is 7.
        assert_eq!(
            sink,
            vec![BankIntent::Move {
                from_slot: 3,
                to_slot: 8,
                mode: MoveMode::Insert,
                tab_index: 0
            }]
        );
    }

    #[test]
    fn test_cross_tab_append_has_no_target_slot() {
        let mut sink: Vec<BankIntent> = Vec::new();
        let mut drag = DragState::new();
        drag.drag_start(3, 0);
        drag.drag_over_append(1);
        drag.drop(&view(), &mut sink);
        assert_eq!(
            sink,
            vec![BankIntent::MoveToTab {
                from_slot: 3,
                from_tab_index: 0,
                to_tab_index: 1,
                to_slot: None
            }]
        );
    }

    #[test]
    fn test_cross_tab_slot_drop_targets_that_slot() {
        let mut sink: Vec<BankIntent> = Vec::new();
        let mut drag = DragState::new();
        drag.drag_start(3, 0);
        drag.drag_over(0, 1);
        drag.drop(&view(), &mut sink);
        assert_eq!(
            sink,
            vec![BankIntent::MoveToTab {
                from_slot: 3,
                from_tab_index: 0,
                to_tab_index: 1,
                to_slot: Some(0)
            }]
        );
    }

    #[test]
    fn test_own_tab_header_hover_is_ignored() {
        let mut sink: Vec<BankIntent> = Vec::new();
        let mut drag = DragState::new();
        drag.drag_start(3, 0);
        drag.drag_over_tab_header(0);
        drag.drop(&view(), &mut sink);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_tab_header_drop_moves_to_tab() {
        let mut sink: Vec<BankIntent> = Vec::new();
        let mut drag = DragState::new();
        drag.drag_start(7, 0);
        drag.drag_over_tab_header(1);
        drag.drop(&view(), &mut sink);
        assert_eq!(
            sink,
            vec![BankIntent::MoveToTab {
                from_slot: 7,
                from_tab_index: 0,
                to_tab_index: 1,
                to_slot: None
            }]
        );
    }

    #[test]
    fn test_drag_end_discards_everything() {
        let mut sink: Vec<BankIntent> = Vec::new();
        let mut drag = DragState::new();
        drag.drag_start(3, 0);
        drag.drag_over(7, 0);
        drag.drag_end();
        drag.drop(&view(), &mut sink);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_affordances_while_hovering() {
        let mut drag = DragState::new();
        drag.drag_start(3, 0);
        drag.drag_over(7, 0);

        let hovered = drag.affordance(7, 0);
        assert!(hovered.swap_highlight);
        assert_eq!(hovered.color, Some(SAME_TAB_DROP_COLOR));

        let other = drag.affordance(5, 0);
        assert!(other.faint_guide);
        assert!(!other.swap_highlight);

        // The source slot shows nothing.
        assert_eq!(drag.affordance(3, 0), SlotAffordance::default());

        drag.drag_over_append(1);
        let append = drag.affordance(APPEND_SLOT, 1);
        assert!(append.insert_line);
        assert_eq!(append.color, Some(CROSS_TAB_DROP_COLOR));
    }

    #[test]
    fn test_no_affordance_without_drag() {
        let drag = DragState::new();
        assert_eq!(drag.affordance(0, 0), SlotAffordance::default());
    }
}
