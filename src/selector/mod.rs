//! Selection tracking for a carousel's slots.
//!
//! The [`Selector`] trait is the seam between the carousel controller and
//! whatever decides which slot is current. The controller only ever talks
//! to it through this trait, so a host can swap in its own policy (or a
//! test double) without touching the controller.
//!
//! Change notifications are queued by the selector and drained with
//! [`Selector::take_changes`]. The carousel drains after each call it
//! makes and at the start of every frame, which is how direct selector
//! manipulation through [`Carousel::selector_mut`] reaches it.
//!
//! [`Carousel::selector_mut`]: crate::carousel::Carousel::selector_mut

mod index;

pub use index::IndexSelector;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::slot::SlotId;

/// Emitted by a selector whenever a navigation or select call runs.
///
/// Fired even when `previous == current`; consumers filter that case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionChange {
    /// Item selected before the call.
    pub previous: Option<SlotId>,
    /// Item selected after the call.
    pub current: Option<SlotId>,
}

impl SelectionChange {
    /// Whether the call landed on the item that was already selected.
    #[must_use]
    pub fn is_reselection(&self) -> bool {
        self.previous == self.current
    }
}

/// Behaviour at the ends of the slot list.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum WrapMode {
    /// Stepping past either end wraps to the other end.
    #[default]
    Wrap,
    /// Stepping past either end stays on the end item.
    Clamp,
}

/// Tracks the current slot and reports changes.
pub trait Selector {
    /// Replace the tracked list. Any previous selection is forgotten.
    fn initialize(&mut self, items: &[SlotId]);

    /// Index of the current item, `None` when the list is empty.
    fn current_index(&self) -> Option<usize>;

    /// The current item, `None` when the list is empty.
    fn current_item(&self) -> Option<SlotId>;

    /// Step to the next item.
    fn next_item(&mut self);

    /// Step to the previous item.
    fn previous_item(&mut self);

    /// Make `item` current. Returns `false` (and queues nothing) when the
    /// item is not tracked.
    fn select(&mut self, item: SlotId) -> bool;

    /// Forget the list, the selection, and any queued changes.
    fn clear(&mut self);

    /// Number of tracked items.
    fn len(&self) -> usize;

    /// Whether no items are tracked.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drain queued change notifications, oldest first.
    fn take_changes(&mut self) -> Vec<SelectionChange>;
}
