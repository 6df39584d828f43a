use rustc_hash::FxHashMap;

use super::{SelectionChange, Selector, WrapMode};
use crate::slot::SlotId;

/// Index-based [`Selector`]: the current item is a position in the list.
///
/// Initialization selects the first item without queuing a change.
#[derive(Debug, Clone, Default)]
pub struct IndexSelector {
    items: Vec<SlotId>,
    index_of: FxHashMap<SlotId, usize>,
    current: Option<usize>,
    wrap_mode: WrapMode,
    pending: Vec<SelectionChange>,
}

impl IndexSelector {
    /// Empty selector with the given end behaviour.
    #[must_use]
    pub fn new(wrap_mode: WrapMode) -> Self {
        Self {
            wrap_mode,
            ..Self::default()
        }
    }

    /// End behaviour.
    #[must_use]
    pub fn wrap_mode(&self) -> WrapMode {
        self.wrap_mode
    }

    /// Tracked items in order.
    #[must_use]
    pub fn items(&self) -> &[SlotId] {
        &self.items
    }

    fn step(&mut self, forward: bool) {
        let Some(current) = self.current else {
            return;
        };
        let len = self.items.len();
        let next = match (self.wrap_mode, forward) {
            (WrapMode::Wrap, true) => (current + 1) % len,
            (WrapMode::Wrap, false) => (current + len - 1) % len,
            (WrapMode::Clamp, true) => (current + 1).min(len - 1),
            (WrapMode::Clamp, false) => current.saturating_sub(1),
        };
        self.move_to(next);
    }

    fn move_to(&mut self, index: usize) {
        let previous = self.current_item();
        self.current = Some(index);
        self.pending.push(SelectionChange {
            previous,
            current: self.current_item(),
        });
    }
}

impl Selector for IndexSelector {
    fn initialize(&mut self, items: &[SlotId]) {
        self.items = items.to_vec();
        self.index_of = items
            .iter()
            .enumerate()
            .map(|(i, id)| (*id, i))
            .collect();
        self.current = if items.is_empty() { None } else { Some(0) };
        self.pending.clear();
    }

    fn current_index(&self) -> Option<usize> {
        self.current
    }

    fn current_item(&self) -> Option<SlotId> {
        self.current.and_then(|i| self.items.get(i).copied())
    }

    fn next_item(&mut self) {
        self.step(true);
    }

    fn previous_item(&mut self) {
        self.step(false);
    }

    fn select(&mut self, item: SlotId) -> bool {
        let Some(&index) = self.index_of.get(&item) else {
            return false;
        };
        self.move_to(index);
        true
    }

    fn clear(&mut self) {
        self.items.clear();
        self.index_of.clear();
        self.current = None;
        self.pending.clear();
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn take_changes(&mut self) -> Vec<SelectionChange> {
        std::mem::take(&mut self.pending)
    }
}
