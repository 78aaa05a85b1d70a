//! Navigation state: the ordered items and the current index.
//!
//! [`NavigationState`] is the single source of truth for where the viewer is.
//! It holds the ordered item sequence and the current index, and every
//! index-changing operation clamps into range instead of failing.
//!
//! # Invariants
//!
//! - `current_index < items.len()` whenever the sequence is non-empty
//! - there is no current index when the sequence is empty
//! - the sequence is replaced wholesale, never edited in place, and every
//!   replacement resets the index to `0`
//!
//! Each operation reports whether the caller should render. Operations on an
//! empty sequence are no-ops and report `false`.
//!
//! # Example
//!
//! ```rust
//! use seqview::app::NavigationState;
//! use seqview::{Item, ResourceHandle};
//!
//! let mut state = NavigationState::new();
//! state.load(vec![
//!     Item::new("a1.png", ResourceHandle::new("blob:x/1")),
//!     Item::new("a2.png", ResourceHandle::new("blob:x/2")),
//! ]);
//! assert!(state.step(1));
//! assert!(!state.step(1));
//! assert_eq!(state.current_index(), Some(1));
//! ```

use crate::domain::item::Item;

/// Ordered items plus the current position within them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    items: Vec<Item>,
    current_index: usize,
}

impl NavigationState {
    /// Creates an empty state with no current item.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            current_index: 0,
        }
    }

    /// Replaces the sequence and returns the items it replaced.
    ///
    /// A non-empty `items` resets the index to `0`. An empty `items` leaves
    /// the state "empty" with no current item. The returned items are handed
    /// back so the caller can release their handles.
    pub fn load(&mut self, items: Vec<Item>) -> Vec<Item> {
        tracing::debug!(count = items.len(), replaced = self.items.len(), "sequence loaded");
        self.current_index = 0;
        std::mem::replace(&mut self.items, items)
    }

    /// Discards the whole sequence, returning its items.
    pub fn clear(&mut self) -> Vec<Item> {
        self.load(Vec::new())
    }

    /// Moves by `delta` positions, clamped to the sequence bounds.
    ///
    /// Returns `false` without changing anything when the sequence is empty
    /// or the clamped index equals the current one.
    pub fn step(&mut self, delta: isize) -> bool {
        let Some(last) = self.last_index() else {
            return false;
        };

        let target = self
            .current_index
            .saturating_add_signed(delta)
            .min(last);
        if target == self.current_index {
            tracing::trace!(index = self.current_index, delta, "step at boundary");
            return false;
        }

        tracing::debug!(from = self.current_index, to = target, "stepped");
        self.current_index = target;
        true
    }

    /// Jumps to `index`, clamped to the last item.
    ///
    /// Returns `true` whenever there is a sequence to render, even if the
    /// index did not change.
    pub fn seek(&mut self, index: usize) -> bool {
        let Some(last) = self.last_index() else {
            return false;
        };

        self.current_index = index.min(last);
        tracing::debug!(requested = index, index = self.current_index, "seeked");
        true
    }

    /// Sets the index without signalling a render.
    ///
    /// Used while the thumb is being dragged: later wheel and keyboard steps
    /// resume from the dragged-to position, but the caller must not derive
    /// the thumb position from it until the drag ends.
    pub fn set_current_index_silently(&mut self, index: usize) {
        if let Some(last) = self.last_index() {
            self.current_index = index.min(last);
        }
    }

    /// Current position, or `None` when the sequence is empty.
    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        (!self.items.is_empty()).then_some(self.current_index)
    }

    /// Item at the current position.
    #[must_use]
    pub fn current_item(&self) -> Option<&Item> {
        self.items.get(self.current_index)
    }

    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn last_index(&self) -> Option<usize> {
        self.items.len().checked_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::ResourceHandle;

    fn items(count: usize) -> Vec<Item> {
        (0..count)
            .map(|i| Item::new(format!("img{i}.png"), ResourceHandle::new(format!("blob:t/{i}"))))
            .collect()
    }

    fn loaded(count: usize) -> NavigationState {
        let mut state = NavigationState::new();
        state.load(items(count));
        state
    }

    #[test]
    fn new_state_has_no_current_item() {
        let state = NavigationState::new();
        assert!(state.is_empty());
        assert_eq!(state.current_index(), None);
        assert!(state.current_item().is_none());
    }

    #[test]
    fn load_resets_index_and_returns_replaced_items() {
        let mut state = loaded(3);
        state.seek(2);

        let replaced = state.load(items(4));

        assert_eq!(replaced.len(), 3);
        assert_eq!(state.current_index(), Some(0));
        assert_eq!(state.len(), 4);
    }

    #[test]
    fn empty_load_leaves_no_current_item() {
        let mut state = loaded(2);
        let replaced = state.load(Vec::new());
        assert_eq!(replaced.len(), 2);
        assert_eq!(state.current_index(), None);
    }

    #[test]
    fn step_clamps_at_both_ends() {
        let mut state = loaded(3);

        assert!(!state.step(-1));
        assert!(state.step(1));
        assert!(state.step(1));
        assert!(!state.step(1));
        assert_eq!(state.current_index(), Some(2));

        assert!(state.step(-5));
        assert_eq!(state.current_index(), Some(0));
    }

    #[test]
    fn single_item_never_steps() {
        let mut state = loaded(1);
        assert!(!state.step(1));
        assert!(!state.step(-1));
        assert_eq!(state.current_index(), Some(0));
    }

    #[test]
    fn seek_clamps_and_always_renders() {
        let mut state = loaded(5);

        assert!(state.seek(99));
        assert_eq!(state.current_index(), Some(4));
        assert!(state.seek(4));
        assert!(state.seek(0));
        assert_eq!(state.current_index(), Some(0));
    }

    #[test]
    fn operations_on_empty_state_are_noops() {
        let mut state = NavigationState::new();
        assert!(!state.step(1));
        assert!(!state.seek(3));
        state.set_current_index_silently(2);
        assert_eq!(state.current_index(), None);
    }

    #[test]
    fn silent_update_moves_index_for_later_steps() {
        let mut state = loaded(5);
        state.set_current_index_silently(3);
        assert!(state.step(1));
        assert_eq!(state.current_index(), Some(4));
    }

    #[test]
    fn current_item_follows_index() {
        let mut state = loaded(3);
        state.seek(1);
        assert_eq!(state.current_item().map(|i| i.name.as_str()), Some("img1.png"));
    }
}
