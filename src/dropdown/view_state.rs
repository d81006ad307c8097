//! Popup state of the terminal dropdown
//!
//! Tracks whether the option list is open, which row the keyboard highlight is on
//! and the visible window of rows. The highlight only ever rests on selectable
//! entries; the committed selection lives in [`DropdownState`].

use super::dropdown_state::DropdownState;
use crate::scroll::ScrollState;

#[derive(Debug, Default)]
pub struct DropdownViewState {
    open: bool,
    highlighted: Option<usize>,
    pub scroll: ScrollState,
    seen_revision: u64,
}

impl DropdownViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Opens the list with the highlight on the current selection when it is
    /// selectable, otherwise on the first selectable entry.
    pub fn open<V>(&mut self, state: &DropdownState<V>) {
        self.open = true;
        self.seen_revision = state.revision();
        self.highlighted = state
            .index()
            .filter(|&i| state.is_selectable(i))
            .or_else(|| state.first_selectable());
        self.reveal_highlight();
    }

    pub fn close(&mut self) {
        self.open = false;
        self.highlighted = None;
        self.scroll.reset();
    }

    /// Re-reads the published lists after the dropdown was reconfigured.
    pub fn sync<V>(&mut self, state: &DropdownState<V>) {
        if self.seen_revision == state.revision() {
            return;
        }
        self.seen_revision = state.revision();
        if !self.open {
            return;
        }

        if !self.highlighted.is_some_and(|i| state.is_selectable(i)) {
            let fallback = self.highlighted.and_then(|i| state.next_selectable(Some(i)));
            self.highlighted = fallback
                .or_else(|| state.index().filter(|&i| state.is_selectable(i)))
                .or_else(|| state.first_selectable());
        }
        self.reveal_highlight();
    }

    pub fn highlight_next<V>(&mut self, state: &DropdownState<V>) {
        if let Some(next) = state.next_selectable(self.highlighted) {
            self.highlighted = Some(next);
            self.reveal_highlight();
        }
    }

    pub fn highlight_previous<V>(&mut self, state: &DropdownState<V>) {
        let Some(current) = self.highlighted else {
            self.highlighted = state.last_selectable();
            self.reveal_highlight();
            return;
        };
        if let Some(previous) = state.previous_selectable(Some(current)) {
            self.highlighted = Some(previous);
            self.reveal_highlight();
        } else {
            // Keep group headers above the first entry in view
            self.scroll.scroll_up(current);
        }
    }

    pub fn highlight_first<V>(&mut self, state: &DropdownState<V>) {
        self.highlighted = state.first_selectable();
        self.scroll.reset();
        self.reveal_highlight();
    }

    pub fn highlight_last<V>(&mut self, state: &DropdownState<V>) {
        self.highlighted = state.last_selectable();
        self.reveal_highlight();
    }

    /// Moves the highlight onto `row` if it can be selected.
    pub fn highlight_row<V>(&mut self, state: &DropdownState<V>, row: usize) -> bool {
        if state.is_selectable(row) {
            self.highlighted = Some(row);
            true
        } else {
            false
        }
    }

    /// Sizes the scroll window for `rows` entries in a list `viewport_height` rows tall.
    pub fn update_viewport(&mut self, rows: usize, viewport_height: usize) {
        self.scroll.update_bounds(rows, viewport_height);
        self.reveal_highlight();
    }

    fn reveal_highlight(&mut self) {
        if let Some(row) = self.highlighted {
            self.scroll.ensure_visible(row);
        }
    }
}
