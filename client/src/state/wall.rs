//! Wall item collection, edit mode, and fetch ordering.
//!
//! DESIGN
//! ======
//! The wall page is the only writer of this state. Mutations patch the list
//! from the server's response instead of re-fetching: create appends once,
//! update replaces in place, delete removes by id.
//!
//! ORDERING
//! ========
//! Fetches and mutations draw from one monotonically increasing sequence.
//! A fetch result is applied only if it belongs to the most recent fetch and
//! that fetch started after the last applied mutation; otherwise a slow poll
//! response could resurrect a deleted item or drop a freshly added one.

#[cfg(test)]
#[path = "wall_test.rs"]
mod wall_test;

use crate::net::types::{GridPosition, Item};

/// Outcome of a request to flip edit mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditToggle {
    Entered,
    Exited,
    /// Caller is not signed in; mode unchanged, caller should go to `/login`.
    LoginRequired,
}

/// A completed drop: move `source_id` to the target's cell.
#[derive(Clone, Debug, PartialEq)]
pub struct DropMove {
    pub source_id: String,
    pub position: GridPosition,
}

#[derive(Clone, Debug, PartialEq)]
pub struct WallState {
    pub items: Vec<Item>,
    /// True until the first fetch settles.
    pub loading: bool,
    pub edit_mode: bool,
    /// Last user-facing failure, shown as a banner until dismissed.
    pub error: Option<String>,
    /// Item currently being dragged in edit mode.
    pub dragging: Option<String>,
    next_seq: u64,
    latest_fetch: u64,
    last_mutation: u64,
}

impl Default for WallState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
            edit_mode: false,
            error: None,
            dragging: None,
            next_seq: 0,
            latest_fetch: 0,
            last_mutation: 0,
        }
    }
}

impl WallState {
    fn bump(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    // =========================================================================
    // FETCH
    // =========================================================================

    /// Register a new fetch and return its sequence token.
    pub fn begin_fetch(&mut self) -> u64 {
        let seq = self.bump();
        self.latest_fetch = seq;
        seq
    }

    /// Apply a fetch result. Returns `false` when the result is stale.
    pub fn apply_fetch(&mut self, seq: u64, items: Vec<Item>) -> bool {
        self.loading = false;
        if seq != self.latest_fetch || seq < self.last_mutation {
            return false;
        }
        self.items = items;
        true
    }

    /// A fetch failed: keep the current list, stop showing the loader.
    pub fn fetch_failed(&mut self) {
        self.loading = false;
    }

    /// Polling runs only outside edit mode.
    #[must_use]
    pub fn should_poll(&self) -> bool {
        !self.edit_mode
    }

    // =========================================================================
    // MUTATIONS
    // =========================================================================

    /// Add a created item after existing ones. An id already present is
    /// replaced in place, so an item never appears twice.
    pub fn append_item(&mut self, item: Item) {
        self.bump_mutation();
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            *existing = item;
        } else {
            self.items.push(item);
        }
    }

    /// Replace the item with the same id. Unknown ids are ignored.
    pub fn replace_item(&mut self, item: Item) {
        self.bump_mutation();
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            *existing = item;
        }
    }

    pub fn remove_item(&mut self, id: &str) {
        self.bump_mutation();
        self.items.retain(|i| i.id != id);
        if self.dragging.as_deref() == Some(id) {
            self.dragging = None;
        }
    }

    fn bump_mutation(&mut self) {
        self.last_mutation = self.bump();
    }

    pub fn report_failure(&mut self, message: String) {
        self.error = Some(message);
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    // =========================================================================
    // EDIT MODE
    // =========================================================================

    pub fn toggle_edit(&mut self, authenticated: bool) -> EditToggle {
        if !authenticated {
            return EditToggle::LoginRequired;
        }
        self.edit_mode = !self.edit_mode;
        if self.edit_mode {
            EditToggle::Entered
        } else {
            self.dragging = None;
            EditToggle::Exited
        }
    }

    /// Leave edit mode, e.g. after sign-out.
    pub fn exit_edit(&mut self) {
        self.edit_mode = false;
        self.dragging = None;
    }

    // =========================================================================
    // DRAG AND DROP
    // =========================================================================

    pub fn start_drag(&mut self, id: &str) {
        if self.edit_mode {
            self.dragging = Some(id.to_owned());
        }
    }

    pub fn cancel_drag(&mut self) {
        self.dragging = None;
    }

    /// Finish a drag over `target_id`. Yields the move to persist unless the
    /// drop is onto the dragged item itself or nothing was being dragged.
    pub fn drop_on(&mut self, target_id: &str) -> Option<DropMove> {
        let source_id = self.dragging.take()?;
        if source_id == target_id {
            return None;
        }
        let target = self.items.iter().find(|i| i.id == target_id)?;
        Some(DropMove { source_id, position: target.position.clone() })
    }

    #[must_use]
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }
}
