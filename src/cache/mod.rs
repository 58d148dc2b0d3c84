//! Per-stream reconciliation state.
//!
//! One `TimelineCache` exists per stream key, created lazily on first
//! reference.  Everything the rendering layer reads lives here: the visible
//! slot sequence, the withheld pending buffer, pagination and connection
//! flags, and unread accounting.  All mutation goes through the engine's
//! serial event-application point.

mod live;
mod merge;
mod slot;
mod unread;

pub use merge::MergeMode;
pub use slot::Slot;

pub(crate) use merge::merge;

use crate::Id;

use hashbrown::HashSet;
use serde::Serialize;

/// The reconciliation state for one stream.
#[derive(Clone, Debug, Serialize)]
pub struct TimelineCache {
    /// The sequence currently rendered, newest first.
    pub items: Vec<Slot>,
    /// Items received live but withheld while the viewer is scrolled away.
    pub pending: Vec<Slot>,
    /// Whether older items are known to exist beyond the tail of `items`.
    pub has_more: bool,
    /// Count of in-flight backfill/refresh requests.
    pub is_loading: u32,
    /// Whether the viewport sits at the newest end of the stream.
    pub top: bool,
    /// Whether the live push channel is connected.
    pub online: bool,
    /// Not-yet-acknowledged new items.
    pub unread: usize,
    /// Whether the tab/view is visible.
    pub visible: bool,
    /// How many consumers have the stream mounted.
    pub mounted: u32,
    /// Highest id the viewer has seen.
    pub last_read_id: Option<Id>,
    /// Highest id acknowledged to the server.
    pub read_marker_id: Option<Id>,
    /// Bulk-select-for-delete state (notifications cleaning mode).
    pub marked_for_delete: HashSet<Id>,
    pub cleaning_mode: bool,
    /// A `has_more` conclusion held back until every in-flight request lands,
    /// so an older still-completing request cannot overwrite it.
    #[serde(skip)]
    pub(crate) deferred_has_more: Option<bool>,
}

impl Default for TimelineCache {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            pending: Vec::new(),
            has_more: true,
            is_loading: 0,
            top: true,
            online: false,
            unread: 0,
            visible: true,
            mounted: 0,
            last_read_id: None,
            read_marker_id: None,
            marked_for_delete: HashSet::new(),
            cleaning_mode: false,
            deferred_has_more: None,
        }
    }
}

impl TimelineCache {
    pub(crate) fn contains(&self, id: &Id) -> bool {
        let known = |slots: &[Slot]| slots.iter().any(|slot| slot.id() == Some(id));
        known(&self.items) || known(&self.pending)
    }

    /// Removes an id from both sequences.  Returns whether anything changed.
    pub(crate) fn remove(&mut self, id: &Id) -> bool {
        let before = self.items.len() + self.pending.len();
        self.items.retain(|slot| slot.id() != Some(id));
        self.pending.retain(|slot| slot.id() != Some(id));
        self.marked_for_delete.remove(id);
        before != self.items.len() + self.pending.len()
    }

    pub(crate) fn newest_id(&self) -> Option<&Id> {
        self.items.iter().find_map(Slot::id)
    }

    pub(crate) fn oldest_id(&self) -> Option<&Id> {
        self.items.iter().rev().find_map(Slot::id)
    }

    /// Reconnecting after an offline spell hides an unknown number of missed
    /// items; the uncertainty is marked at the head.
    pub(crate) fn connect(&mut self) {
        if !self.online {
            if self.items.first().map_or(false, |slot| !slot.is_gap()) {
                self.items.insert(0, Slot::Gap);
            }
            self.online = true;
        }
    }

    /// Decrements the in-flight counter; success and failure both land here,
    /// so the counter can never stick.
    pub(crate) fn finish_loading(&mut self) {
        self.is_loading = self.is_loading.saturating_sub(1);
        if self.is_loading == 0 {
            if let Some(has_more) = self.deferred_has_more.take() {
                self.has_more = has_more;
            }
        }
    }

    /// Lifecycle reset when the stream's filter/scope changes.  Connection and
    /// viewport state outlive the reset; so do server-side read markers and
    /// the in-flight counter, whose responses still have to be accounted for.
    pub(crate) fn clear(&mut self) {
        self.items.clear();
        self.pending.clear();
        self.has_more = true;
        self.unread = 0;
        self.marked_for_delete.clear();
        self.cleaning_mode = false;
        self.deferred_has_more = None;
    }
}
