//! Routing of items delivered over the live push channel.

use super::merge::{merge, MergeMode};
use super::{Slot, TimelineCache};
use crate::Id;

impl TimelineCache {
    /// Decides whether a live item lands in the visible sequence or the
    /// pending buffer.
    ///
    /// Anything already buffered forces new arrivals to buffer too, or they
    /// would render out of order when the buffer is finally promoted.  For
    /// notifications, "scrolled away" also covers an invisible or unmounted
    /// column.
    pub(crate) fn route_live(
        &mut self,
        notifications: bool,
        id: Id,
        filtered: bool,
        ceiling: usize,
        target: usize,
    ) {
        if self.contains(&id) {
            log::debug!("Live item `{}` already cached; dropped", id);
            return;
        }

        let focused = self.visible && self.mounted > 0;
        let withhold = !self.pending.is_empty() || !self.top || (notifications && !focused);

        if withhold {
            self.pending.insert(0, Slot::Item(id));
            if !filtered {
                self.unread += 1;
            }
        } else {
            self.trim(ceiling, target);
            self.items = merge(&self.items, std::slice::from_ref(&id), MergeMode::Refresh, false);
            // Arriving while at the top and focused counts as read immediately.
            if !self.should_count_unread(false) {
                self.advance_last_read(&id);
            }
        }
    }

    /// Moves the pending buffer into the visible sequence and zeroes unread.
    pub(crate) fn load_pending(&mut self, ceiling: usize, target: usize) {
        if !self.pending.is_empty() {
            self.trim(ceiling, target);
            let mut promoted = std::mem::take(&mut self.pending);
            if promoted.last().map_or(false, Slot::is_gap)
                && self.items.first().map_or(false, Slot::is_gap)
            {
                promoted.pop();
            }
            promoted.append(&mut self.items);
            self.items = promoted;
        }
        self.unread = 0;
    }

    /// Bounds memory for long-lived sessions: inserting at the top of an
    /// oversized timeline first cuts it back to a smaller working set.  The
    /// cut slots still exist on the server, so the tail ends in a gap.
    fn trim(&mut self, ceiling: usize, target: usize) {
        if self.top && self.items.len() > ceiling {
            log::debug!("Truncating timeline from {} to {} slots", self.items.len(), target);
            self.items.truncate(target);
            if self.items.last().map_or(false, |slot| !slot.is_gap()) {
                self.items.push(Slot::Gap);
            }
        }
    }
}
