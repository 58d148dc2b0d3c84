//! Unread accounting.

use super::TimelineCache;
use crate::Id;

impl TimelineCache {
    /// Whether a newly seen item should increment `unread`, or be folded
    /// silently into "already read".
    ///
    /// `ignore_scroll` bypasses the scroll check for the moment right after a
    /// mount, when the scroll offset is not yet meaningful.
    pub(crate) fn should_count_unread(&self, ignore_scroll: bool) -> bool {
        let last_item_reached = !self.has_more
            || match (&self.last_read_id, self.oldest_id()) {
                (None, _) => true,
                (Some(last_read), Some(oldest)) => oldest <= last_read,
                (Some(_), None) => false,
            };

        !(self.visible && (ignore_scroll || self.top) && self.mounted > 0 && last_item_reached)
    }

    /// Folds everything currently visible into "read": unread falls back to
    /// the pending count and the read cursor advances to the newest visible id.
    pub(crate) fn clear_unread(&mut self) {
        self.unread = self.pending.iter().filter(|slot| slot.id().is_some()).count();
        self.last_read_id = self.newest_id().cloned();
    }

    pub(crate) fn advance_last_read(&mut self, id: &Id) {
        if self.last_read_id.as_ref().map_or(true, |last| id > last) {
            self.last_read_id = Some(id.clone());
        }
    }
}
