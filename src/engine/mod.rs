//! The serial event-application point.
//!
//! The `Engine` owns every per-stream cache, keyed by `Timeline`, and applies
//! commands strictly in receipt order.  It has no failure modes of its own: it
//! performs no I/O and no parsing, and malformed input degrades ordering
//! quality rather than crashing anything.

use crate::cache::{merge, MergeMode, Slot, TimelineCache};
use crate::command::{Command, Id};
use crate::config::EngineConfig;
use crate::timeline::Timeline;

use hashbrown::{HashMap, HashSet};
use serde::Serialize;

#[derive(Clone, Debug, Default, Serialize)]
pub struct Engine {
    timelines: HashMap<Timeline, TimelineCache>,
    #[serde(skip)]
    cfg: EngineConfig,
}

impl Engine {
    pub fn new(cfg: EngineConfig) -> Self {
        Self {
            timelines: HashMap::new(),
            cfg,
        }
    }

    /// The cache for a stream, if it has ever been referenced.
    pub fn get(&self, timeline: &Timeline) -> Option<&TimelineCache> {
        self.timelines.get(timeline)
    }

    /// Applies one command.  Events for a single stream are expected strictly
    /// in receipt order; there is no reordering or batching here.
    pub fn apply(&mut self, command: Command) {
        use Command::*;

        match command {
            ExpandRequest { timeline } => self.cache(&timeline).is_loading += 1,
            ExpandSuccess {
                timeline,
                mode,
                items,
                partial,
                has_more,
            } => self.expand(&timeline, mode, &items, partial, has_more),
            ExpandFail { timeline } => self.cache(&timeline).finish_loading(),
            Update {
                timeline,
                id,
                filtered,
            } => {
                let (ceiling, target) = self.trim_bounds();
                let notifications = timeline.is_notifications();
                self.cache(&timeline)
                    .route_live(notifications, id, filtered, ceiling, target);
            }
            Connect { timeline } => self.cache(&timeline).connect(),
            Disconnect { timeline } => self.cache(&timeline).online = false,
            LoadPending { timeline } => {
                let (ceiling, target) = self.trim_bounds();
                self.cache(&timeline).load_pending(ceiling, target);
            }
            SetViewport {
                timeline,
                top,
                visible,
                mounted,
            } => self.set_viewport(&timeline, top, visible, mounted),
            ClearTimeline { timeline } => {
                log::info!("Clearing {}", timeline);
                self.cache(&timeline).clear();
            }
            Delete {
                id,
                references,
                exclude,
            } => self.delete(&id, &references, exclude.as_deref()),
            PurgeAccount { account, owners } => self.purge_account(&account, &owners),
            MarkForDelete { id, marked } => {
                let cache = self.cache(&Timeline::notifications());
                if marked {
                    cache.marked_for_delete.insert(id);
                } else {
                    cache.marked_for_delete.remove(&id);
                }
            }
            SetCleaningMode { active } => {
                let cache = self.cache(&Timeline::notifications());
                cache.cleaning_mode = active;
                if !active {
                    cache.marked_for_delete.clear();
                }
            }
            MarkerSaved { id } => self.cache(&Timeline::notifications()).read_marker_id = Some(id),
        }
    }

    fn cache(&mut self, timeline: &Timeline) -> &mut TimelineCache {
        self.timelines.entry(timeline.clone()).or_default()
    }

    fn trim_bounds(&self) -> (usize, usize) {
        (*self.cfg.trim_ceiling, *self.cfg.trim_target)
    }

    fn expand(&mut self, timeline: &Timeline, mode: MergeMode, page: &[Id], partial: bool, has_more: bool) {
        let cache = self.cache(timeline);

        if !page.is_empty() {
            // The freshly fetched entry wins over a pending duplicate.
            let fetched: HashSet<&Id> = page.iter().collect();
            cache
                .pending
                .retain(|slot| slot.id().map_or(true, |id| !fetched.contains(id)));
            cache.items = merge(&cache.items, page, mode, partial);
        }

        if mode == MergeMode::Backfill && !has_more {
            cache.deferred_has_more = Some(false);
        }
        cache.finish_loading();
    }

    fn set_viewport(&mut self, timeline: &Timeline, top: bool, visible: bool, mounted: u32) {
        let cache = self.cache(timeline);
        let was_counting = cache.should_count_unread(false);
        // A fresh mount lands at an unknown scroll offset.
        let ignore_scroll = mounted > cache.mounted;

        cache.top = top;
        cache.visible = visible;
        cache.mounted = mounted;

        if was_counting && !cache.should_count_unread(ignore_scroll) {
            cache.clear_unread();
        }
    }

    /// Removes an item from every stream, except streams matching the
    /// exclusion prefix (the feed context the deletion originated in, which
    /// shows a tombstone instead).  Ids that referenced the item (reblog
    /// wrappers and the like) disappear everywhere.
    fn delete(&mut self, id: &Id, references: &[Id], exclude: Option<&str>) {
        for (timeline, cache) in self.timelines.iter_mut() {
            let excluded = exclude
                .map_or(false, |prefix| !prefix.is_empty() && timeline.to_string().starts_with(prefix));
            if !excluded && cache.remove(id) {
                log::debug!("Removed `{}` from {}", id, timeline);
            }
        }
        for reference in references {
            self.delete(reference, &[], None);
        }
    }

    /// Purges every item owned by `account` from every stream, using the
    /// collaborator-supplied id-to-owner map.  Safe to re-run.
    fn purge_account(&mut self, account: &Id, owners: &HashMap<Id, Id>) {
        let foreign = |slot: &Slot| slot.id().map_or(true, |id| owners.get(id) != Some(account));
        for cache in self.timelines.values_mut() {
            cache.items.retain(foreign);
            cache.pending.retain(foreign);
            cache
                .marked_for_delete
                .retain(|id| owners.get(id) != Some(account));
        }
    }
}
