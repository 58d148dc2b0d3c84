//! Gap-aware splicing of a fetched page into a cached sequence.
//!
//! This is tricky because:
//! * existing slots may be out of order, and the sequence may contain gaps
//! * already-known slots must never be reordered
//! * the page must merge in as far as possible without duplicating anything
//! * a gap marker belongs exactly where contiguity cannot be proven
//!
//! The one thing the server guarantees about a page is that it is internally
//! contiguous: there is no missing item between its first and last id.

use super::Slot;
use crate::Id;

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MergeMode {
    /// Newest items arrived (reconnect poll); they belong ahead of the head.
    Refresh,
    /// An older page requested at the tail.
    Backfill,
    /// A page fetched to fill a specific hole; position must be found.
    Reconcile,
}

/// Splices `page`, a contiguous descending run fetched from the server, into
/// `old` without reordering any slot already present.
pub(crate) fn merge(old: &[Slot], page: &[Id], mode: MergeMode, partial: bool) -> Vec<Slot> {
    let page = dedup_page(page);
    if page.is_empty() {
        return old.to_vec();
    }
    match mode {
        MergeMode::Refresh => refresh(old, &page, partial),
        MergeMode::Backfill => backfill(old, &page),
        MergeMode::Reconcile => reconcile(old, &page, partial),
    }
}

/// A misbehaving collaborator may repeat an id within one page; keep the first
/// occurrence rather than rejecting the page.
fn dedup_page(page: &[Id]) -> Vec<&Id> {
    let mut seen = HashSet::new();
    let mut run = Vec::with_capacity(page.len());
    for id in page {
        if seen.insert(id) {
            run.push(id);
        } else {
            log::warn!("Duplicate id `{}` within one fetched page", id);
        }
    }
    run
}

fn known_ids(slots: &[Slot]) -> HashSet<&Id> {
    slots.iter().filter_map(Slot::id).collect()
}

fn refresh(old: &[Slot], page: &[&Id], partial: bool) -> Vec<Slot> {
    let known = known_ids(old);
    let fresh: Vec<&Id> = page.iter().copied().filter(|id| !known.contains(id)).collect();
    if fresh.is_empty() {
        return old.to_vec();
    }

    let mut merged: Vec<Slot> = fresh.iter().map(|id| Slot::Item((*id).clone())).collect();

    // An overlap with the cached head proves the page contiguous with it; a
    // partial page with no overlap leaves genuine uncertainty below the run.
    let overlaps = fresh.len() != page.len();
    if partial && !overlaps && old.first().map_or(false, |slot| !slot.is_gap()) {
        merged.push(Slot::Gap);
    }

    merged.extend_from_slice(old);
    merged
}

fn backfill(old: &[Slot], page: &[&Id]) -> Vec<Slot> {
    let known = known_ids(old);
    let mut merged = old.to_vec();
    merged.extend(
        page.iter()
            .filter(|id| !known.contains(*id))
            .map(|id| Slot::Item((*id).clone())),
    );
    merged
}

fn reconcile(old: &[Slot], page: &[&Id], partial: bool) -> Vec<Slot> {
    let (newest, oldest) = match (page.first(), page.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return old.to_vec(),
    };

    // Everything from `last_index` on is strictly older than the page;
    // everything before `first_index` is strictly newer.  Between the two is
    // the region the page overlaps or sits adjacent to.
    let last_index = old
        .iter()
        .rposition(|slot| slot.id().map_or(false, |id| id >= oldest))
        .map_or(0, |i| i + 1);
    let first_index = old[..last_index]
        .iter()
        .rposition(|slot| slot.id().map_or(false, |id| id > newest))
        .map_or(0, |i| i + 1);

    let in_page: HashSet<&Id> = page.iter().copied().collect();

    let mut merged: Vec<Slot> = old[..first_index].to_vec();

    // A partial page that does not butt up against an already-marked gap
    // leaves uncertainty above the run.
    if partial && (first_index == 0 || !old[first_index - 1].is_gap()) {
        merged.push(Slot::Gap);
    }

    merged.extend(page.iter().map(|id| Slot::Item((*id).clone())));

    // Locally-known ids inside the overlap window but older than the whole
    // page are retained rather than silently dropped; ids the page covers but
    // no longer contains are gone from the server and fall away here.
    for slot in &old[first_index..last_index] {
        if let Some(id) = slot.id() {
            if !in_page.contains(id) && id < oldest {
                merged.push(slot.clone());
            }
        }
    }

    merged.extend_from_slice(&old[last_index..]);
    merged
}

#[cfg(test)]
mod test;
