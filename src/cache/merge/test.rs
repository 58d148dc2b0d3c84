use super::*;

fn ids(texts: &[&str]) -> Vec<Id> {
    texts.iter().map(|t| Id::new(*t)).collect()
}

/// Builds a slot sequence from a compact notation; `"-"` is a gap.
fn slots(texts: &[&str]) -> Vec<Slot> {
    texts
        .iter()
        .map(|t| match *t {
            "-" => Slot::Gap,
            id => Slot::Item(Id::new(id)),
        })
        .collect()
}

fn assert_descending(merged: &[Slot]) {
    for pair in merged.windows(2) {
        if let (Some(a), Some(b)) = (pair[0].id(), pair[1].id()) {
            assert!(a > b, "adjacent pair out of order: {} !> {}", a, b);
        }
    }
}

#[test]
fn reconcile_into_empty_cache() {
    let merged = merge(&[], &ids(&["5", "4", "3"]), MergeMode::Reconcile, false);
    assert_eq!(merged, slots(&["5", "4", "3"]));
}

#[test]
fn refresh_prepends_and_marks_uncertainty() {
    let old = slots(&["10", "9", "-", "5", "4"]);
    let merged = merge(&old, &ids(&["12", "11"]), MergeMode::Refresh, true);
    assert_eq!(merged, slots(&["12", "11", "-", "10", "9", "-", "5", "4"]));
}

#[test]
fn refresh_with_overlap_proves_contiguity() {
    let old = slots(&["10", "9", "8"]);
    // 10 is already cached, so the page provably touches the head: no gap,
    // even though the server called the page partial.
    let merged = merge(&old, &ids(&["12", "11", "10"]), MergeMode::Refresh, true);
    assert_eq!(merged, slots(&["12", "11", "10", "9", "8"]));
}

#[test]
fn refresh_of_all_known_ids_is_a_no_op() {
    let old = slots(&["10", "9", "8"]);
    let merged = merge(&old, &ids(&["10", "9"]), MergeMode::Refresh, true);
    assert_eq!(merged, old);
}

#[test]
fn refresh_into_empty_cache_never_adds_a_gap() {
    let merged = merge(&[], &ids(&["12", "11"]), MergeMode::Refresh, true);
    assert_eq!(merged, slots(&["12", "11"]));
}

#[test]
fn refresh_does_not_stack_gaps() {
    let old = slots(&["-", "5", "4"]);
    let merged = merge(&old, &ids(&["12", "11"]), MergeMode::Refresh, true);
    assert_eq!(merged, slots(&["12", "11", "-", "5", "4"]));
}

#[test]
fn backfill_appends_only_unknown_ids() {
    let old = slots(&["10", "9"]);
    let merged = merge(&old, &ids(&["9", "8", "7"]), MergeMode::Backfill, false);
    assert_eq!(merged, slots(&["10", "9", "8", "7"]));
}

#[test]
fn reconcile_fills_a_hole_and_keeps_the_tail() {
    let old = slots(&["10", "9", "-", "5", "4"]);
    let merged = merge(&old, &ids(&["8", "6"]), MergeMode::Reconcile, false);
    assert_eq!(merged, slots(&["10", "9", "8", "6", "-", "5", "4"]));
}

#[test]
fn reconcile_covering_the_gap_absorbs_it() {
    let old = slots(&["10", "9", "-", "5", "4"]);
    let merged = merge(&old, &ids(&["8", "7", "6", "5", "4"]), MergeMode::Reconcile, false);
    assert_eq!(merged, slots(&["10", "9", "8", "7", "6", "5", "4"]));
    assert_descending(&merged);
}

#[test]
fn reconcile_partial_marks_the_upper_boundary() {
    let old = slots(&["10", "9", "5", "4"]);
    let merged = merge(&old, &ids(&["7", "6"]), MergeMode::Reconcile, true);
    assert_eq!(merged, slots(&["10", "9", "-", "7", "6", "5", "4"]));
}

#[test]
fn reconcile_partial_keeps_both_uncertainties() {
    // Unknown territory both between 9 and 7 (the partial marker) and between
    // 6 and 4 (the old gap, still unfilled).
    let old = slots(&["10", "9", "-", "4"]);
    let merged = merge(&old, &ids(&["7", "6"]), MergeMode::Reconcile, true);
    assert_eq!(merged, slots(&["10", "9", "-", "7", "6", "-", "4"]));
}

#[test]
fn reconcile_retains_stray_older_ids_from_the_overlap() {
    // 3 sits out of order inside the overlap window; it is older than the
    // whole page, so it survives below the run.  7 sits inside the range the
    // page covers without containing it, so the server no longer has it and
    // it falls away.
    let old = slots(&["10", "9", "7", "3", "5", "-", "2"]);
    let merged = merge(&old, &ids(&["8", "6", "5"]), MergeMode::Reconcile, false);
    assert_eq!(merged, slots(&["10", "9", "8", "6", "5", "3", "-", "2"]));
}

#[test]
fn reconcile_is_idempotent() {
    let old = slots(&["10", "9", "-", "5", "4"]);
    let page = ids(&["8", "6"]);
    let once = merge(&old, &page, MergeMode::Reconcile, false);
    let twice = merge(&once, &page, MergeMode::Reconcile, false);
    assert_eq!(once, twice);
}

#[test]
fn refresh_is_idempotent() {
    let old = slots(&["10", "9"]);
    let page = ids(&["12", "11"]);
    let once = merge(&old, &page, MergeMode::Refresh, true);
    let twice = merge(&once, &page, MergeMode::Refresh, true);
    assert_eq!(once, twice);
}

#[test]
fn no_cached_id_is_lost_outside_the_covered_range() {
    let old = slots(&["10", "-", "7", "2"]);
    let page = ids(&["8", "6", "5"]);
    let merged = merge(&old, &page, MergeMode::Reconcile, false);
    for id in &["10", "2"] {
        assert!(
            merged.iter().any(|slot| slot.id() == Some(&Id::new(*id))),
            "lost id {}",
            id
        );
    }
}

#[test]
fn duplicate_ids_within_a_page_collapse_to_one() {
    let merged = merge(&[], &ids(&["5", "4", "4", "3"]), MergeMode::Reconcile, false);
    assert_eq!(merged, slots(&["5", "4", "3"]));
}

#[test]
fn empty_page_changes_nothing() {
    let old = slots(&["10", "-", "5"]);
    for mode in &[MergeMode::Refresh, MergeMode::Backfill, MergeMode::Reconcile] {
        assert_eq!(merge(&old, &[], *mode, true), old);
    }
}

#[test]
fn merged_sequences_stay_descending() {
    let old = slots(&["10", "9", "-", "5", "4"]);
    for (page, mode) in &[
        (ids(&["12", "11"]), MergeMode::Refresh),
        (ids(&["3", "2"]), MergeMode::Backfill),
        (ids(&["8", "7", "6"]), MergeMode::Reconcile),
    ] {
        assert_descending(&merge(&old, page, *mode, false));
    }
}
