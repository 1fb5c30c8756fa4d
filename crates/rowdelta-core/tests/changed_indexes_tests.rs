//! Change-index diff scenarios.
//!
//! Single-change cases are exact; multi-change cases pin what the offset
//! walk actually reports, including the patterns it gets wrong.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::idx;
use rowdelta_core::compute_changes;

// ---------------------------------------------------------------------------
// Single-change scenarios
// ---------------------------------------------------------------------------

#[test]
fn test_identity_yields_empty_change_set() {
    let snapshots: Vec<Vec<&str>> = vec![
        vec![],
        vec!["a"],
        vec!["a", "b", "c"],
        vec!["a", "a", "b", "a"],
    ];
    for s in snapshots {
        let changes = compute_changes(&s, &s);
        assert!(changes.is_empty(), "expected no changes for {:?}", s);
    }
}

#[test]
fn test_empty_to_n_adds_every_row() {
    let changes = compute_changes(&[] as &[&str], &["a", "b", "c"]);
    assert_eq!(idx(&changes.added), vec![0, 1, 2]);
    assert!(changes.deleted.is_empty());
}

#[test]
fn test_n_to_empty_deletes_every_row() {
    let changes = compute_changes(&["a", "b", "c"], &[] as &[&str]);
    assert!(changes.added.is_empty());
    assert_eq!(idx(&changes.deleted), vec![0, 1, 2]);
}

#[test]
fn test_append() {
    let changes = compute_changes(&["a", "b"], &["a", "b", "c"]);
    assert_eq!(idx(&changes.added), vec![2]);
    assert!(changes.deleted.is_empty());
}

#[test]
fn test_append_several() {
    let changes = compute_changes(&["a"], &["a", "b", "c", "d"]);
    assert_eq!(idx(&changes.added), vec![1, 2, 3]);
    assert!(changes.deleted.is_empty());
}

#[test]
fn test_prepend() {
    let changes = compute_changes(&["a", "b"], &["z", "a", "b"]);
    assert_eq!(idx(&changes.added), vec![0]);
    assert!(changes.deleted.is_empty());
}

#[test]
fn test_single_delete() {
    let changes = compute_changes(&["a", "b", "c"], &["a", "c"]);
    assert!(changes.added.is_empty());
    assert_eq!(idx(&changes.deleted), vec![1]);
}

#[test]
fn test_tail_delete() {
    let changes = compute_changes(&["a", "b", "c"], &["a"]);
    assert!(changes.added.is_empty());
    assert_eq!(idx(&changes.deleted), vec![1, 2]);
}

#[test]
fn test_move_to_front() {
    // a is matched out of place at index 2 and reported as delete + insert
    let changes = compute_changes(&["x", "y", "a"], &["a", "x", "y"]);
    assert_eq!(idx(&changes.added), vec![0]);
    assert_eq!(idx(&changes.deleted), vec![2]);
}

#[test]
fn test_move_to_end() {
    let changes = compute_changes(&["a", "b", "c"], &["b", "c", "a"]);
    assert_eq!(idx(&changes.added), vec![0, 1]);
    assert_eq!(idx(&changes.deleted), vec![1, 2]);
}

#[test]
fn test_adjacent_swap_is_offset_based_not_minimal() {
    // Walk: a realigns at 1 (added {0}, offset 1); b realigns at 0 with an
    // empty range (offset -1); c realigns at 2 (offset 0). Nothing deleted.
    let changes = compute_changes(&["a", "b", "c"], &["b", "a", "c"]);
    assert_eq!(idx(&changes.added), vec![0]);
    assert!(changes.deleted.is_empty());
    assert!(!changes.is_balanced(3, 3));
}

#[test]
fn test_determinism() {
    let initial = vec![3, 1, 4, 1, 5, 9, 2, 6];
    let updated = vec![1, 4, 1, 5, 8, 9, 2, 6, 5];
    let first = compute_changes(&initial, &updated);
    for _ in 0..10 {
        assert_eq!(compute_changes(&initial, &updated), first);
    }
}

// ---------------------------------------------------------------------------
// Duplicate-valued records (first-match policy)
// ---------------------------------------------------------------------------

#[test]
fn test_duplicate_tail_removed() {
    let changes = compute_changes(&["a", "a"], &["a"]);
    assert!(changes.added.is_empty());
    assert_eq!(idx(&changes.deleted), vec![1]);
}

#[test]
fn test_duplicate_between_equal_rows_removed() {
    let changes = compute_changes(&["a", "b", "a"], &["a", "a"]);
    assert!(changes.added.is_empty());
    assert_eq!(idx(&changes.deleted), vec![1]);
}

#[test]
fn test_duplicate_prepended() {
    // b realigns on its only occurrence at 1; the new leading a is added
    let changes = compute_changes(&["b", "a"], &["a", "b", "a"]);
    assert_eq!(idx(&changes.added), vec![0]);
    assert!(changes.deleted.is_empty());
}

#[test]
fn test_duplicate_realigns_on_first_occurrence() {
    // The trailing a mismatches c and its first occurrence is index 0, so
    // the offset drops to -2 and the tail pass starts at row 1.
    let changes = compute_changes(&["a", "b", "a"], &["a", "b", "c", "d"]);
    assert_eq!(idx(&changes.added), vec![1, 2, 3]);
    assert!(changes.deleted.is_empty());
}

// ---------------------------------------------------------------------------
// Multi-change scenarios
// ---------------------------------------------------------------------------

#[test]
fn test_delete_and_append() {
    let changes = compute_changes(&["a", "b", "c"], &["a", "c", "d"]);
    assert_eq!(idx(&changes.added), vec![2]);
    assert_eq!(idx(&changes.deleted), vec![1]);
}

#[test]
fn test_prepend_and_delete() {
    let changes = compute_changes(&["a", "b", "c"], &["z", "a", "c"]);
    assert_eq!(idx(&changes.added), vec![0]);
    assert_eq!(idx(&changes.deleted), vec![1]);
}

#[test]
fn test_two_adjacent_deletes() {
    let changes = compute_changes(&["a", "b", "c", "d"], &["a", "d"]);
    assert!(changes.added.is_empty());
    assert_eq!(idx(&changes.deleted), vec![1, 2]);
}

#[test]
fn test_reverse() {
    let changes = compute_changes(&["a", "b", "c"], &["c", "b", "a"]);
    assert_eq!(idx(&changes.added), vec![0, 1]);
    assert_eq!(idx(&changes.deleted), vec![1, 2]);
}

#[test]
fn test_two_separate_inserts_over_report() {
    // The second gap is marked from the initial index (1), not from the
    // expected updated index (2), so row 1 (a) is reported as added too.
    let changes = compute_changes(&["a", "b"], &["x", "a", "y", "b"]);
    assert_eq!(idx(&changes.added), vec![0, 1, 2]);
    assert!(changes.deleted.is_empty());
    assert!(!changes.is_balanced(2, 4));
}

// ---------------------------------------------------------------------------
// Size bounds
// ---------------------------------------------------------------------------

#[test]
fn test_large_prepend_stays_linear() {
    let initial: Vec<u32> = (0..20_000).collect();
    let mut updated = vec![u32::MAX];
    updated.extend(initial.iter().copied());

    let changes = compute_changes(&initial, &updated);
    assert_eq!(idx(&changes.added), vec![0]);
    assert!(changes.deleted.is_empty());
}

#[test]
fn test_large_disjoint_snapshots_finish() {
    // Every row mismatches and is searched for: the O(n·m) worst case.
    let initial: Vec<u32> = (0..2_000).collect();
    let updated: Vec<u32> = (10_000..12_000).collect();

    let changes = compute_changes(&initial, &updated);
    assert_eq!(changes.deleted_len(), 2_000);
    assert_eq!(changes.added_len(), 2_000);
}
