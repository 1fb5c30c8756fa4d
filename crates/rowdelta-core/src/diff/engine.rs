//! Change-index computation.
//!
//! The entry point is [`compute_changes`]. It walks the initial snapshot once,
//! tracking how far the matching position in the updated snapshot has
//! drifted, and falls back to a linear search only on a mismatch. This is
//! not a minimal (LCS) diff: it is exact for sparse edits and cheap for the
//! common case where most rows stay put.

use crate::diff::model::ChangeSet;
use rowdelta_core_types::schema::OP_COMPUTE_CHANGES;
use std::collections::BTreeSet;

/// Compute the rows added and deleted between two ordered snapshots.
///
/// Records are matched by equality only. When a record appears more than
/// once in `updated`, a displaced record realigns on its first occurrence.
///
/// Indexes in [`ChangeSet::deleted`] refer to `initial`; indexes in
/// [`ChangeSet::added`] refer to `updated`.
///
/// # Algorithm
///
/// For each row `i` of `initial`, the expected counterpart is
/// `updated[i + offset]`:
///
/// - no row there: `i` was deleted (tail removal);
/// - equal: unchanged;
/// - different, and the record exists at `new_index` in `updated`: rows
///   `i..new_index` were inserted ahead of it and `offset` becomes
///   `new_index - i`;
/// - different, and the record is gone: `i` was deleted and `offset`
///   shrinks by one.
///
/// Finally, if the walk accounts for fewer net insertions than the length
/// difference, the unvisited tail of `updated` is marked added.
///
/// Worst case is O(n·m) (one scan of `updated` per mismatch).
///
/// # Example
///
/// ```
/// use rowdelta_core::compute_changes;
///
/// let changes = compute_changes(&["a", "b", "c"], &["a", "c"]);
/// assert!(changes.added.is_empty());
/// assert_eq!(changes.deleted.into_iter().collect::<Vec<_>>(), vec![1]);
/// ```
pub fn compute_changes<T: PartialEq>(initial: &[T], updated: &[T]) -> ChangeSet {
    let mut added: BTreeSet<usize> = BTreeSet::new();
    let mut deleted: BTreeSet<usize> = BTreeSet::new();
    let mut index_offset: isize = 0;

    for (index, element) in initial.iter().enumerate() {
        let expected = index as isize + index_offset;
        let counterpart = usize::try_from(expected)
            .ok()
            .and_then(|position| updated.get(position));

        match counterpart {
            None => {
                // tail of initial was removed
                deleted.insert(index);
            }
            Some(current) if current == element => {}
            Some(_) => match updated.iter().position(|candidate| candidate == element) {
                Some(new_index) => {
                    // Empty when the record realigns on an earlier duplicate.
                    added.extend(index..new_index);
                    index_offset = new_index as isize - index as isize;
                }
                None => {
                    deleted.insert(index);
                    index_offset -= 1;
                }
            },
        }
    }

    let length_delta = updated.len() as isize - initial.len() as isize;
    let walked_delta = added.len() as isize - deleted.len() as isize;
    if walked_delta < length_delta {
        let tail_start = (initial.len() as isize + index_offset).max(0) as usize;
        added.extend(tail_start..updated.len());
    }

    tracing::debug!(
        component = module_path!(),
        op = OP_COMPUTE_CHANGES,
        initial_len = initial.len(),
        updated_len = updated.len(),
        added_len = added.len(),
        deleted_len = deleted.len(),
    );

    ChangeSet { added, deleted }
}
