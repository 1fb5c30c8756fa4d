//! Batch application of a [`ChangeSet`].
//!
//! Mirrors how a list view performs a batched update: rows listed in
//! `deleted` are removed using initial coordinates, then rows listed in
//! `added` are inserted in ascending order using updated coordinates, and
//! the final row count must match the updated snapshot.

use crate::diff::model::ChangeSet;
use crate::errors::{Result, RowDeltaError};
use crate::{log_op_end, log_op_error, log_op_start};
use rowdelta_core_types::schema::OP_APPLY_CHANGE_SET;
use std::time::Instant;

/// Rebuild the visible rows by applying `changes` to `initial`.
///
/// Inserted rows take their value from `updated` at the inserted index.
/// Rows that survive deletion are carried over from `initial` unchanged.
///
/// # Errors
///
/// - `DeletedIndexOutOfRange`: a deleted index is not a row of `initial`
/// - `AddedIndexOutOfRange`: an added index is not a row of `updated`
/// - `InsertPositionOutOfRange`: an insert lands past the current end
/// - `UnbalancedChangeSet`: the resulting row count differs from `updated.len()`
pub fn apply_change_set<T: Clone>(
    initial: &[T],
    updated: &[T],
    changes: &ChangeSet,
) -> Result<Vec<T>> {
    let start = Instant::now();
    log_op_start!(
        OP_APPLY_CHANGE_SET,
        initial_len = initial.len(),
        updated_len = updated.len()
    );

    match apply_inner(initial, updated, changes) {
        Ok(rows) => {
            log_op_end!(
                OP_APPLY_CHANGE_SET,
                duration_ms = start.elapsed().as_millis() as u64,
                row_count = rows.len()
            );
            Ok(rows)
        }
        Err(err) => {
            log_op_error!(
                OP_APPLY_CHANGE_SET,
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            Err(err)
        }
    }
}

fn apply_inner<T: Clone>(initial: &[T], updated: &[T], changes: &ChangeSet) -> Result<Vec<T>> {
    if let Some(&index) = changes.deleted.iter().find(|&&i| i >= initial.len()) {
        return Err(RowDeltaError::DeletedIndexOutOfRange {
            index,
            len: initial.len(),
        });
    }
    if let Some(&index) = changes.added.iter().find(|&&i| i >= updated.len()) {
        return Err(RowDeltaError::AddedIndexOutOfRange {
            index,
            len: updated.len(),
        });
    }

    let mut rows: Vec<T> = initial
        .iter()
        .enumerate()
        .filter(|(index, _)| !changes.deleted.contains(index))
        .map(|(_, row)| row.clone())
        .collect();

    // BTreeSet iteration is ascending, so each insert sees the rows
    // preceding it already in place.
    for &index in &changes.added {
        if index > rows.len() {
            return Err(RowDeltaError::InsertPositionOutOfRange {
                index,
                row_count: rows.len(),
            });
        }
        rows.insert(index, updated[index].clone());
    }

    if rows.len() != updated.len() {
        return Err(RowDeltaError::UnbalancedChangeSet {
            expected: updated.len(),
            actual: rows.len(),
        });
    }

    Ok(rows)
}

/// Whether applying `changes` to `initial` yields exactly `updated`.
pub fn reconstructs<T: Clone + PartialEq>(
    initial: &[T],
    updated: &[T],
    changes: &ChangeSet,
) -> bool {
    apply_inner(initial, updated, changes).is_ok_and(|rows| rows.as_slice() == updated)
}
