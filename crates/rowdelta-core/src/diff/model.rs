//! Change set output type.
//!
//! Index sets are `BTreeSet`s so iteration and serialization are ordered.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Rows added and deleted between two snapshots.
///
/// The two sets live in different coordinate spaces:
/// `deleted` indexes address the initial snapshot, `added` indexes address
/// the updated snapshot. A list view consumes them in one batch update,
/// deletes first, then inserts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChangeSet {
    /// Positions in the updated snapshot that are new rows
    pub added: BTreeSet<usize>,
    /// Positions in the initial snapshot whose rows are gone
    pub deleted: BTreeSet<usize>,
}

impl ChangeSet {
    pub fn new(added: BTreeSet<usize>, deleted: BTreeSet<usize>) -> Self {
        Self { added, deleted }
    }

    /// Build from index lists; duplicates collapse.
    pub fn from_indexes(
        added: impl IntoIterator<Item = usize>,
        deleted: impl IntoIterator<Item = usize>,
    ) -> Self {
        Self {
            added: added.into_iter().collect(),
            deleted: deleted.into_iter().collect(),
        }
    }

    /// `true` when no row is inserted or removed
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.deleted.is_empty()
    }

    pub fn added_len(&self) -> usize {
        self.added.len()
    }

    pub fn deleted_len(&self) -> usize {
        self.deleted.len()
    }

    /// Row count delta implied by this change set
    pub fn net_change(&self) -> isize {
        self.added.len() as isize - self.deleted.len() as isize
    }

    /// Whether applying this change set to `initial_len` rows yields
    /// `updated_len` rows.
    ///
    /// A list view rejects a batch update that fails this check.
    pub fn is_balanced(&self, initial_len: usize, updated_len: usize) -> bool {
        initial_len as isize + self.net_change() == updated_len as isize
    }
}
