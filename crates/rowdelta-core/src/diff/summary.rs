//! Human-readable change set summaries.

use crate::diff::model::ChangeSet;
use std::collections::BTreeSet;

/// Render a one-line summary of a [`ChangeSet`].
///
/// Informational only; the structured change set is authoritative.
///
/// ```
/// use rowdelta_core::diff::{model::ChangeSet, render_summary};
///
/// assert_eq!(render_summary(&ChangeSet::default()), "no changes");
/// let changes = ChangeSet::from_indexes([1, 2], [0]);
/// assert_eq!(
///     render_summary(&changes),
///     "2 rows added [1, 2], 1 row deleted [0]"
/// );
/// ```
pub fn render_summary(changes: &ChangeSet) -> String {
    if changes.is_empty() {
        return "no changes".to_string();
    }

    let mut parts: Vec<String> = Vec::new();
    if !changes.added.is_empty() {
        parts.push(format!(
            "{} added [{}]",
            rows(changes.added_len()),
            join(&changes.added)
        ));
    }
    if !changes.deleted.is_empty() {
        parts.push(format!(
            "{} deleted [{}]",
            rows(changes.deleted_len()),
            join(&changes.deleted)
        ));
    }
    parts.join(", ")
}

fn rows(count: usize) -> String {
    if count == 1 {
        "1 row".to_string()
    } else {
        format!("{} rows", count)
    }
}

fn join(indexes: &BTreeSet<usize>) -> String {
    indexes
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
