//! Change-index diff between two ordered snapshots.
//!
//! Compares an `initial` and an `updated` snapshot of equality-comparable
//! records and reports which rows were deleted (initial coordinates) and
//! which were added (updated coordinates), ready for a batched list update.
//!
//! ## Entry point
//!
//! ```
//! use rowdelta_core::diff::{compute_changes, render_summary};
//!
//! let changes = compute_changes(&["a", "b"], &["z", "a", "b"]);
//! assert_eq!(render_summary(&changes), "1 row added [0]");
//! ```
//!
//! ## Guarantees
//!
//! - **Totality**: every pair of inputs produces a change set.
//! - **Determinism**: identical inputs produce identical output; duplicate
//!   values are resolved by first match.
//! - **Sparse changes only**: append, prepend, single insert and single
//!   delete reconstruct exactly. Moves and denser edits may yield an
//!   unbalanced change set, which [`apply_change_set`] reports instead of
//!   silently corrupting rows.

pub mod apply;
pub mod engine;
pub mod model;
pub mod summary;

pub use apply::{apply_change_set, reconstructs};
pub use engine::compute_changes;
pub use model::ChangeSet;
pub use summary::render_summary;
