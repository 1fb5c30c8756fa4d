//! rowdelta core - incremental list reconciliation
//!
//! This crate provides:
//! - The change-index diff between two ordered snapshots (`diff::engine`)
//! - Batch application of a change set, the way a list view consumes it
//! - The favorites record model, author filter and repository seam
//! - An explicit reload session that turns fetches into change sets
//!
//! The diff itself is pure and infallible; everything that can fail lives
//! in the application, repository and session layers.

pub mod diff;
pub mod errors;
pub mod filter;
pub mod logging_facility;
pub mod model;
pub mod repository;
pub mod session;

// Re-export commonly used types
pub use diff::{apply_change_set, compute_changes, render_summary, ChangeSet};
pub use errors::{ExError, ExErrorKind, Result, RowDeltaError};
pub use filter::AuthorFilter;
pub use model::{FavoritePost, Post};
pub use repository::{FavoritesRepository, InMemoryFavoritesRepository};
pub use session::{FavoritesSession, FilterChange, ReloadRequest, ReloadResponse};
