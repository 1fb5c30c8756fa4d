//! Favorites reload session.
//!
//! A session owns the rows currently shown and the active author filter.
//! Every reload follows the same contract: fetch a fresh snapshot from the
//! repository, diff it against the rows on screen, commit it, and hand back
//! the change set the presentation layer needs for a batched update.

use chrono::{DateTime, Utc};
use std::time::Instant;

use crate::diff::{compute_changes, ChangeSet};
use crate::errors::{Result, RowDeltaError};
use crate::filter::AuthorFilter;
use crate::model::{FavoritePost, Post};
use crate::repository::FavoritesRepository;
use crate::{log_op_end, log_op_error, log_op_start};
use rowdelta_core_types::schema::OP_RELOAD;
use rowdelta_core_types::RequestId;

/// How a reload treats the active filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterChange {
    /// Reuse the current filter (plain refresh)
    Keep,
    /// Replace the filter
    Set(AuthorFilter),
    /// Drop the filter and show every favorite
    Clear,
}

#[derive(Debug, Clone)]
pub struct ReloadRequest {
    pub request_id: RequestId,
    pub filter: FilterChange,
}

impl ReloadRequest {
    pub fn new(filter: FilterChange) -> Self {
        Self {
            request_id: RequestId::new(),
            filter,
        }
    }

    /// Reload with the current filter
    pub fn refresh() -> Self {
        Self::new(FilterChange::Keep)
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = request_id;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReloadResponse {
    pub request_id: RequestId,
    /// Deletes against the previous rows, inserts against the new rows
    pub changes: ChangeSet,
    /// Row count after the reload
    pub row_count: usize,
}

/// Rows and filter state for the favorites list
///
/// The repository is injected at construction; the session never reaches
/// for a shared backend.
#[derive(Debug)]
pub struct FavoritesSession<R: FavoritesRepository> {
    repository: R,
    rows: Vec<FavoritePost>,
    filter: Option<AuthorFilter>,
}

impl<R: FavoritesRepository> FavoritesSession<R> {
    /// Create a session with no rows loaded yet
    pub fn new(repository: R) -> Self {
        Self {
            repository,
            rows: Vec::new(),
            filter: None,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn repository_mut(&mut self) -> &mut R {
        &mut self.repository
    }

    /// Fetch a new snapshot and report how the rows changed.
    ///
    /// Rows and filter are committed together, only after the fetch
    /// succeeds.
    ///
    /// # Errors
    ///
    /// Propagates repository errors; the session state is unchanged.
    pub fn reload(&mut self, request: ReloadRequest) -> Result<ReloadResponse> {
        let start = Instant::now();
        let ReloadRequest { request_id, filter } = request;
        log_op_start!(
            OP_RELOAD,
            request_id = request_id.as_str(),
            initial_len = self.rows.len()
        );

        let next_filter = match filter {
            FilterChange::Keep => self.filter.clone(),
            FilterChange::Set(filter) => Some(filter),
            FilterChange::Clear => None,
        };

        let fetched = match self.repository.fetch(next_filter.as_ref()) {
            Ok(rows) => rows,
            Err(err) => {
                log_op_error!(
                    OP_RELOAD,
                    err.clone(),
                    duration_ms = start.elapsed().as_millis() as u64,
                    request_id = request_id.as_str()
                );
                return Err(err);
            }
        };

        let changes = compute_changes(&self.rows, &fetched);
        self.rows = fetched;
        self.filter = next_filter;

        log_op_end!(
            OP_RELOAD,
            duration_ms = start.elapsed().as_millis() as u64,
            request_id = request_id.as_str(),
            row_count = self.rows.len(),
            added_len = changes.added_len(),
            deleted_len = changes.deleted_len()
        );

        Ok(ReloadResponse {
            request_id,
            changes,
            row_count: self.rows.len(),
        })
    }

    /// Reload with the current filter
    ///
    /// # Errors
    ///
    /// Propagates repository errors.
    pub fn refresh(&mut self) -> Result<ChangeSet> {
        self.reload(ReloadRequest::refresh())
            .map(|response| response.changes)
    }

    /// Filter the list to authors starting with `text`
    ///
    /// # Errors
    ///
    /// `InvalidFilter` for blank text, otherwise repository errors.
    pub fn set_filter(&mut self, text: &str) -> Result<ChangeSet> {
        let filter = AuthorFilter::new(text)?;
        self.reload(ReloadRequest::new(FilterChange::Set(filter)))
            .map(|response| response.changes)
    }

    /// Show every favorite again
    ///
    /// # Errors
    ///
    /// Propagates repository errors.
    pub fn clear_filter(&mut self) -> Result<ChangeSet> {
        self.reload(ReloadRequest::new(FilterChange::Clear))
            .map(|response| response.changes)
    }

    pub fn filter(&self) -> Option<&AuthorFilter> {
        self.filter.as_ref()
    }

    pub fn rows(&self) -> &[FavoritePost] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The post shown at `index`
    ///
    /// # Errors
    ///
    /// `RowOutOfRange` if `index` is not a visible row.
    pub fn post(&self, index: usize) -> Result<Post> {
        self.rows
            .get(index)
            .map(FavoritePost::to_post)
            .ok_or(RowDeltaError::RowOutOfRange {
                index,
                row_count: self.rows.len(),
            })
    }

    pub fn favorite_post(&self, index: usize) -> Option<&FavoritePost> {
        self.rows.get(index)
    }

    /// Save `post` as a favorite. Visible rows change on the next reload.
    ///
    /// # Errors
    ///
    /// Propagates repository errors (e.g. `DuplicatePost`).
    pub fn add_favorite(&mut self, post: &Post, saved_on: DateTime<Utc>) -> Result<()> {
        self.repository
            .save(FavoritePost::from_post(post, saved_on))
    }

    /// Remove a favorite. Visible rows change on the next reload.
    ///
    /// # Errors
    ///
    /// Propagates repository errors (e.g. `PostNotFound`).
    pub fn remove_favorite(&mut self, identifier: i64) -> Result<FavoritePost> {
        self.repository.remove(identifier)
    }
}
