//! Favorites query layer.
//!
//! The session only needs an ordered, deterministic fetch plus save and
//! remove; [`FavoritesRepository`] is that seam. Backends are chosen by
//! whoever constructs the session.

use std::collections::BTreeMap;
use std::time::Instant;

use crate::errors::{Result, RowDeltaError};
use crate::filter::AuthorFilter;
use crate::model::FavoritePost;
use crate::{log_op_end, log_op_error, log_op_start};
use rowdelta_core_types::schema::{OP_REMOVE_FAVORITE, OP_SAVE_FAVORITE};

/// Storage backend for favorite posts
pub trait FavoritesRepository {
    /// Fetch favorites ordered by `identifier` ascending, optionally
    /// restricted to authors matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryUnavailable` if the backend cannot be read.
    fn fetch(&self, filter: Option<&AuthorFilter>) -> Result<Vec<FavoritePost>>;

    /// Store a new favorite.
    ///
    /// # Errors
    ///
    /// Returns `DuplicatePost` if a favorite with the same identifier exists.
    fn save(&mut self, post: FavoritePost) -> Result<()>;

    /// Remove a favorite and return it.
    ///
    /// # Errors
    ///
    /// Returns `PostNotFound` if no favorite has this identifier.
    fn remove(&mut self, identifier: i64) -> Result<FavoritePost>;
}

/// In-memory repository keyed by post identifier
///
/// Not thread-safe; wrap it if it must be shared.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFavoritesRepository {
    posts: BTreeMap<i64, FavoritePost>,
    unavailable: bool,
}

impl InMemoryFavoritesRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a repository from existing favorites.
    ///
    /// # Errors
    ///
    /// Returns `DuplicatePost` on the first repeated identifier.
    pub fn from_posts(posts: impl IntoIterator<Item = FavoritePost>) -> Result<Self> {
        let mut repository = Self::new();
        for post in posts {
            repository.save(post)?;
        }
        Ok(repository)
    }

    /// Make every subsequent call fail with `RepositoryUnavailable`
    pub fn set_unavailable(&mut self, unavailable: bool) {
        self.unavailable = unavailable;
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    fn ensure_available(&self) -> Result<()> {
        if self.unavailable {
            return Err(RowDeltaError::RepositoryUnavailable {
                message: "in-memory favorites store is offline".to_string(),
            });
        }
        Ok(())
    }
}

impl FavoritesRepository for InMemoryFavoritesRepository {
    fn fetch(&self, filter: Option<&AuthorFilter>) -> Result<Vec<FavoritePost>> {
        self.ensure_available()?;
        Ok(self
            .posts
            .values()
            .filter(|post| filter.map_or(true, |f| f.matches(post)))
            .cloned()
            .collect())
    }

    fn save(&mut self, post: FavoritePost) -> Result<()> {
        let start = Instant::now();
        log_op_start!(OP_SAVE_FAVORITE, identifier = post.identifier);

        let result = self.ensure_available().and_then(|()| {
            if self.posts.contains_key(&post.identifier) {
                return Err(RowDeltaError::DuplicatePost {
                    identifier: post.identifier,
                });
            }
            self.posts.insert(post.identifier, post);
            Ok(())
        });

        match &result {
            Ok(()) => {
                log_op_end!(
                    OP_SAVE_FAVORITE,
                    duration_ms = start.elapsed().as_millis() as u64
                );
            }
            Err(err) => log_op_error!(
                OP_SAVE_FAVORITE,
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            ),
        }
        result
    }

    fn remove(&mut self, identifier: i64) -> Result<FavoritePost> {
        let start = Instant::now();
        log_op_start!(OP_REMOVE_FAVORITE, identifier = identifier);

        let result = self.ensure_available().and_then(|()| {
            self.posts
                .remove(&identifier)
                .ok_or(RowDeltaError::PostNotFound { identifier })
        });

        match &result {
            Ok(_) => {
                log_op_end!(
                    OP_REMOVE_FAVORITE,
                    duration_ms = start.elapsed().as_millis() as u64
                );
            }
            Err(err) => log_op_error!(
                OP_REMOVE_FAVORITE,
                err.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            ),
        }
        result
    }
}
