//! Author filtering for the favorites list.
//!
//! Authors are compared through a normalized search key: trimmed, accents
//! stripped, lowercased. A filter matches every author whose key starts with
//! the filter's key.

use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::errors::{Result, RowDeltaError};
use crate::model::FavoritePost;

/// Derive the search key for an author name.
///
/// ```
/// use rowdelta_core::filter::normalize_author;
///
/// assert_eq!(normalize_author(" Ångström "), "angstrom");
/// assert_eq!(normalize_author("Авторевю"), "авторевю");
/// ```
pub fn normalize_author(author: &str) -> String {
    author
        .trim()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// A validated author prefix filter
///
/// Serialized as the raw text; deserializing goes through [`AuthorFilter::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AuthorFilter {
    raw: String,
    key: String,
}

impl AuthorFilter {
    /// Build a filter from user input.
    ///
    /// # Errors
    ///
    /// Returns `InvalidFilter` if the input is empty after normalization.
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        let key = normalize_author(&raw);
        if key.is_empty() {
            return Err(RowDeltaError::InvalidFilter {
                reason: "filter text is empty".to_string(),
            });
        }
        Ok(Self { raw, key })
    }

    /// The text as the user typed it
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The normalized prefix compared against `normalized_author`
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn matches(&self, post: &FavoritePost) -> bool {
        post.normalized_author.starts_with(&self.key)
    }
}

impl TryFrom<String> for AuthorFilter {
    type Error = RowDeltaError;

    fn try_from(raw: String) -> Result<Self> {
        Self::new(raw)
    }
}

impl From<AuthorFilter> for String {
    fn from(filter: AuthorFilter) -> Self {
        filter.raw
    }
}

impl std::fmt::Display for AuthorFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}
