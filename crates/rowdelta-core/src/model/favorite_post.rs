use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::post::Post;
use crate::filter::normalize_author;

/// A post the user saved to favorites
///
/// Two favorites are equal when they share an `identifier`. A refetched row
/// whose counters changed stays in place when snapshots are diffed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoritePost {
    pub identifier: i64,
    pub author: String,

    /// Search key derived from `author` (see [`normalize_author`])
    pub normalized_author: String,

    pub description: String,
    pub image: String,
    pub likes: u32,
    pub views: u32,

    /// When the post was added to favorites
    pub saved_on: DateTime<Utc>,
}

impl FavoritePost {
    /// Capture a post as a favorite saved at `saved_on`
    pub fn from_post(post: &Post, saved_on: DateTime<Utc>) -> Self {
        Self {
            identifier: post.identifier,
            author: post.author.clone(),
            normalized_author: normalize_author(&post.author),
            description: post.description.clone(),
            image: post.image.clone(),
            likes: post.likes,
            views: post.views,
            saved_on,
        }
    }

    /// Convert back to the plain post shown in a row
    pub fn to_post(&self) -> Post {
        Post {
            identifier: self.identifier,
            author: self.author.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
            likes: self.likes,
            views: self.views,
        }
    }
}

impl PartialEq for FavoritePost {
    fn eq(&self, other: &Self) -> bool {
        self.identifier == other.identifier
    }
}

impl Eq for FavoritePost {}
