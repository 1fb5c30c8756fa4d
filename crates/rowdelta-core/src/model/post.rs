use serde::{Deserialize, Serialize};

/// A feed post as shown on the profile and favorites screens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Stable identifier assigned by the feed
    pub identifier: i64,
    pub author: String,
    pub description: String,
    /// Image asset name or cache filename; empty when absent
    #[serde(default)]
    pub image: String,
    pub likes: u32,
    pub views: u32,
}

impl Post {
    pub fn new(
        identifier: i64,
        author: impl Into<String>,
        description: impl Into<String>,
        image: impl Into<String>,
        likes: u32,
        views: u32,
    ) -> Self {
        Self {
            identifier,
            author: author.into(),
            description: description.into(),
            image: image.into(),
            likes,
            views,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_defaults_to_empty() {
        let json = r#"{"identifier":3,"author":"HistoryPorn","description":"David","likes":468,"views":7527}"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.image, "");
        assert_eq!(post.likes, 468);
    }
}
