use chrono::{DateTime, TimeZone, Utc};
use rowdelta_core::{FavoritePost, InMemoryFavoritesRepository, Post};

/// Fixed timestamp so favorites compare equal across fetches
#[allow(dead_code)]
pub fn saved_on() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2021, 5, 6, 9, 30, 0).unwrap()
}

/// The four posts the profile screen ships with
#[allow(dead_code)]
pub fn sample_posts() -> Vec<Post> {
    vec![
        Post::new(1, "HistoryPorn", "Temple door, Purulia", "NBZ1p-Gj3pk", 305, 4872),
        Post::new(2, "Авторевю", "Mini electric concept", "lwtUQJBAaso", 4, 17),
        Post::new(3, "HistoryPorn", "David (Michelangelo)", "lu_gbWHdZxM", 468, 7527),
        Post::new(4, "Концептуальный вандализм", "Рязань", "dVTYC6mdeW0", 2737, 17982),
    ]
}

#[allow(dead_code)]
pub fn favorite(post: &Post) -> FavoritePost {
    FavoritePost::from_post(post, saved_on())
}

/// Repository pre-filled with every sample post
#[allow(dead_code)]
pub fn sample_repository() -> InMemoryFavoritesRepository {
    InMemoryFavoritesRepository::from_posts(sample_posts().iter().map(favorite)).unwrap()
}

/// Sorted index list, for readable assertions
#[allow(dead_code)]
pub fn idx(set: &std::collections::BTreeSet<usize>) -> Vec<usize> {
    set.iter().copied().collect()
}
