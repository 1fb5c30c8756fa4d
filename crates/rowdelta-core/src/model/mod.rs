pub mod favorite_post;
pub mod post;

pub use favorite_post::FavoritePost;
pub use post::Post;
