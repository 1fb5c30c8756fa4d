//! Filter transition command
//!
//! Loads favorites into an in-memory repository and replays a filter
//! change through a session, the way the favorites screen does.

use clap::Args;
use rowdelta_core::{
    render_summary, FavoritePost, FavoritesSession, InMemoryFavoritesRepository, Post,
};
use std::path::PathBuf;

use super::{read_json, OutputFormat};

#[derive(Debug, Args)]
pub struct FilterArgs {
    /// JSON array of posts
    #[arg(long)]
    pub favorites: PathBuf,

    /// Filter active before the transition (none if omitted)
    #[arg(long)]
    pub from: Option<String>,

    /// Filter active after the transition (cleared if omitted)
    #[arg(long)]
    pub to: Option<String>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

pub fn execute(args: FilterArgs) -> Result<(), Box<dyn std::error::Error>> {
    let posts: Vec<Post> = read_json(&args.favorites)?;
    let saved_on = chrono::Utc::now();
    let repository = InMemoryFavoritesRepository::from_posts(
        posts.iter().map(|post| FavoritePost::from_post(post, saved_on)),
    )?;

    let mut session = FavoritesSession::new(repository);
    match args.from.as_deref() {
        Some(text) => session.set_filter(text)?,
        None => session.refresh()?,
    };

    let changes = match args.to.as_deref() {
        Some(text) => session.set_filter(text)?,
        None => session.clear_filter()?,
    };

    match args.format {
        OutputFormat::Text => {
            println!("{}", render_summary(&changes));
            for (index, post) in session.rows().iter().enumerate() {
                println!("  [{}] {}: {}", index, post.author, post.description);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&changes)?),
    }

    Ok(())
}
