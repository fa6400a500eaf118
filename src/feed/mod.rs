///! NASA NEO feed module
///!
///! Fetches the near-Earth-object feed for a date window, parses the
///! grouped-by-date JSON, and renders it into a flat one-line-per-object
///! text summary.

pub mod parser;
pub mod render;
pub mod types;
pub mod updater;

pub use types::{FeedGroup, FeedSnapshot, NearEarthObject};
pub use updater::{FeedTask, FeedUpdater};
