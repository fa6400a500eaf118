///! neofeed - NASA near-Earth-object feed summaries and assessment reports

pub mod analysis;
pub mod client;
pub mod config;
pub mod error;
pub mod feed;
pub mod logging;
