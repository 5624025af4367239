//! Database operations organized by entity type

mod tags;
mod videos;

pub use tags::*;
pub use videos::*;

/// Today's local date as stored in `videos.date`
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
