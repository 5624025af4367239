//! Video library models
//!
//! - `VideoGridModel`: videos of the selected tag, optionally narrowed by title
//! - `TagListModel`: tags with label uniqueness enforced on edit

pub mod tag_list;
pub mod video_grid;

pub use tag_list::{LABEL_COLUMN, TagEdit, TagListModel};
pub use video_grid::{VideoGridModel, VideoQuery};
