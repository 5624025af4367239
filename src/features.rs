//! Feature modules - business logic separated from UI
//!
//! Each feature module contains the core logic for a specific functionality.
//! Features should not depend on UI components directly.

pub mod keybindings;
pub mod library;
pub mod player;
pub mod playlist;
pub mod settings;

pub use keybindings::{Action, KeyBindings};
pub use library::{TagListModel, VideoGridModel, VideoQuery};
pub use playlist::{Playlist, PlaylistEntry};
pub use settings::Settings;
