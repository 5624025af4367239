//! UI module for the player window
//!
//! - **Components** (`components`): player bar, playlist and library panels
//! - **Theme** (`theme`): palette and widget styles for dark and light mode

pub mod components;
pub mod theme;
