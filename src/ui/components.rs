//! UI Components module - business-specific composite components
//!
//! Components map state to widgets and widget interactions to
//! `crate::app::Message`. They read state but never change it.

pub mod library_panel;
pub mod player_bar;
pub mod playlist_panel;
pub mod search_bar;
