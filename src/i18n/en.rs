//! English translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    m.insert(Key::AppName, "Tomeo");

    // Playlist
    m.insert(Key::OpenFilesTitle, "Open Files");
    m.insert(Key::MediaFilesFilter, "Media files");
    m.insert(Key::AddFiles, "Add files");
    m.insert(Key::RemoveSelected, "Remove selected");
    m.insert(Key::ClearPlaylist, "Clear playlist");
    m.insert(Key::TotalVideos, "Total {} videos");
    m.insert(Key::PlaylistEmpty, "Open files to start playing");

    // Transport
    m.insert(Key::Play, "Play");
    m.insert(Key::Pause, "Pause");
    m.insert(Key::Stop, "Stop");
    m.insert(Key::Next, "Next");
    m.insert(Key::Previous, "Previous");
    m.insert(Key::SkipForward, "Forward 10s");
    m.insert(Key::SkipBackward, "Back 10s");
    m.insert(Key::Mute, "Mute");
    m.insert(Key::Unmute, "Unmute");
    m.insert(Key::Fullscreen, "Fullscreen");
    m.insert(Key::LibraryButton, "Library");
    m.insert(Key::NoTagSelected, "No tag");

    // Status
    m.insert(Key::StatusLoading, "Loading...");
    m.insert(Key::StatusStalled, "Media Stalled");
    m.insert(Key::StatusBuffering, "Buffering {}%");
    m.insert(Key::NoVideoOutput, "No video output");

    // Library
    m.insert(Key::TagCount, "{} tags");
    m.insert(Key::SearchPlaceholder, "Search titles...");
    m.insert(Key::Search, "Search");
    m.insert(Key::AddTag, "Add tag");
    m.insert(Key::AddVideo, "Add video");
    m.insert(Key::AddVideosTitle, "Add Videos");
    m.insert(Key::NewTagLabel, "New tag");
    m.insert(Key::EditTag, "Rename");
    m.insert(Key::RenameVideo, "Rename");
    m.insert(Key::RemoveVideo, "Remove");
    m.insert(Key::Save, "Save");
    m.insert(Key::Cancel, "Cancel");
    m.insert(Key::NoVideos, "No videos under this tag");
    m.insert(Key::SelectTagFirst, "Select a tag to see its videos");

    // Settings toggles
    m.insert(Key::ToggleTheme, "Theme");
    m.insert(Key::ToggleLanguage, "中文");

    m.insert(Key::DatabaseUnavailable, "Library unavailable");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
