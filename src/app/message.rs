//! Application messages

use std::path::PathBuf;
use std::sync::Arc;

use iced::keyboard::{Key, Modifiers};

use crate::database::{Database, DbTag, VideoRows};
use crate::features::{Action, VideoQuery};
use crate::media::MediaEvent;

/// Application messages
#[derive(Clone)]
pub enum Message {
    /// No-op message for tasks whose result is not needed
    Noop,

    // ============ Startup ============
    DatabaseReady(Arc<Database>),
    DatabaseError(String),

    // ============ Media ============
    /// Event reported by the media thread
    Media(MediaEvent),
    /// Position poll while media is loaded
    PlaybackTick,

    // ============ Playlist ============
    /// Show the open-files dialog
    OpenFiles,
    /// Files picked in the dialog or passed on the command line
    FilesChosen(Vec<PathBuf>),
    PlaylistSelect(usize),
    /// Make a row current and play it
    PlaylistActivate(usize),
    RemoveSelected,
    ClearPlaylist,

    // ============ Transport ============
    Play,
    Pause,
    TogglePlayback,
    Stop,
    Next,
    Previous,
    SkipForward,
    SkipBackward,
    /// Seek slider dragged (0.0 to 1.0)
    SeekPreview(f32),
    /// Seek slider released
    SeekRelease,
    VolumeChanged(u8),
    ToggleMute,
    RateChanged(f32),
    ToggleFullscreen,
    ToggleLibrary,

    // ============ Tags ============
    TagsLoaded(Vec<DbTag>),
    SelectTag(i64),
    AddTag,
    TagAdded(i64),
    /// Open the inline label editor for a tag row
    EditTag(usize),
    TagEditChanged(String),
    SubmitTagEdit,
    CancelTagEdit,
    TagEditApplied,

    // ============ Videos ============
    SearchChanged(String),
    SubmitSearch,
    VideosLoaded(VideoQuery, VideoRows),
    AddVideo,
    VideosChosen(Vec<PathBuf>),
    /// Number of videos written for the selected tag
    VideosAdded(usize),
    RemoveVideo(usize),
    VideoRemoved(usize),
    RenameVideo(usize),
    VideoTitleChanged(String),
    SubmitVideoTitle,
    CancelVideoRename,
    VideoRenamed(usize),
    /// Append a grid item to the playlist and play it
    PlayVideo(usize),
    LibraryActionFailed(String),

    // ============ Keyboard ============
    KeyPressed(Key, Modifiers),
    ExecuteAction(Action),

    // ============ Settings & Window ============
    ToggleDarkMode,
    ToggleLanguage,
    RequestClose,
}

impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        macro_rules! simple {
            ($name:literal) => { write!(f, $name) };
            ($name:literal, $($arg:tt)*) => { write!(f, concat!($name, "({})"), format_args!($($arg)*)) };
        }

        match self {
            // High-frequency messages - keep minimal
            Self::PlaybackTick => simple!("PlaybackTick"),
            Self::Noop => simple!("Noop"),
            Self::Media(event) => simple!("Media", "{:?}", event),

            // Arc-wrapped and row data - show size only
            Self::DatabaseReady(_) => simple!("DatabaseReady"),
            Self::TagsLoaded(v) => simple!("TagsLoaded", "{} tags", v.len()),
            Self::VideosLoaded(q, rows) => {
                simple!("VideosLoaded", "tag={}, {} rows", q.tag_id, rows.len())
            }
            Self::FilesChosen(v) => simple!("FilesChosen", "{} files", v.len()),
            Self::VideosChosen(v) => simple!("VideosChosen", "{} files", v.len()),

            Self::DatabaseError(e) => simple!("DatabaseError", "{}", e),
            Self::LibraryActionFailed(e) => simple!("LibraryActionFailed", "{}", e),

            Self::OpenFiles => simple!("OpenFiles"),
            Self::PlaylistSelect(row) => simple!("PlaylistSelect", "{}", row),
            Self::PlaylistActivate(row) => simple!("PlaylistActivate", "{}", row),
            Self::RemoveSelected => simple!("RemoveSelected"),
            Self::ClearPlaylist => simple!("ClearPlaylist"),

            Self::Play => simple!("Play"),
            Self::Pause => simple!("Pause"),
            Self::TogglePlayback => simple!("TogglePlayback"),
            Self::Stop => simple!("Stop"),
            Self::Next => simple!("Next"),
            Self::Previous => simple!("Previous"),
            Self::SkipForward => simple!("SkipForward"),
            Self::SkipBackward => simple!("SkipBackward"),
            Self::SeekPreview(v) => simple!("SeekPreview", "{:.3}", v),
            Self::SeekRelease => simple!("SeekRelease"),
            Self::VolumeChanged(v) => simple!("VolumeChanged", "{}", v),
            Self::ToggleMute => simple!("ToggleMute"),
            Self::RateChanged(r) => simple!("RateChanged", "{}", r),
            Self::ToggleFullscreen => simple!("ToggleFullscreen"),
            Self::ToggleLibrary => simple!("ToggleLibrary"),

            Self::SelectTag(id) => simple!("SelectTag", "{}", id),
            Self::AddTag => simple!("AddTag"),
            Self::TagAdded(id) => simple!("TagAdded", "{}", id),
            Self::EditTag(row) => simple!("EditTag", "{}", row),
            Self::TagEditChanged(s) => simple!("TagEditChanged", "{}", s),
            Self::SubmitTagEdit => simple!("SubmitTagEdit"),
            Self::CancelTagEdit => simple!("CancelTagEdit"),
            Self::TagEditApplied => simple!("TagEditApplied"),

            Self::SearchChanged(s) => simple!("SearchChanged", "{}", s),
            Self::SubmitSearch => simple!("SubmitSearch"),
            Self::AddVideo => simple!("AddVideo"),
            Self::VideosAdded(n) => simple!("VideosAdded", "{}", n),
            Self::RemoveVideo(row) => simple!("RemoveVideo", "{}", row),
            Self::VideoRemoved(row) => simple!("VideoRemoved", "{}", row),
            Self::RenameVideo(row) => simple!("RenameVideo", "{}", row),
            Self::VideoTitleChanged(s) => simple!("VideoTitleChanged", "{}", s),
            Self::SubmitVideoTitle => simple!("SubmitVideoTitle"),
            Self::CancelVideoRename => simple!("CancelVideoRename"),
            Self::VideoRenamed(row) => simple!("VideoRenamed", "{}", row),
            Self::PlayVideo(row) => simple!("PlayVideo", "{}", row),

            Self::KeyPressed(key, modifiers) => {
                simple!("KeyPressed", "{:?}, {:?}", key, modifiers)
            }
            Self::ExecuteAction(action) => simple!("ExecuteAction", "{:?}", action),

            Self::ToggleDarkMode => simple!("ToggleDarkMode"),
            Self::ToggleLanguage => simple!("ToggleLanguage"),
            Self::RequestClose => simple!("RequestClose"),
        }
    }
}
