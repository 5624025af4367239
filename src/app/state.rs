//! Application state definitions

use std::path::PathBuf;
use std::sync::Arc;

use crate::database::Database;
use crate::features::player::CursorShape;
use crate::features::{Playlist, Settings, TagListModel, VideoGridModel};
use crate::i18n::{Language, Locale};
use crate::media::{MediaHandle, MediaStatus, MediaThreadHandle, PlaybackState};

/// Main application state
pub struct App {
    /// Core infrastructure (settings, database, media thread)
    pub core: CoreState,
    /// Business data (playlist, tags, videos)
    pub library: LibraryState,
    /// UI state (playback display, editors, window)
    pub ui: UiState,
}

/// What the command line asked for at startup
#[derive(Debug, Clone, Default)]
pub struct StartupOptions {
    /// Media files appended to the playlist once the window is up
    pub files: Vec<PathBuf>,
    /// Database location, `None` for the default under the data dir
    pub database: Option<PathBuf>,
}

/// Core Infrastructure & Services
pub struct CoreState {
    pub db: Option<Arc<Database>>,
    pub db_error: Option<String>,
    pub media: Option<MediaThreadHandle>,
    pub settings: Settings,
    pub locale: Locale,
}

impl CoreState {
    pub fn new(settings: Settings) -> Self {
        let locale = Locale::new(Language::from_code(&settings.display.language));

        let media = match crate::media::spawn_media_thread() {
            Ok(media) => {
                media.handle.set_volume(settings.gain());
                media.handle.set_muted(settings.muted);
                media.handle.set_rate(settings.playback_rate);
                Some(media)
            }
            Err(e) => {
                tracing::error!("Failed to start media thread: {}", e);
                None
            }
        };

        Self {
            db: None,
            db_error: None,
            media,
            settings,
            locale,
        }
    }

    pub fn media(&self) -> Option<&MediaHandle> {
        self.media.as_ref().map(|m| &m.handle)
    }

    /// Persist settings, logging instead of failing
    pub fn save_settings(&self) {
        if let Err(e) = self.settings.save() {
            tracing::warn!("Failed to save settings: {}", e);
        }
    }
}

/// Business data
#[derive(Debug, Default)]
pub struct LibraryState {
    pub playlist: Playlist,
    pub tags: TagListModel,
    pub videos: VideoGridModel,
    /// Tag whose videos the grid shows
    pub selected_tag: Option<i64>,
}

impl LibraryState {
    /// Label of the selected tag, if it is still loaded
    pub fn selected_tag_label(&self) -> Option<&str> {
        let id = self.selected_tag?;
        self.tags.find(id).map(|t| t.label.as_str())
    }
}

/// UI state
#[derive(Debug, Default)]
pub struct UiState {
    // ============ Playback display ============
    pub status: MediaStatus,
    pub playback_state: PlaybackState,
    pub position_ms: u64,
    pub duration_ms: u64,
    pub video_available: bool,
    /// Last video frame picked up from the media thread
    pub frame: Option<iced::widget::image::Handle>,
    /// Status part of the window title
    pub status_text: String,
    /// Last backend error, shown for invalid media
    pub last_error: Option<String>,
    pub cursor: CursorShape,
    /// Slider value (0.0 to 1.0) while the seek slider is dragged
    pub seek_preview: Option<f32>,

    // ============ Window ============
    /// Fullscreen button state; honoured only while video is available
    pub fullscreen_requested: bool,
    pub is_fullscreen: bool,

    // ============ Library editors ============
    pub search_text: String,
    /// Tag row being renamed and its pending label
    pub tag_edit: Option<(usize, String)>,
    /// Video row being renamed and its pending title
    pub video_rename: Option<(usize, String)>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slider position, preferring the dragged value
    pub fn slider_value(&self) -> f32 {
        if let Some(preview) = self.seek_preview {
            return preview;
        }
        if self.duration_ms == 0 {
            0.0
        } else {
            (self.position_ms as f64 / self.duration_ms as f64) as f32
        }
    }

    /// Forget everything about the previous media
    pub fn reset_playback(&mut self) {
        self.position_ms = 0;
        self.duration_ms = 0;
        self.seek_preview = None;
        self.frame = None;
        self.status_text.clear();
        self.last_error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slider_prefers_preview() {
        let mut ui = UiState::new();
        ui.position_ms = 2_500;
        ui.duration_ms = 10_000;
        assert_eq!(ui.slider_value(), 0.25);

        ui.seek_preview = Some(0.8);
        assert_eq!(ui.slider_value(), 0.8);
    }

    #[test]
    fn slider_is_zero_without_duration() {
        let mut ui = UiState::new();
        ui.position_ms = 4_000;
        assert_eq!(ui.slider_value(), 0.0);
    }

    #[test]
    fn reset_clears_status() {
        let mut ui = UiState::new();
        ui.status_text = "Media Stalled".to_string();
        ui.last_error = Some("bad file".to_string());
        ui.position_ms = 10;
        ui.frame = Some(iced::widget::image::Handle::from_rgba(1, 1, vec![0u8; 4]));
        ui.reset_playback();
        assert!(ui.frame.is_none());
        assert!(ui.status_text.is_empty());
        assert_eq!(ui.last_error, None);
        assert_eq!(ui.position_ms, 0);
    }
}
