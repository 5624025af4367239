//! Main application module

pub mod helpers;
mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};
use std::sync::Arc;

use crate::features::{Settings, player};
pub use message::Message;
pub use state::{App, StartupOptions};
use state::{CoreState, LibraryState, UiState};

impl App {
    /// Create new application instance
    pub fn new(options: StartupOptions) -> (Self, Task<Message>) {
        // 1. Settings first so locale and volume are right from the start
        let settings = Settings::load();
        let db_path = options
            .database
            .clone()
            .unwrap_or_else(crate::utils::default_db_path);

        // 2. Initialize sub-states; this also spawns the media thread
        let mut core = CoreState::new(settings);
        let mut library = LibraryState::default();
        library.selected_tag = core.settings.library.last_tag_id;
        let ui = UiState::new();

        let media_events = core.media.as_mut().and_then(|m| m.take_event_rx());

        let app = Self { core, library, ui };

        // 3. Open main window
        let (window_id, open_window) = iced::window::open(iced::window::Settings {
            size: iced::Size::new(1280.0, 800.0),
            min_size: Some(iced::Size::new(720.0, 480.0)),
            exit_on_close_request: false,
            #[cfg(target_os = "linux")]
            platform_specific: iced::window::settings::PlatformSpecific {
                application_id: "tomeo".to_string(),
                ..Default::default()
            },
            ..Default::default()
        });
        tracing::info!("Opening main window with id: {:?}", window_id);

        // 4. Media events are drained for the lifetime of the app
        let media_task = match media_events {
            Some(mut rx) => Task::run(
                async_stream::stream! {
                    while let Some(event) = rx.recv().await {
                        yield event;
                    }
                },
                Message::Media,
            ),
            None => Task::none(),
        };

        let startup_files = if options.files.is_empty() {
            Task::none()
        } else {
            Task::done(Message::FilesChosen(options.files))
        };

        let init_task = Task::batch([
            open_window.discard(),
            media_task,
            Task::perform(helpers::init_database(db_path), |result| match result {
                Ok(db) => Message::DatabaseReady(Arc::new(db)),
                Err(e) => Message::DatabaseError(e.to_string()),
            }),
            startup_files,
        ]);

        (app, init_task)
    }

    /// Application theme for a specific window
    pub fn theme(&self, _window_id: iced::window::Id) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title from the current track and status text
    pub fn title(&self, _window_id: iced::window::Id) -> String {
        match self.library.playlist.current() {
            Some(entry) => player::window_title(&entry.name, &self.ui.status_text),
            None => "Tomeo".to_string(),
        }
    }

    /// Subscriptions for playback polling, keyboard events, and window close
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::keyboard;

        // 1. Keyboard events, unless a text editor has focus
        let keyboard_sub = if !self.is_editing_text() {
            keyboard::listen().filter_map(|event| match event {
                keyboard::Event::KeyPressed { key, modifiers, .. } => {
                    Some(Message::KeyPressed(key, modifiers))
                }
                _ => None,
            })
        } else {
            iced::Subscription::none()
        };

        // 2. Window close request
        let close_request_sub = iced::window::close_requests().map(|_id| Message::RequestClose);

        // 3. Playback monitoring while there is media to poll, at frame rate during video
        let playback_sub = match subscription_logic::playback_interval(
            self.ui.status,
            self.ui.playback_state,
            self.ui.video_available,
        ) {
            Some(interval) => iced::time::every(interval).map(|_| Message::PlaybackTick),
            None => iced::Subscription::none(),
        };

        iced::Subscription::batch([keyboard_sub, close_request_sub, playback_sub])
    }

    /// True while an inline tag or title editor is open
    fn is_editing_text(&self) -> bool {
        self.ui.tag_edit.is_some() || self.ui.video_rename.is_some()
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    use std::time::Duration;

    use crate::media::{MediaStatus, PlaybackState};

    /// Position polling period
    pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

    /// Frame pickup period while video plays (about 30 fps)
    pub const FRAME_INTERVAL: Duration = Duration::from_millis(33);

    /// Position polling runs while the backend holds or is opening media
    ///
    /// Some backends only report `Loaded` from a tick.
    pub fn needs_playback_subscription(status: MediaStatus) -> bool {
        status == MediaStatus::Loading || status.has_media()
    }

    /// Tick period, `None` when there is nothing to poll
    pub fn playback_interval(
        status: MediaStatus,
        state: PlaybackState,
        video_available: bool,
    ) -> Option<Duration> {
        if !needs_playback_subscription(status) {
            return None;
        }
        if video_available && state.is_playing() {
            Some(FRAME_INTERVAL)
        } else {
            Some(POLL_INTERVAL)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::subscription_logic::*;
    use crate::media::{MediaStatus, PlaybackState};

    #[test]
    fn playback_polling_follows_media() {
        for status in [
            MediaStatus::Loading,
            MediaStatus::Loaded,
            MediaStatus::Buffering,
            MediaStatus::Buffered,
            MediaStatus::Stalled,
        ] {
            assert!(needs_playback_subscription(status), "{:?}", status);
        }
    }

    #[test]
    fn no_polling_without_media() {
        for status in [
            MediaStatus::Unknown,
            MediaStatus::NoMedia,
            MediaStatus::Invalid,
        ] {
            assert!(!needs_playback_subscription(status), "{:?}", status);
        }
    }

    #[test]
    fn playing_video_ticks_at_frame_rate() {
        assert_eq!(
            playback_interval(MediaStatus::Buffered, PlaybackState::Playing, true),
            Some(FRAME_INTERVAL)
        );
        assert_eq!(
            playback_interval(MediaStatus::Buffered, PlaybackState::Paused, true),
            Some(POLL_INTERVAL)
        );
        assert_eq!(
            playback_interval(MediaStatus::Buffered, PlaybackState::Playing, false),
            Some(POLL_INTERVAL)
        );
        assert_eq!(
            playback_interval(MediaStatus::NoMedia, PlaybackState::Playing, true),
            None
        );
    }
}
