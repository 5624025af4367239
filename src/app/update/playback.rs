//! Playback message handlers
//!
//! Transport commands go to the media thread; media events come back and
//! are folded into `UiState` here.

use std::time::Duration;

use iced::Task;
use iced::widget::image;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::player::{
    self, EndOfMediaAction, PreviousAction, SKIP_STEP_MS, fullscreen_allowed, previous_action,
};
use crate::i18n::Key;
use crate::media::{MediaEvent, MediaStatus};

impl App {
    /// Handle playback-related messages
    pub fn handle_playback(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Media(event) => Some(self.handle_media_event(event.clone())),

            Message::PlaybackTick => {
                if let Some(media) = self.core.media() {
                    media.tick();
                    if let Some(frame) = media.take_frame() {
                        self.ui.frame = Some(image::Handle::from_rgba(
                            frame.width,
                            frame.height,
                            frame.pixels,
                        ));
                    }
                }
                Some(Task::none())
            }

            Message::Play => Some(self.play()),

            Message::Pause => {
                if let Some(media) = self.core.media() {
                    media.pause();
                }
                Some(Task::none())
            }

            Message::TogglePlayback => {
                if self.ui.playback_state.is_playing() {
                    Some(self.update(Message::Pause))
                } else {
                    Some(self.play())
                }
            }

            Message::Stop => {
                if let Some(media) = self.core.media() {
                    media.stop();
                }
                Some(Task::none())
            }

            Message::Next => {
                if self.library.playlist.next().is_some() {
                    return Some(self.start_current());
                }
                Some(Task::none())
            }

            Message::Previous => match previous_action(self.ui.position_ms) {
                PreviousAction::PreviousEntry => {
                    if self.library.playlist.previous().is_some() {
                        return Some(self.start_current());
                    }
                    Some(Task::none())
                }
                PreviousAction::Restart => {
                    self.seek_to(0);
                    Some(Task::none())
                }
            },

            Message::SkipForward => {
                self.skip(SKIP_STEP_MS);
                Some(Task::none())
            }

            Message::SkipBackward => {
                self.skip(-SKIP_STEP_MS);
                Some(Task::none())
            }

            Message::SeekPreview(value) => {
                self.ui.seek_preview = Some(value.clamp(0.0, 1.0));
                Some(Task::none())
            }

            Message::SeekRelease => {
                if let Some(value) = self.ui.seek_preview.take() {
                    let target = (value as f64 * self.ui.duration_ms as f64) as u64;
                    self.seek_to(target);
                }
                Some(Task::none())
            }

            Message::VolumeChanged(volume) => {
                self.core.settings.volume = (*volume).min(100);
                if let Some(media) = self.core.media() {
                    media.set_volume(self.core.settings.gain());
                }
                self.core.save_settings();
                Some(Task::none())
            }

            Message::ToggleMute => {
                self.core.settings.muted = !self.core.settings.muted;
                if let Some(media) = self.core.media() {
                    media.set_muted(self.core.settings.muted);
                }
                self.core.save_settings();
                Some(Task::none())
            }

            Message::RateChanged(rate) => {
                self.core.settings.playback_rate = *rate;
                if let Some(media) = self.core.media() {
                    media.set_rate(*rate);
                }
                self.core.save_settings();
                Some(Task::none())
            }

            Message::ToggleFullscreen => {
                self.ui.fullscreen_requested = !self.ui.fullscreen_requested;
                let fullscreen =
                    fullscreen_allowed(self.ui.fullscreen_requested, self.ui.video_available);
                Some(self.set_fullscreen(fullscreen))
            }

            _ => None,
        }
    }

    /// Fold one media thread event into the UI state
    fn handle_media_event(&mut self, event: MediaEvent) -> Task<Message> {
        match event {
            MediaEvent::StatusChanged(status) => self.media_status_changed(status),

            MediaEvent::StateChanged(state) => {
                tracing::info!("Playback state: {:?}", state);
                self.ui.playback_state = state;
                Task::none()
            }

            MediaEvent::PositionChanged(position) => {
                // A dragged slider wins over reported progress
                if self.ui.seek_preview.is_none() {
                    self.ui.position_ms = position.as_millis() as u64;
                }
                Task::none()
            }

            MediaEvent::DurationChanged(duration) => {
                self.ui.duration_ms = duration.as_millis() as u64;
                Task::none()
            }

            MediaEvent::BufferProgress(progress) => {
                self.ui.status_text = self.core.locale.format(Key::StatusBuffering, progress);
                Task::none()
            }

            MediaEvent::VideoAvailableChanged(available) => {
                self.ui.video_available = available;
                if !available {
                    self.ui.frame = None;
                }
                let fullscreen = fullscreen_allowed(self.ui.fullscreen_requested, available);
                self.set_fullscreen(fullscreen)
            }

            MediaEvent::CurrentMediaChanged(path) => {
                tracing::debug!("Current media: {:?}", path);
                Task::none()
            }

            MediaEvent::Error(error) => {
                self.ui.status_text = error.clone();
                self.ui.last_error = Some(error);
                Task::none()
            }
        }
    }

    fn media_status_changed(&mut self, status: MediaStatus) -> Task<Message> {
        self.ui.status = status;
        let effect = player::status_effect(status);
        self.ui.cursor = effect.cursor;

        self.ui.status_text = player::resolve_status_text(
            effect.text,
            &self.ui.status_text,
            self.ui.last_error.as_deref(),
            self.core.locale,
        );

        if !effect.alert {
            return Task::none();
        }

        let attention = iced::window::latest().and_then(|id| {
            iced::window::request_user_attention(
                id,
                Some(iced::window::UserAttention::Informational),
            )
        });

        let playlist = &self.library.playlist;
        match player::end_of_media_action(playlist.current_index(), playlist.len()) {
            EndOfMediaAction::Advance(row) => {
                self.library.playlist.set_current(row);
                Task::batch([attention, self.start_current()])
            }
            EndOfMediaAction::Stay => attention,
        }
    }

    /// Play the current entry, or the selected (else first) row when none is current
    fn play(&mut self) -> Task<Message> {
        let Some(entry) = self.library.playlist.current() else {
            let row = self.library.playlist.selected().unwrap_or(0);
            if self.library.playlist.set_current(row).is_some() {
                return self.start_current();
            }
            return Task::none();
        };

        let Some(media) = self.core.media() else {
            return Task::none();
        };
        if media.current_path().as_deref() == Some(entry.path.as_path()) {
            media.play();
            Task::none()
        } else {
            self.start_current()
        }
    }

    /// Load the playlist's current entry and start it
    pub(super) fn start_current(&mut self) -> Task<Message> {
        let Some(entry) = self.library.playlist.current() else {
            return Task::none();
        };
        let path = entry.path.clone();

        tracing::info!("Playing {}", path.display());
        self.ui.reset_playback();
        if let Some(media) = self.core.media() {
            media.load(path);
            media.play();
        }
        Task::none()
    }

    fn skip(&mut self, delta_ms: i64) {
        let target = player::skip_target(self.ui.position_ms, self.ui.duration_ms, delta_ms);
        self.seek_to(target);
    }

    fn seek_to(&mut self, position_ms: u64) {
        if let Some(media) = self.core.media() {
            media.seek(Duration::from_millis(position_ms));
        }
        self.ui.position_ms = position_ms;
    }

    /// Enter or leave fullscreen if the window is not already there
    fn set_fullscreen(&mut self, fullscreen: bool) -> Task<Message> {
        if self.ui.is_fullscreen == fullscreen {
            return Task::none();
        }
        self.ui.is_fullscreen = fullscreen;
        let mode = if fullscreen {
            iced::window::Mode::Fullscreen
        } else {
            iced::window::Mode::Windowed
        };
        tracing::info!("Setting window mode: {:?}", mode);
        iced::window::latest().and_then(move |id| iced::window::set_mode(id, mode))
    }
}
