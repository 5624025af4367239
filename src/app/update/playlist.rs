//! Playlist message handlers

use iced::Task;

use crate::app::helpers::{filter_supported, pick_media_files};
use crate::app::message::Message;
use crate::app::state::App;
use crate::i18n::Key;

impl App {
    /// Handle playlist-related messages
    pub fn handle_playlist(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::OpenFiles => {
                let locale = self.core.locale;
                Some(Task::perform(
                    pick_media_files(
                        locale.get(Key::OpenFilesTitle),
                        locale.get(Key::MediaFilesFilter),
                    ),
                    Message::FilesChosen,
                ))
            }

            Message::FilesChosen(paths) => {
                let paths = filter_supported(paths);
                if paths.is_empty() {
                    return Some(Task::none());
                }
                if let Some(first) = self.library.playlist.add(paths) {
                    tracing::info!(
                        "Added {} entries to the playlist",
                        self.library.playlist.len() - first
                    );
                }
                Some(Task::none())
            }

            Message::PlaylistSelect(row) => {
                self.library.playlist.select(*row);
                Some(Task::none())
            }

            Message::PlaylistActivate(row) => {
                if self.library.playlist.set_current(*row).is_some() {
                    return Some(self.start_current());
                }
                Some(Task::none())
            }

            Message::RemoveSelected => {
                if self.library.playlist.remove_selected() {
                    self.stop_removed_media();
                }
                Some(Task::none())
            }

            Message::ClearPlaylist => {
                let had_current = self.library.playlist.current().is_some();
                self.library.playlist.clear();
                if had_current {
                    self.stop_removed_media();
                }
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// The playing entry left the playlist
    fn stop_removed_media(&mut self) {
        if let Some(media) = self.core.media() {
            media.stop();
        }
        self.ui.reset_playback();
    }
}
