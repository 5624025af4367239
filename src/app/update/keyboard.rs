//! Keyboard and action message handlers

use iced::Task;
use iced::keyboard::Key;
use iced::keyboard::key::Named;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::Action;
use crate::features::player::VOLUME_STEP;

impl App {
    /// Handle keyboard-related messages
    pub fn handle_keyboard(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::KeyPressed(key, modifiers) => {
                // Escape leaves fullscreen regardless of bindings
                if *key == Key::Named(Named::Escape) && self.ui.fullscreen_requested {
                    return Some(self.update(Message::ToggleFullscreen));
                }

                if let Some(action) = self.core.settings.keybindings.find_action(key, modifiers) {
                    return Some(self.update(Message::ExecuteAction(action)));
                }
                Some(Task::none())
            }

            Message::ExecuteAction(action) => Some(self.execute_action(*action)),

            _ => None,
        }
    }

    /// Execute a keybinding action
    fn execute_action(&mut self, action: Action) -> Task<Message> {
        tracing::debug!("Executing action {:?}", action);
        match action {
            Action::PlayPause => self.update(Message::TogglePlayback),
            Action::NextTrack => self.update(Message::Next),
            Action::PrevTrack => self.update(Message::Previous),
            Action::SkipForward => self.update(Message::SkipForward),
            Action::SkipBackward => self.update(Message::SkipBackward),
            Action::VolumeUp => {
                let volume = self.core.settings.volume.saturating_add(VOLUME_STEP).min(100);
                self.update(Message::VolumeChanged(volume))
            }
            Action::VolumeDown => {
                let volume = self.core.settings.volume.saturating_sub(VOLUME_STEP);
                self.update(Message::VolumeChanged(volume))
            }
            Action::VolumeMute => self.update(Message::ToggleMute),
            Action::ToggleFullscreen => self.update(Message::ToggleFullscreen),
            Action::ToggleLibrary => self.update(Message::ToggleLibrary),
            Action::OpenFiles => self.update(Message::OpenFiles),
        }
    }
}
