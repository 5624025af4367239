//! Window and display settings message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::i18n::Locale;

impl App {
    /// Handle window-related messages
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::RequestClose => {
                tracing::info!("Close requested, stopping playback");
                if let Some(media) = self.core.media() {
                    media.stop();
                }
                self.core.save_settings();
                // Dropping the handle shuts the media thread down
                self.core.media = None;
                Some(iced::exit())
            }

            Message::ToggleDarkMode => {
                let display = &mut self.core.settings.display;
                display.dark_mode = !display.dark_mode;
                self.core.save_settings();
                Some(Task::none())
            }

            Message::ToggleLanguage => {
                let language = self.core.locale.language.toggled();
                self.core.locale = Locale::new(language);
                self.core.settings.display.language = language.code().to_string();
                self.core.save_settings();
                Some(Task::none())
            }

            Message::Noop => Some(Task::none()),

            _ => None,
        }
    }
}
