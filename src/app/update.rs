//! Message update handlers - thin dispatcher delegating to submodules

mod database;
mod keyboard;
mod library;
mod playback;
mod playlist;
mod window;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        // Try each handler in order until one handles the message
        if let Some(task) = self.handle_database(&message) {
            return task;
        }
        if let Some(task) = self.handle_playback(&message) {
            return task;
        }
        if let Some(task) = self.handle_playlist(&message) {
            return task;
        }
        if let Some(task) = self.handle_library(&message) {
            return task;
        }
        if let Some(task) = self.handle_keyboard(&message) {
            return task;
        }
        if let Some(task) = self.handle_window(&message) {
            return task;
        }

        // Default: no task
        Task::none()
    }
}
