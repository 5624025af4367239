//! Database message handlers

use iced::Task;

use crate::app::helpers::{load_tags, load_videos};
use crate::app::message::Message;
use crate::app::state::App;
use crate::features::VideoQuery;

impl App {
    /// Handle database-related messages
    pub fn handle_database(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::DatabaseReady(db) => {
                tracing::info!("Database initialized successfully");
                self.core.db = Some(db.clone());
                self.core.db_error = None;
                Some(Task::perform(load_tags(db.clone()), Message::TagsLoaded))
            }

            Message::DatabaseError(err) => {
                tracing::error!("Database error: {}", err);
                self.core.db_error = Some(err.clone());
                Some(Task::none())
            }

            Message::TagsLoaded(tags) => {
                tracing::info!("Loaded {} tags from database", tags.len());
                self.library.tags.set_rows(tags.clone());

                // Keep the previous selection when it still exists
                let selected = self
                    .library
                    .selected_tag
                    .filter(|id| self.library.tags.find(*id).is_some())
                    .or_else(|| self.library.tags.tag(0).map(|t| t.id));

                let Some(id) = selected else {
                    self.library.selected_tag = None;
                    return Some(Task::none());
                };
                if self.library.selected_tag == Some(id) && self.library.videos.tag_id() == id {
                    return Some(Task::none());
                }
                Some(self.select_tag(id))
            }

            Message::VideosLoaded(query, rows) => {
                if self.library.videos.set_rows(query, rows.clone()) {
                    tracing::debug!(
                        "Grid now holds {} videos for tag {}",
                        rows.len(),
                        query.tag_id
                    );
                }
                Some(Task::none())
            }

            Message::LibraryActionFailed(err) => {
                tracing::error!("Library action failed: {}", err);
                self.core.db_error = Some(err.clone());
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Point the grid at `id` and remember the choice
    pub(super) fn select_tag(&mut self, id: i64) -> Task<Message> {
        self.library.selected_tag = Some(id);
        self.ui.video_rename = None;
        if self.core.settings.library.last_tag_id != Some(id) {
            self.core.settings.library.last_tag_id = Some(id);
            self.core.save_settings();
        }
        let query = self.library.videos.set_tag_id(id);
        self.run_video_query(query)
    }

    /// Issue a grid query against the database
    pub(super) fn run_video_query(&self, query: VideoQuery) -> Task<Message> {
        match &self.core.db {
            Some(db) => Task::perform(load_videos(db.clone(), query), |(query, rows)| {
                Message::VideosLoaded(query, rows)
            }),
            None => Task::none(),
        }
    }
}
