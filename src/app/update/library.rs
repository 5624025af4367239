//! Library panel message handlers (tags and the video grid)

use std::future::Future;
use std::sync::Arc;

use iced::Task;

use crate::app::helpers::{filter_supported, load_tags, pick_media_files};
use crate::app::message::Message;
use crate::app::state::App;
use crate::database::Database;
use crate::features::library::LABEL_COLUMN;
use crate::i18n::Key;

impl App {
    /// Handle library-related messages
    pub fn handle_library(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ToggleLibrary => {
                let visible = !self.core.settings.library.visible;
                self.core.settings.library.visible = visible;
                self.core.save_settings();
                tracing::debug!("Library panel visible: {}", visible);
                Some(Task::none())
            }

            // ============ Tags ============
            Message::SelectTag(id) => {
                if self.library.selected_tag == Some(*id) {
                    return Some(Task::none());
                }
                Some(self.select_tag(*id))
            }

            Message::AddTag => {
                let base = self.core.locale.get(Key::NewTagLabel);
                let label = self.library.tags.reserve_label(base);
                tracing::info!("Adding tag {:?}", label);
                Some(self.db_task(
                    move |db| async move { db.insert_tag(&label).await },
                    Message::TagAdded,
                ))
            }

            Message::TagAdded(id) => {
                // Selected once the reloaded tags contain it
                self.library.selected_tag = Some(*id);
                Some(self.reload_tags())
            }

            Message::EditTag(row) => {
                if let Some(tag) = self.library.tags.tag(*row) {
                    self.ui.tag_edit = Some((*row, tag.label.clone()));
                }
                Some(Task::none())
            }

            Message::TagEditChanged(label) => {
                if let Some((_, pending)) = &mut self.ui.tag_edit {
                    *pending = label.clone();
                }
                Some(Task::none())
            }

            Message::SubmitTagEdit => {
                let Some((row, label)) = self.ui.tag_edit.take() else {
                    return Some(Task::none());
                };
                let label = label.trim().to_string();
                if label.is_empty() {
                    return Some(Task::none());
                }
                // A rejected edit just closes the editor
                let Some(edit) = self.library.tags.set_data(row, LABEL_COLUMN, &label) else {
                    return Some(Task::none());
                };
                Some(self.db_task(
                    move |db| async move { db.update_tag_label(edit.id, &edit.label).await },
                    |()| Message::TagEditApplied,
                ))
            }

            Message::CancelTagEdit => {
                self.ui.tag_edit = None;
                Some(Task::none())
            }

            Message::TagEditApplied => Some(self.reload_tags()),

            // ============ Search ============
            Message::SearchChanged(text) => {
                self.ui.search_text = text.clone();
                Some(Task::none())
            }

            Message::SubmitSearch => {
                let query = self.library.videos.set_search(&self.ui.search_text);
                Some(self.run_video_query(query))
            }

            // ============ Videos ============
            Message::AddVideo => {
                if self.library.selected_tag.is_none() {
                    tracing::debug!("Add video ignored: no tag selected");
                    return Some(Task::none());
                }
                let locale = self.core.locale;
                Some(Task::perform(
                    pick_media_files(
                        locale.get(Key::AddVideosTitle),
                        locale.get(Key::MediaFilesFilter),
                    ),
                    Message::VideosChosen,
                ))
            }

            Message::VideosChosen(paths) => {
                let paths = filter_supported(paths);
                let Some(tag_id) = self.library.selected_tag else {
                    return Some(Task::none());
                };
                if paths.is_empty() {
                    return Some(Task::none());
                }
                Some(self.db_task(
                    move |db| async move { db.import_videos(&paths, tag_id).await },
                    Message::VideosAdded,
                ))
            }

            Message::VideosAdded(count) => {
                tracing::info!("Added {} videos to the library", count);
                if *count == 0 {
                    return Some(Task::none());
                }
                let start = self.library.videos.row_count();
                self.library.videos.rows_inserted(start, start + count - 1);
                Some(self.run_video_query(self.library.videos.refresh()))
            }

            Message::RemoveVideo(row) => {
                let row = *row;
                let Some(item) = self.library.videos.data(row) else {
                    return Some(Task::none());
                };
                tracing::info!("Removing video {} ({})", item.id, item.title);
                Some(self.db_task(
                    move |db| async move { db.delete_video(item.id).await },
                    move |()| Message::VideoRemoved(row),
                ))
            }

            Message::VideoRemoved(row) => {
                self.library.videos.rows_removed(*row, *row);
                Some(self.run_video_query(self.library.videos.refresh()))
            }

            Message::RenameVideo(row) => {
                if let Some(item) = self.library.videos.data(*row) {
                    self.ui.video_rename = Some((*row, item.title));
                }
                Some(Task::none())
            }

            Message::VideoTitleChanged(title) => {
                if let Some((_, pending)) = &mut self.ui.video_rename {
                    *pending = title.clone();
                }
                Some(Task::none())
            }

            Message::SubmitVideoTitle => {
                let Some((row, title)) = self.ui.video_rename.take() else {
                    return Some(Task::none());
                };
                let title = title.trim().to_string();
                let Some(item) = self.library.videos.data(row) else {
                    return Some(Task::none());
                };
                if title.is_empty() || title == item.title {
                    return Some(Task::none());
                }
                Some(self.db_task(
                    move |db| async move { db.update_video_title(item.id, &title).await },
                    move |()| Message::VideoRenamed(row),
                ))
            }

            Message::CancelVideoRename => {
                self.ui.video_rename = None;
                Some(Task::none())
            }

            Message::VideoRenamed(row) => {
                self.library.videos.rows_changed(*row, *row);
                Some(self.run_video_query(self.library.videos.refresh()))
            }

            Message::PlayVideo(row) => {
                let Some(item) = self.library.videos.data(*row) else {
                    return Some(Task::none());
                };
                let Some(index) = self.library.playlist.add([item.path]) else {
                    return Some(Task::none());
                };
                self.library.playlist.set_current(index);
                Some(self.start_current())
            }

            _ => None,
        }
    }

    fn reload_tags(&self) -> Task<Message> {
        match &self.core.db {
            Some(db) => Task::perform(load_tags(db.clone()), Message::TagsLoaded),
            None => Task::none(),
        }
    }

    /// Run a write against the database, reporting failures as a message
    fn db_task<T, Fut>(
        &self,
        action: impl FnOnce(Arc<Database>) -> Fut,
        done: impl FnOnce(T) -> Message + Send + 'static,
    ) -> Task<Message>
    where
        T: Send + 'static,
        Fut: Future<Output = anyhow::Result<T>> + Send + 'static,
    {
        let Some(db) = self.core.db.clone() else {
            tracing::warn!("Library action ignored: database not ready");
            return Task::none();
        };
        Task::perform(action(db), move |result| match result {
            Ok(value) => done(value),
            Err(e) => Message::LibraryActionFailed(e.to_string()),
        })
    }
}
