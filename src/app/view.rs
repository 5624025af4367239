//! Application view rendering

use iced::widget::{Space, button, column, container, image, mouse_area, row, text};
use iced::{Alignment, ContentFit, Element, Fill};

use super::App;
use super::message::Message;
use crate::features::player::CursorShape;
use crate::i18n::Key;
use crate::ui::components::{library_panel, player_bar, playlist_panel};
use crate::ui::theme;

impl App {
    /// Build the view for a specific window
    pub fn view(&self, _window_id: iced::window::Id) -> Element<'_, Message> {
        let content: Element<'_, Message> = if self.ui.is_fullscreen {
            // Fullscreen shows nothing but the video
            self.view_video_area()
        } else {
            let mut main_row = row![self.view_video_area(), self.view_playlist()].spacing(12);
            if self.core.settings.library.visible {
                main_row = main_row.push(self.view_library());
            }

            column![
                self.view_toolbar(),
                container(main_row).height(Fill).padding([0, 12]),
                self.view_player_bar(),
            ]
            .spacing(12)
            .into()
        };

        let interaction = match self.ui.cursor {
            CursorShape::Busy => iced::mouse::Interaction::Progress,
            CursorShape::Normal => iced::mouse::Interaction::Idle,
        };

        mouse_area(
            container(content)
                .width(Fill)
                .height(Fill)
                .style(theme::main_content),
        )
        .interaction(interaction)
        .into()
    }

    fn view_toolbar(&self) -> Element<'_, Message> {
        let locale = self.core.locale;

        let error: Element<'_, Message> = match &self.core.db_error {
            Some(err) => text(err.as_str())
                .size(12)
                .style(|theme| text::Style {
                    color: Some(theme::danger(theme)),
                })
                .into(),
            None => Space::new().into(),
        };

        row![
            text(locale.get(Key::AppName)).size(16),
            Space::new().width(16),
            error,
            Space::new().width(Fill),
            button(text(locale.get(Key::ToggleTheme)).size(12))
                .padding([4, 10])
                .style(theme::secondary_button)
                .on_press(Message::ToggleDarkMode),
            button(text(locale.get(Key::ToggleLanguage)).size(12))
                .padding([4, 10])
                .style(theme::secondary_button)
                .on_press(Message::ToggleLanguage),
        ]
        .spacing(6)
        .padding([8, 12])
        .align_y(Alignment::Center)
        .into()
    }

    /// Current video frame, or track name and status over the backdrop
    fn view_video_area(&self) -> Element<'_, Message> {
        let locale = self.core.locale;

        if self.ui.video_available
            && let Some(frame) = &self.ui.frame
        {
            return mouse_area(
                container(
                    image(frame.clone())
                        .width(Fill)
                        .height(Fill)
                        .content_fit(ContentFit::Contain),
                )
                .width(Fill)
                .height(Fill)
                .style(theme::video_area),
            )
            .on_double_click(Message::ToggleFullscreen)
            .into();
        }

        let track = self
            .library
            .playlist
            .current()
            .map(|entry| entry.name.as_str())
            .unwrap_or("");

        let mut info = column![text(track).size(18)]
            .spacing(6)
            .align_x(Alignment::Center);
        if !self.ui.status_text.is_empty() {
            info = info.push(text(self.ui.status_text.as_str()).size(13));
        }
        if self.ui.status.has_media() && !self.ui.video_available {
            info = info.push(text(locale.get(Key::NoVideoOutput)).size(12));
        }

        mouse_area(
            container(info)
                .width(Fill)
                .height(Fill)
                .center_x(Fill)
                .center_y(Fill)
                .style(theme::video_area),
        )
        .on_double_click(Message::ToggleFullscreen)
        .into()
    }

    fn view_playlist(&self) -> Element<'_, Message> {
        playlist_panel::view(&self.library.playlist, self.core.locale)
    }

    fn view_library(&self) -> Element<'_, Message> {
        library_panel::view(
            library_panel::LibraryView {
                tags: &self.library.tags,
                selected_tag: self.library.selected_tag,
                tag_edit: self.ui.tag_edit.as_ref(),
                videos: &self.library.videos,
                video_rename: self.ui.video_rename.as_ref(),
                search_text: &self.ui.search_text,
                db_available: self.core.db.is_some(),
            },
            self.core.locale,
        )
    }

    fn view_player_bar(&self) -> Element<'_, Message> {
        let settings = &self.core.settings;
        player_bar::view(
            player_bar::PlayerBarState {
                playback_state: self.ui.playback_state,
                has_entries: !self.library.playlist.is_empty(),
                slider_value: self.ui.slider_value(),
                position_ms: self.ui.position_ms,
                duration_ms: self.ui.duration_ms,
                volume: settings.volume,
                muted: settings.muted,
                rate: settings.playback_rate,
                fullscreen: self.ui.is_fullscreen,
                video_available: self.ui.video_available,
                library_visible: settings.library.visible,
                tag_label: self.library.selected_tag_label(),
                keybindings: &settings.keybindings,
            },
            self.core.locale,
        )
    }
}
