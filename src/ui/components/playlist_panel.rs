//! Playlist side panel
//!
//! Entry list with the video count on top and the add/remove/clear actions
//! below. A click selects a row, a double click plays it.

use iced::widget::{Space, button, column, container, mouse_area, row, scrollable, text};
use iced::{Alignment, Element, Fill, Length, Padding};

use crate::app::Message;
use crate::features::Playlist;
use crate::i18n::{Key, Locale};
use crate::ui::theme;

/// Playlist panel width
pub const PLAYLIST_PANEL_WIDTH: f32 = 300.0;

/// Build the playlist panel
pub fn view(playlist: &Playlist, locale: Locale) -> Element<'_, Message> {
    let header = row![
        text(locale.format(Key::TotalVideos, playlist.len()))
            .size(14)
            .style(|theme| text::Style {
                color: Some(theme::text_primary(theme)),
            }),
        Space::new().width(Fill),
    ]
    .align_y(Alignment::Center)
    .padding(Padding::new(12.0).left(16.0).right(12.0));

    let current = playlist.current_index();
    let selected = playlist.selected();

    let entries: Element<'_, Message> = if playlist.is_empty() {
        container(
            text(locale.get(Key::PlaylistEmpty))
                .size(13)
                .style(|theme| text::Style {
                    color: Some(theme::text_muted(theme)),
                }),
        )
        .width(Fill)
        .height(Fill)
        .padding(32)
        .center_x(Fill)
        .into()
    } else {
        let items: Vec<Element<'_, Message>> = playlist
            .entries()
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                let row_content = row![
                    text(format!("{}", idx + 1))
                        .size(11)
                        .width(28)
                        .style(|theme| text::Style {
                            color: Some(theme::text_muted(theme)),
                        }),
                    text(entry.name.as_str()).size(13),
                ]
                .align_y(Alignment::Center);

                mouse_area(
                    container(row_content)
                        .width(Fill)
                        .padding([8, 10])
                        .style(theme::list_row(current == Some(idx), selected == Some(idx))),
                )
                .on_press(Message::PlaylistSelect(idx))
                .on_double_click(Message::PlaylistActivate(idx))
                .into()
            })
            .collect();

        scrollable(
            column(items)
                .spacing(2)
                .padding(Padding::new(0.0).left(8.0).right(8.0)),
        )
        .height(Fill)
        .style(theme::thin_scrollable)
        .into()
    };

    let actions = row![
        button(text(locale.get(Key::AddFiles)).size(12))
            .padding([6, 12])
            .style(theme::primary_button)
            .on_press(Message::OpenFiles),
        button(text(locale.get(Key::RemoveSelected)).size(12))
            .padding([6, 12])
            .style(theme::secondary_button)
            .on_press_maybe(selected.map(|_| Message::RemoveSelected)),
        button(text(locale.get(Key::ClearPlaylist)).size(12))
            .padding([6, 12])
            .style(theme::secondary_button)
            .on_press_maybe((!playlist.is_empty()).then_some(Message::ClearPlaylist)),
    ]
    .spacing(6)
    .padding(10);

    container(column![header, entries, actions])
        .width(Length::Fixed(PLAYLIST_PANEL_WIDTH))
        .height(Fill)
        .style(theme::panel)
        .into()
}
