//! Library panel component
//!
//! Tag list with its count and add button on the left, search box and
//! video grid of the selected tag on the right.

use iced::widget::{
    Space, button, column, container, image, mouse_area, row, scrollable, text, text_input,
};
use iced::{Alignment, ContentFit, Element, Fill, Length, Padding};

use crate::app::Message;
use crate::features::{TagListModel, VideoGridModel};
use crate::i18n::{Key, Locale};
use crate::ui::components::search_bar;
use crate::ui::theme;

/// Library panel width
pub const LIBRARY_PANEL_WIDTH: f32 = 560.0;
const TAG_COLUMN_WIDTH: f32 = 170.0;
const GRID_COLUMNS: usize = 2;
const CARD_WIDTH: f32 = 170.0;
const THUMBNAIL_HEIGHT: f32 = 96.0;

/// Library data borrowed from app state
pub struct LibraryView<'a> {
    pub tags: &'a TagListModel,
    pub selected_tag: Option<i64>,
    pub tag_edit: Option<&'a (usize, String)>,
    pub videos: &'a VideoGridModel,
    pub video_rename: Option<&'a (usize, String)>,
    pub search_text: &'a str,
    pub db_available: bool,
}

/// Build the library panel
pub fn view(library: LibraryView<'_>, locale: Locale) -> Element<'_, Message> {
    let content: Element<'_, Message> = if library.db_available {
        row![
            tag_column(&library, locale),
            video_column(&library, locale)
        ]
        .spacing(12)
        .into()
    } else {
        container(text(locale.get(Key::DatabaseUnavailable)).size(13))
            .width(Fill)
            .height(Fill)
            .center_x(Fill)
            .center_y(Fill)
            .into()
    };

    container(content)
        .width(Length::Fixed(LIBRARY_PANEL_WIDTH))
        .height(Fill)
        .padding(12)
        .style(theme::panel)
        .into()
}

// ============ Tags ============

fn tag_column<'a>(library: &LibraryView<'a>, locale: Locale) -> Element<'a, Message> {
    let header = row![
        text(locale.format(Key::TagCount, library.tags.row_count()))
            .size(13)
            .style(|theme| text::Style {
                color: Some(theme::text_secondary(theme)),
            }),
        Space::new().width(Fill),
        button(text(locale.get(Key::AddTag)).size(12))
            .padding([4, 10])
            .style(theme::primary_button)
            .on_press(Message::AddTag),
    ]
    .align_y(Alignment::Center);

    let items: Vec<Element<'a, Message>> = library
        .tags
        .tags()
        .iter()
        .enumerate()
        .map(|(row_idx, tag)| match library.tag_edit {
            Some((edit_row, pending)) if *edit_row == row_idx => column![
                text_input(locale.get(Key::NewTagLabel), pending)
                    .on_input(Message::TagEditChanged)
                    .on_submit(Message::SubmitTagEdit)
                    .padding([4, 8])
                    .size(13)
                    .style(theme::text_input),
                row![
                    button(text(locale.get(Key::Save)).size(11))
                        .padding([2, 8])
                        .style(theme::secondary_button)
                        .on_press(Message::SubmitTagEdit),
                    button(text(locale.get(Key::Cancel)).size(11))
                        .padding([2, 8])
                        .style(theme::secondary_button)
                        .on_press(Message::CancelTagEdit),
                ]
                .spacing(4),
            ]
            .spacing(4)
            .into(),
            _ => {
                let selected = library.selected_tag == Some(tag.id);
                mouse_area(
                    container(text(tag.label.as_str()).size(13))
                        .width(Fill)
                        .padding([6, 10])
                        .style(theme::list_row(selected, selected)),
                )
                .on_press(Message::SelectTag(tag.id))
                .on_double_click(Message::EditTag(row_idx))
                .into()
            }
        })
        .collect();

    column![
        header,
        scrollable(column(items).spacing(2))
            .height(Fill)
            .style(theme::thin_scrollable),
    ]
    .spacing(8)
    .width(Length::Fixed(TAG_COLUMN_WIDTH))
    .into()
}

// ============ Videos ============

fn video_column<'a>(library: &LibraryView<'a>, locale: Locale) -> Element<'a, Message> {
    let add_video = button(text(locale.get(Key::AddVideo)).size(12))
        .padding([6, 12])
        .style(theme::primary_button)
        .on_press_maybe(library.selected_tag.map(|_| Message::AddVideo));

    let header = row![search_bar::view(library.search_text, locale), add_video]
        .spacing(6)
        .align_y(Alignment::Center);

    let body: Element<'a, Message> = if library.selected_tag.is_none() {
        placeholder(locale.get(Key::SelectTagFirst))
    } else if library.videos.row_count() == 0 {
        placeholder(locale.get(Key::NoVideos))
    } else {
        let cards: Vec<Element<'a, Message>> = (0..library.videos.row_count())
            .filter_map(|row_idx| video_card(library, row_idx, locale))
            .collect();

        let mut grid = column![].spacing(10);
        let mut cards = cards.into_iter().peekable();
        while cards.peek().is_some() {
            let line: Vec<Element<'a, Message>> = cards.by_ref().take(GRID_COLUMNS).collect();
            grid = grid.push(row(line).spacing(10));
        }

        scrollable(grid).height(Fill).style(theme::thin_scrollable).into()
    };

    column![header, body].spacing(10).width(Fill).into()
}

/// One grid card; rows that fail to materialize are skipped
fn video_card<'a>(
    library: &LibraryView<'a>,
    row_idx: usize,
    locale: Locale,
) -> Option<Element<'a, Message>> {
    let item = library.videos.data(row_idx)?;

    let thumbnail: Element<'a, Message> = if item.thumbnail.is_empty() {
        container(Space::new())
            .width(CARD_WIDTH)
            .height(THUMBNAIL_HEIGHT)
            .style(theme::thumbnail_placeholder)
            .into()
    } else {
        image(image::Handle::from_path(&item.thumbnail))
            .width(CARD_WIDTH)
            .height(THUMBNAIL_HEIGHT)
            .content_fit(ContentFit::Cover)
            .border_radius(6.0)
            .into()
    };

    let title: Element<'a, Message> = match library.video_rename {
        Some((rename_row, pending)) if *rename_row == row_idx => column![
            text_input(locale.get(Key::RenameVideo), pending)
                .on_input(Message::VideoTitleChanged)
                .on_submit(Message::SubmitVideoTitle)
                .padding([4, 8])
                .size(12)
                .style(theme::text_input),
            row![
                button(text(locale.get(Key::Save)).size(11))
                    .padding([2, 8])
                    .style(theme::secondary_button)
                    .on_press(Message::SubmitVideoTitle),
                button(text(locale.get(Key::Cancel)).size(11))
                    .padding([2, 8])
                    .style(theme::secondary_button)
                    .on_press(Message::CancelVideoRename),
            ]
            .spacing(4),
        ]
        .spacing(4)
        .into(),
        _ => text(item.title.clone()).size(13).into(),
    };

    let date = text(item.date.clone())
        .size(11)
        .style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        });

    let actions = row![
        button(text(locale.get(Key::RenameVideo)).size(11))
            .padding([2, 6])
            .style(theme::icon_button(false))
            .on_press(Message::RenameVideo(row_idx)),
        button(text(locale.get(Key::RemoveVideo)).size(11))
            .padding([2, 6])
            .style(theme::danger_text_button)
            .on_press(Message::RemoveVideo(row_idx)),
    ]
    .spacing(4);

    let card = column![
        mouse_area(thumbnail).on_double_click(Message::PlayVideo(row_idx)),
        title,
        date,
        actions,
    ]
    .spacing(4)
    .width(CARD_WIDTH)
    .padding(Padding::new(0.0).bottom(4.0));

    Some(card.into())
}

fn placeholder<'a>(label: &'static str) -> Element<'a, Message> {
    container(text(label).size(13).style(|theme| text::Style {
        color: Some(theme::text_muted(theme)),
    }))
    .width(Fill)
    .height(Fill)
    .center_x(Fill)
    .center_y(Fill)
    .into()
}
