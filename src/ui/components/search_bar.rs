//! Search bar component
//! Title search input; the query runs on submit or the search button

use iced::widget::{button, row, text, text_input};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::theme;

/// Build the search bar component
pub fn view(search_text: &str, locale: Locale) -> Element<'_, Message> {
    let input = text_input(locale.get(Key::SearchPlaceholder), search_text)
        .on_input(Message::SearchChanged)
        .on_submit(Message::SubmitSearch)
        .padding([6, 10])
        .size(13)
        .width(Fill)
        .style(theme::text_input);

    let search = button(text(locale.get(Key::Search)).size(12))
        .padding([6, 12])
        .style(theme::secondary_button)
        .on_press(Message::SubmitSearch);

    row![input, search]
        .spacing(6)
        .align_y(Alignment::Center)
        .into()
}
