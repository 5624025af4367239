//! Bottom player bar component
//!
//! Seek slider with the clock label on top, transport and volume below.

use std::fmt;

use iced::widget::{Space, button, column, container, pick_list, row, slider, text, tooltip};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::features::settings::PLAYBACK_RATES;
use crate::features::{Action, KeyBindings};
use crate::i18n::{Key, Locale};
use crate::media::PlaybackState;
use crate::ui::theme;
use crate::utils::format_clock;

/// Player bar height
pub const PLAYER_BAR_HEIGHT: f32 = 96.0;

/// Everything the bar shows, borrowed from app state
#[derive(Debug, Clone, Copy)]
pub struct PlayerBarState<'a> {
    pub playback_state: PlaybackState,
    pub has_entries: bool,
    /// Seek slider value (0.0 to 1.0)
    pub slider_value: f32,
    pub position_ms: u64,
    pub duration_ms: u64,
    pub volume: u8,
    pub muted: bool,
    pub rate: f32,
    pub fullscreen: bool,
    pub video_available: bool,
    pub library_visible: bool,
    pub tag_label: Option<&'a str>,
    /// Shortcut hints shown in tooltips
    pub keybindings: &'a KeyBindings,
}

/// Entry in the playback rate picker
#[derive(Debug, Clone, Copy, PartialEq)]
struct Rate(f32);

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.0)
    }
}

/// Build the player bar
pub fn view(state: PlayerBarState<'_>, locale: Locale) -> Element<'_, Message> {
    let seek = slider(0.0..=1.0, state.slider_value, Message::SeekPreview)
        .on_release(Message::SeekRelease)
        .step(0.001)
        .height(16)
        .style(theme::seek_slider);

    let clock = text(format_clock(state.position_ms, state.duration_ms))
        .size(12)
        .style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        });

    let seek_row = row![seek, Space::new().width(12), clock]
        .align_y(Alignment::Center)
        .width(Fill);

    // Transport
    let hint = |action| state.keybindings.hint(action);
    let is_playing = state.playback_state.is_playing();
    let play_pause: Element<'_, Message> = if is_playing {
        transport_button(locale.get(Key::Pause), Message::Pause, false)
    } else {
        // Nothing to start until the playlist has entries
        button(text(locale.get(Key::Play)).size(13))
            .padding([6, 10])
            .style(theme::icon_button(false))
            .on_press_maybe(state.has_entries.then_some(Message::Play))
            .into()
    };
    let play_pause = with_hint(play_pause, hint(Action::PlayPause));
    let stop = button(text(locale.get(Key::Stop)).size(13))
        .padding([6, 10])
        .style(theme::icon_button(false))
        .on_press_maybe(
            (state.playback_state != PlaybackState::Stopped).then_some(Message::Stop),
        );

    let transport = row![
        with_hint(
            transport_button(locale.get(Key::Previous), Message::Previous, false),
            hint(Action::PrevTrack),
        ),
        with_hint(
            transport_button(locale.get(Key::SkipBackward), Message::SkipBackward, false),
            hint(Action::SkipBackward),
        ),
        play_pause,
        stop,
        with_hint(
            transport_button(locale.get(Key::SkipForward), Message::SkipForward, false),
            hint(Action::SkipForward),
        ),
        with_hint(
            transport_button(locale.get(Key::Next), Message::Next, false),
            hint(Action::NextTrack),
        ),
    ]
    .spacing(4)
    .align_y(Alignment::Center);

    // Volume and rate
    let mute_label = if state.muted {
        locale.get(Key::Unmute)
    } else {
        locale.get(Key::Mute)
    };
    let volume = row![
        with_hint(
            transport_button(mute_label, Message::ToggleMute, state.muted),
            hint(Action::VolumeMute),
        ),
        slider(0..=100u8, state.volume, Message::VolumeChanged)
            .width(100)
            .height(4)
            .step(1u8)
            .shift_step(5u8)
            .style(theme::volume_slider),
        Space::new().width(8),
        pick_list(
            PLAYBACK_RATES.map(Rate).to_vec(),
            Some(Rate(state.rate)),
            |rate: Rate| Message::RateChanged(rate.0),
        )
        .text_size(12)
        .padding([4, 8]),
    ]
    .spacing(4)
    .align_y(Alignment::Center);

    // Window and library
    let fullscreen = button(text(locale.get(Key::Fullscreen)).size(13))
        .padding([6, 10])
        .style(theme::icon_button(state.fullscreen))
        .on_press_maybe(
            (state.video_available || state.fullscreen).then_some(Message::ToggleFullscreen),
        );
    let tag = text(state.tag_label.unwrap_or(locale.get(Key::NoTagSelected)))
        .size(12)
        .style(|theme| text::Style {
            color: Some(theme::text_muted(theme)),
        });
    let library = transport_button(
        locale.get(Key::LibraryButton),
        Message::ToggleLibrary,
        state.library_visible,
    );

    let controls = row![
        transport,
        Space::new().width(Fill),
        volume,
        Space::new().width(16),
        with_hint(fullscreen.into(), hint(Action::ToggleFullscreen)),
        tag,
        with_hint(library, hint(Action::ToggleLibrary)),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let content = column![seek_row, controls].spacing(8);

    container(content)
        .width(Fill)
        .height(PLAYER_BAR_HEIGHT)
        .padding(Padding::new(12.0).left(16.0).right(16.0))
        .style(|theme| container::Style {
            background: Some(iced::Background::Color(theme::surface(theme))),
            border: iced::Border {
                color: theme::divider(theme),
                width: 1.0,
                radius: 0.0.into(),
            },
            ..Default::default()
        })
        .into()
}

fn transport_button(label: &str, message: Message, active: bool) -> Element<'_, Message> {
    button(text(label).size(13))
        .padding([6, 10])
        .style(theme::icon_button(active))
        .on_press(message)
        .into()
}

/// Show the keyboard shortcut above a control
fn with_hint<'a>(control: Element<'a, Message>, hint: Option<String>) -> Element<'a, Message> {
    match hint {
        Some(hint) => tooltip(
            control,
            container(text(hint).size(11))
                .padding([2, 6])
                .style(theme::panel),
            tooltip::Position::Top,
        )
        .into(),
        None => control,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rates_display_as_multipliers() {
        assert_eq!(Rate(1.0).to_string(), "1x");
        assert_eq!(Rate(1.25).to_string(), "1.25x");
        assert_eq!(Rate(0.5).to_string(), "0.5x");
    }
}
