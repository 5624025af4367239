//! Theme system for the player and library panel
//! Supports both dark and light modes with a consistent color palette

use iced::color;
use iced::widget::text_input::{self};
use iced::widget::{button, container, scrollable, slider};
use iced::{Background, Border, Color, Shadow, Theme};

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(
        theme,
        Theme::Dark | Theme::Dracula | Theme::Nord | Theme::SolarizedDark | Theme::GruvboxDark
    )
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x101214);
    pub const VIDEO: Color = color!(0x000000);
    pub const SURFACE: Color = color!(0x1b1e22);
    pub const BORDER: Color = color!(0x2c3036);
    pub const TEXT_MUTED: Color = color!(0x868c94);
    pub const TEXT_SECONDARY: Color = color!(0xb4bac1);
    pub const TEXT_PRIMARY: Color = color!(0xf2f4f5);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xfafafa);
    pub const VIDEO: Color = color!(0x16181a);
    pub const SURFACE: Color = color!(0xeef0f2);
    pub const BORDER: Color = color!(0xd8dbdf);
    pub const TEXT_MUTED: Color = color!(0x747a82);
    pub const TEXT_SECONDARY: Color = color!(0x4d535a);
    pub const TEXT_PRIMARY: Color = color!(0x15181b);
}

/// Accent used for the current entry, sliders and primary actions
pub const ACCENT: Color = color!(0x2bb3a3);
pub const ACCENT_HOVER: Color = color!(0x3fcbbb);

pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Backdrop of the video area
pub fn video_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::VIDEO
    } else {
        light::VIDEO
    }
}

pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

pub fn border_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

pub fn text_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Hover background for list rows and icon buttons
pub fn hover_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.06)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.05)
    }
}

pub fn divider(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.1)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.1)
    }
}

pub fn danger(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgb(0.9, 0.35, 0.35)
    } else {
        Color::from_rgb(0.8, 0.2, 0.2)
    }
}

// ============================================================================
// Container Styles
// ============================================================================

pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Side panels (playlist, library)
pub fn panel(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        border: Border {
            color: border_color(theme),
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

pub fn video_area(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(video_bg(theme))),
        text_color: Some(dark::TEXT_MUTED),
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Thumbnail placeholder in the video grid
pub fn thumbnail_placeholder(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(hover_bg(theme))),
        border: Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(ACCENT)),
        text_color: Color::WHITE,
        border: Border {
            radius: 16.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(ACCENT_HOVER)),
            ..base
        },
        _ => base,
    }
}

/// Secondary button - transparent with border
pub fn secondary_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_primary(theme),
        border: Border {
            radius: 16.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(hover_bg(theme))),
            ..base
        },
        button::Status::Disabled => button::Style {
            text_color: text_muted(theme),
            ..base
        },
        _ => base,
    }
}

/// Transport buttons; `active` highlights toggles like mute and fullscreen
pub fn icon_button(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme, status| {
        let text_color = if active { ACCENT } else { text_primary(theme) };
        let base = button::Style {
            background: Some(Background::Color(Color::TRANSPARENT)),
            text_color,
            border: Border {
                radius: 6.0.into(),
                ..Default::default()
            },
            ..Default::default()
        };

        match status {
            button::Status::Hovered | button::Status::Pressed => button::Style {
                background: Some(Background::Color(hover_bg(theme))),
                ..base
            },
            button::Status::Disabled => button::Style {
                text_color: text_muted(theme),
                ..base
            },
            _ => base,
        }
    }
}

/// List rows; the current row is drawn in the accent color
pub fn list_row(current: bool, selected: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme| container::Style {
        background: selected.then(|| Background::Color(hover_bg(theme))),
        text_color: Some(if current { ACCENT } else { text_primary(theme) }),
        border: Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub fn danger_text_button(theme: &Theme, status: button::Status) -> button::Style {
    let color = danger(theme);
    button::Style {
        background: match status {
            button::Status::Hovered => Some(Background::Color(hover_bg(theme))),
            _ => None,
        },
        text_color: color,
        border: Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

// ============================================================================
// Input Styles
// ============================================================================

pub fn text_input(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let border = match status {
        text_input::Status::Focused { .. } => ACCENT,
        _ => border_color(theme),
    };
    text_input::Style {
        background: Background::Color(background(theme)),
        border: Border {
            radius: 6.0.into(),
            width: 1.0,
            color: border,
        },
        icon: text_muted(theme),
        placeholder: text_muted(theme),
        value: text_primary(theme),
        selection: ACCENT,
    }
}

pub fn seek_slider(theme: &Theme, status: slider::Status) -> slider::Style {
    let handle_radius = match status {
        slider::Status::Hovered | slider::Status::Dragged => 6.0,
        _ => 0.0, // Hide handle when not interacting
    };
    slider::Style {
        rail: slider::Rail {
            backgrounds: (
                Background::Color(ACCENT),
                Background::Color(divider(theme)),
            ),
            width: 4.0,
            border: Border {
                radius: 2.0.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
        },
        handle: slider::Handle {
            shape: slider::HandleShape::Circle {
                radius: handle_radius,
            },
            background: Background::Color(ACCENT),
            border_width: 0.0,
            border_color: Color::TRANSPARENT,
        },
    }
}

pub fn volume_slider(theme: &Theme, status: slider::Status) -> slider::Style {
    let base = seek_slider(theme, status);
    slider::Style {
        rail: slider::Rail {
            backgrounds: (
                Background::Color(text_primary(theme)),
                Background::Color(divider(theme)),
            ),
            ..base.rail
        },
        handle: slider::Handle {
            background: Background::Color(text_primary(theme)),
            ..base.handle
        },
    }
}

// ============================================================================
// Scrollable Styles
// ============================================================================

pub fn thin_scrollable(theme: &Theme, _status: scrollable::Status) -> scrollable::Style {
    let scrollbar = scrollable::Rail {
        background: Some(Background::Color(Color::TRANSPARENT)),
        border: Border::default(),
        scroller: scrollable::Scroller {
            background: Background::Color(border_color(theme)),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
        },
    };

    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: scrollbar.clone(),
        horizontal_rail: scrollbar,
        gap: None,
        auto_scroll: scrollable::AutoScroll {
            background: Background::Color(surface(theme)),
            border: Border::default(),
            shadow: Shadow::default(),
            icon: text_muted(theme),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_differ_by_mode() {
        assert_ne!(background(&Theme::Dark), background(&Theme::Light));
        assert_ne!(text_primary(&Theme::Dark), text_primary(&Theme::Light));
    }

    #[test]
    fn current_row_uses_accent() {
        let style = list_row(true, false)(&Theme::Dark);
        assert_eq!(style.text_color, Some(ACCENT));
        assert!(style.background.is_none());
    }

    #[test]
    fn selected_row_keeps_highlight() {
        let style = list_row(false, true)(&Theme::Light);
        assert!(style.background.is_some());
    }
}
