//! Player decisions that do not touch widgets or the media thread
//!
//! Everything here is a plain function of its inputs so the update handlers
//! stay thin and the rules can be tested directly.

use crate::i18n::{Key, Locale};
use crate::media::MediaStatus;

/// Skip step for forward/back, in milliseconds
pub const SKIP_STEP_MS: i64 = 10_000;

/// `previous` goes to the previous entry only this close to the start
pub const PREVIOUS_THRESHOLD_MS: u64 = 5;

/// Volume step for keyboard volume up/down
pub const VOLUME_STEP: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorShape {
    #[default]
    Normal,
    Busy,
}

/// How a media status changes the status text in the window title
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusText {
    Clear,
    /// Leave the current text alone
    Keep,
    Loading,
    Stalled,
    /// Show the backend's last error
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusEffect {
    pub text: StatusText,
    pub cursor: CursorShape,
    /// Ask the window manager for attention
    pub alert: bool,
}

/// Map a media status to its UI effect
pub fn status_effect(status: MediaStatus) -> StatusEffect {
    let cursor = match status {
        MediaStatus::Loading | MediaStatus::Buffering | MediaStatus::Stalled => CursorShape::Busy,
        _ => CursorShape::Normal,
    };
    let text = match status {
        MediaStatus::Unknown
        | MediaStatus::NoMedia
        | MediaStatus::Loaded
        | MediaStatus::Buffering
        | MediaStatus::Buffered => StatusText::Clear,
        MediaStatus::Loading => StatusText::Loading,
        MediaStatus::Stalled => StatusText::Stalled,
        MediaStatus::EndOfMedia => StatusText::Keep,
        MediaStatus::Invalid => StatusText::Error,
    };
    StatusEffect {
        text,
        cursor,
        alert: status == MediaStatus::EndOfMedia,
    }
}

/// Status text after applying `text`
///
/// `Keep` returns `current` unchanged; `Error` shows the last backend error,
/// or nothing if none was reported.
pub fn resolve_status_text(
    text: StatusText,
    current: &str,
    last_error: Option<&str>,
    locale: Locale,
) -> String {
    match text {
        StatusText::Clear => String::new(),
        StatusText::Keep => current.to_string(),
        StatusText::Loading => locale.get(Key::StatusLoading).to_string(),
        StatusText::Stalled => locale.get(Key::StatusStalled).to_string(),
        StatusText::Error => last_error.unwrap_or_default().to_string(),
    }
}

/// What happens once the current entry played to its end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndOfMediaAction {
    /// Start the playlist row
    Advance(usize),
    /// Last entry (or nothing current): stay put
    Stay,
}

pub fn end_of_media_action(current: Option<usize>, len: usize) -> EndOfMediaAction {
    match current {
        Some(row) if row + 1 < len => EndOfMediaAction::Advance(row + 1),
        _ => EndOfMediaAction::Stay,
    }
}

/// Window title from the current track name and status text
pub fn window_title(track: &str, status: &str) -> String {
    if status.is_empty() {
        format!("{} - Tomeo", track)
    } else {
        format!("{} | {} - Tomeo", track, status)
    }
}

/// Target position for a relative skip
///
/// Clamped to `[0, duration]`; an unknown (zero) duration only bounds below.
pub fn skip_target(position_ms: u64, duration_ms: u64, delta_ms: i64) -> u64 {
    let target = (position_ms as i64).saturating_add(delta_ms).max(0) as u64;
    if duration_ms > 0 {
        target.min(duration_ms)
    } else {
        target
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviousAction {
    /// Go to the previous playlist entry
    PreviousEntry,
    /// Restart the current entry from zero
    Restart,
}

pub fn previous_action(position_ms: u64) -> PreviousAction {
    if position_ms <= PREVIOUS_THRESHOLD_MS {
        PreviousAction::PreviousEntry
    } else {
        PreviousAction::Restart
    }
}

/// Fullscreen is only honoured while there is video to show
pub fn fullscreen_allowed(requested: bool, video_available: bool) -> bool {
    requested && video_available
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_statuses_clear_text_with_normal_cursor() {
        for status in [
            MediaStatus::Unknown,
            MediaStatus::NoMedia,
            MediaStatus::Loaded,
            MediaStatus::Buffered,
        ] {
            let effect = status_effect(status);
            assert_eq!(effect.text, StatusText::Clear, "{:?}", status);
            assert_eq!(effect.cursor, CursorShape::Normal, "{:?}", status);
            assert!(!effect.alert);
        }
    }

    #[test]
    fn waiting_statuses_show_busy_cursor() {
        assert_eq!(
            status_effect(MediaStatus::Loading),
            StatusEffect {
                text: StatusText::Loading,
                cursor: CursorShape::Busy,
                alert: false
            }
        );
        assert_eq!(
            status_effect(MediaStatus::Stalled),
            StatusEffect {
                text: StatusText::Stalled,
                cursor: CursorShape::Busy,
                alert: false
            }
        );
        let buffering = status_effect(MediaStatus::Buffering);
        assert_eq!(buffering.text, StatusText::Clear);
        assert_eq!(buffering.cursor, CursorShape::Busy);
    }

    #[test]
    fn end_and_invalid() {
        let end = status_effect(MediaStatus::EndOfMedia);
        assert_eq!(end.text, StatusText::Keep);
        assert!(end.alert);

        let invalid = status_effect(MediaStatus::Invalid);
        assert_eq!(invalid.text, StatusText::Error);
        assert_eq!(invalid.cursor, CursorShape::Normal);
    }

    #[test]
    fn status_text_follows_effect() {
        let locale = Locale::new(crate::i18n::Language::English);
        let text = |status, current, error| {
            resolve_status_text(status_effect(status).text, current, error, locale)
        };

        assert_eq!(text(MediaStatus::Loading, "", None), "Loading...");
        assert_eq!(text(MediaStatus::Stalled, "", None), "Media Stalled");
        assert_eq!(text(MediaStatus::Buffered, "Buffering 40%", None), "");
        assert_eq!(
            text(MediaStatus::EndOfMedia, "Buffering 100%", None),
            "Buffering 100%"
        );
        assert_eq!(
            text(MediaStatus::Invalid, "Loading...", Some("Could not demux stream")),
            "Could not demux stream"
        );
        assert_eq!(text(MediaStatus::Invalid, "Loading...", None), "");
    }

    #[test]
    fn end_of_media_advances_until_last_entry() {
        assert_eq!(end_of_media_action(Some(0), 3), EndOfMediaAction::Advance(1));
        assert_eq!(end_of_media_action(Some(1), 3), EndOfMediaAction::Advance(2));
        assert_eq!(end_of_media_action(Some(2), 3), EndOfMediaAction::Stay);
        assert_eq!(end_of_media_action(None, 3), EndOfMediaAction::Stay);
        assert_eq!(end_of_media_action(Some(0), 1), EndOfMediaAction::Stay);
    }

    #[test]
    fn title_includes_status_only_when_present() {
        assert_eq!(window_title("clip.mp4", ""), "clip.mp4 - Tomeo");
        assert_eq!(
            window_title("clip.mp4", "Loading..."),
            "clip.mp4 | Loading... - Tomeo"
        );
    }

    #[test]
    fn skip_moves_exactly_ten_seconds() {
        assert_eq!(skip_target(30_000, 120_000, SKIP_STEP_MS), 40_000);
        assert_eq!(skip_target(30_000, 120_000, -SKIP_STEP_MS), 20_000);
    }

    #[test]
    fn skip_is_clamped_to_bounds() {
        assert_eq!(skip_target(4_000, 120_000, -SKIP_STEP_MS), 0);
        assert_eq!(skip_target(115_000, 120_000, SKIP_STEP_MS), 120_000);
        assert_eq!(skip_target(115_000, 0, SKIP_STEP_MS), 125_000);
    }

    #[test]
    fn previous_threshold_is_five_ms() {
        assert_eq!(previous_action(0), PreviousAction::PreviousEntry);
        assert_eq!(previous_action(5), PreviousAction::PreviousEntry);
        assert_eq!(previous_action(6), PreviousAction::Restart);
        assert_eq!(previous_action(90_000), PreviousAction::Restart);
    }

    #[test]
    fn fullscreen_needs_video() {
        assert!(fullscreen_allowed(true, true));
        assert!(!fullscreen_allowed(true, false));
        assert!(!fullscreen_allowed(false, true));
    }
}
