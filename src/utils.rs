//! Utility functions

use std::path::PathBuf;

// ============================================================================
// Time & Path Utilities
// ============================================================================

const MS_PER_HOUR: u64 = 3_600_000;

/// Format one timestamp as `mm:ss` or `hh:mm:ss`
fn format_time(ms: u64, with_hours: bool) -> String {
    let secs = ms / 1000;
    let (h, m, s) = (secs / 3600, (secs / 60) % 60, secs % 60);
    if with_hours {
        format!("{:02}:{:02}:{:02}", h, m, s)
    } else {
        format!("{:02}:{:02}", m, s)
    }
}

/// Format the `current / total` clock shown next to the seek slider
///
/// Empty when nothing is known yet. Hours are shown once the duration
/// exceeds one hour, for both sides so the two stay aligned.
pub fn format_clock(position_ms: u64, duration_ms: u64) -> String {
    if position_ms == 0 && duration_ms == 0 {
        return String::new();
    }
    let with_hours = duration_ms > MS_PER_HOUR;
    format!(
        "{} / {}",
        format_time(position_ms, with_hours),
        format_time(duration_ms, with_hours)
    )
}

/// Get the base data directory for tomeo
pub fn data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "tomeo", "Tomeo")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Default location of the library database
pub fn default_db_path() -> PathBuf {
    data_dir().join("tomeo.db")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_is_empty_before_anything_loads() {
        assert_eq!(format_clock(0, 0), "");
    }

    #[test]
    fn clock_uses_minutes_for_short_media() {
        assert_eq!(format_clock(0, 95_000), "00:00 / 01:35");
        assert_eq!(format_clock(61_999, 3_600_000), "01:01 / 60:00");
    }

    #[test]
    fn clock_uses_hours_for_long_media() {
        assert_eq!(format_clock(3_723_000, 7_200_000), "01:02:03 / 02:00:00");
        assert_eq!(format_clock(5_000, 3_600_001), "00:00:05 / 01:00:00");
    }

    #[test]
    fn clock_shows_position_without_duration() {
        assert_eq!(format_clock(12_000, 0), "00:12 / 00:00");
    }
}
