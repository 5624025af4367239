//! Media status and playback state as reported by a backend

/// Lifecycle of the current media source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaStatus {
    #[default]
    Unknown,
    /// No source set
    NoMedia,
    Loading,
    Loaded,
    /// Playback is waiting for data
    Buffering,
    /// Playback stalled mid-stream
    Stalled,
    /// Enough data buffered to keep playing
    Buffered,
    EndOfMedia,
    /// Source could not be decoded
    Invalid,
}

impl MediaStatus {
    /// Whether a source is loaded far enough to report position
    pub fn has_media(self) -> bool {
        matches!(
            self,
            Self::Loaded | Self::Buffering | Self::Stalled | Self::Buffered | Self::EndOfMedia
        )
    }
}

/// Transport state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

impl PlaybackState {
    pub fn is_playing(self) -> bool {
        self == Self::Playing
    }
}
