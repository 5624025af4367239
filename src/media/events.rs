//! Media thread communication types
//!
//! - `MediaCommand` - Commands sent from UI thread to media thread
//! - `MediaEvent` - Events sent from media thread to UI thread
//! - `SharedPlaybackState` - Thread-safe state for non-blocking UI reads
//! - `FrameSlot` - Latest decoded video frame, written by the backend
//! - `MediaReporter` - Used by backends to publish state changes
//!
//! ## Architecture
//! ```text
//! UI Thread (MediaHandle) --[MediaCommand]--> Media Thread (MediaBackend)
//! UI Thread              <--[MediaEvent]---- Media Thread
//! UI Thread              <--[SharedState]--- Media Thread (non-blocking reads)
//! UI Thread              <--[FrameSlot]----- Streaming thread (video frames)
//! ```

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::{Mutex, RwLock};

use super::status::{MediaStatus, PlaybackState};

// ============ Commands (UI -> Media Thread) ============

/// Commands sent from UI thread to media thread
///
/// The UI thread sends and returns immediately; results come back as `MediaEvent`s.
#[derive(Debug, Clone)]
pub enum MediaCommand {
    /// Replace the current source
    Load { path: PathBuf },
    Play,
    Pause,
    Stop,
    Seek { position: Duration },
    /// Volume (0.0 - 1.0)
    SetVolume { volume: f32 },
    SetMuted { muted: bool },
    /// Playback rate, 1.0 is normal speed
    SetRate { rate: f32 },
    /// Periodic tick for position sync and end-of-media detection
    Tick,
    /// Leave the command loop
    Shutdown,
}

// ============ Events (Media Thread -> UI) ============

/// Events emitted by the media thread
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    StatusChanged(MediaStatus),
    StateChanged(PlaybackState),
    PositionChanged(Duration),
    DurationChanged(Duration),
    /// Buffer fill in percent (0 - 100)
    BufferProgress(u8),
    VideoAvailableChanged(bool),
    CurrentMediaChanged(Option<PathBuf>),
    Error(String),
}

// ============ Video Frames ============

/// One decoded video frame, tightly packed RGBA
#[derive(Clone, PartialEq, Eq)]
pub struct VideoFrame {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl std::fmt::Debug for VideoFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VideoFrame")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl VideoFrame {
    /// Copy a frame out of a plane whose rows may be padded to `stride` bytes
    pub fn from_plane(width: u32, height: u32, stride: usize, plane: &[u8]) -> Option<Self> {
        let row_len = width as usize * 4;
        if stride < row_len || plane.len() < stride * height.saturating_sub(1) as usize + row_len
        {
            return None;
        }

        let pixels = if stride == row_len {
            plane[..row_len * height as usize].to_vec()
        } else {
            plane
                .chunks(stride)
                .take(height as usize)
                .flat_map(|line| &line[..row_len])
                .copied()
                .collect()
        };

        Some(Self {
            width,
            height,
            pixels,
        })
    }
}

/// Mailbox holding only the newest frame
///
/// The backend's streaming thread overwrites it; the UI takes the frame out,
/// so each frame is picked up at most once.
#[derive(Clone, Default)]
pub struct FrameSlot(Arc<Mutex<Option<VideoFrame>>>);

impl FrameSlot {
    pub fn publish(&self, frame: VideoFrame) {
        *self.0.lock() = Some(frame);
    }

    pub fn clear(&self) {
        self.0.lock().take();
    }

    pub fn take(&self) -> Option<VideoFrame> {
        self.0.lock().take()
    }
}

// ============ Shared State ============

#[derive(Debug, Clone, Default)]
struct PlaybackStateInner {
    status: MediaStatus,
    state: PlaybackState,
    position: Duration,
    duration: Duration,
    video_available: bool,
    current_path: Option<PathBuf>,
}

/// Thread-safe shared playback state
///
/// UI thread reads this without blocking.
/// Media thread updates it through `MediaReporter`.
#[derive(Clone, Default)]
pub struct SharedPlaybackState {
    inner: Arc<RwLock<PlaybackStateInner>>,
    frames: FrameSlot,
}

impl std::fmt::Debug for SharedPlaybackState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("SharedPlaybackState")
            .field("status", &inner.status)
            .field("state", &inner.state)
            .field("position", &inner.position)
            .field("duration", &inner.duration)
            .finish()
    }
}

impl SharedPlaybackState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_path(&self) -> Option<PathBuf> {
        self.inner.read().current_path.clone()
    }

    pub fn frames(&self) -> &FrameSlot {
        &self.frames
    }
}

// ============ Reporter ============

/// Publishes backend state changes
///
/// Every setter writes the shared state and emits an event only when the
/// value actually changed, so backends can report unconditionally.
#[derive(Clone)]
pub struct MediaReporter {
    event_tx: MediaEventSender,
    state: SharedPlaybackState,
}

macro_rules! report_field {
    ($name:ident, $field:ident, $ty:ty, $event:ident) => {
        pub fn $name(&self, value: $ty) {
            {
                let mut inner = self.state.inner.write();
                if inner.$field == value {
                    return;
                }
                inner.$field = value.clone();
            }
            let _ = self.event_tx.send(MediaEvent::$event(value));
        }
    };
}

impl MediaReporter {
    pub fn new(event_tx: MediaEventSender, state: SharedPlaybackState) -> Self {
        Self { event_tx, state }
    }

    report_field!(status, status, MediaStatus, StatusChanged);
    report_field!(playback_state, state, PlaybackState, StateChanged);
    report_field!(position, position, Duration, PositionChanged);
    report_field!(duration, duration, Duration, DurationChanged);
    report_field!(video_available, video_available, bool, VideoAvailableChanged);
    report_field!(current_media, current_path, Option<PathBuf>, CurrentMediaChanged);

    pub fn buffer_progress(&self, percent: u8) {
        let _ = self
            .event_tx
            .send(MediaEvent::BufferProgress(percent.min(100)));
    }

    /// Slot the backend's video sink writes decoded frames into
    pub fn frames(&self) -> FrameSlot {
        self.state.frames.clone()
    }

    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("Media error: {}", message);
        let _ = self.event_tx.send(MediaEvent::Error(message));
    }
}

// ============ Channel Types ============

/// Sender for media commands (held by MediaHandle)
pub type MediaCommandSender = tokio::sync::mpsc::UnboundedSender<MediaCommand>;

/// Receiver for media commands (held by media thread)
pub type MediaCommandReceiver = tokio::sync::mpsc::UnboundedReceiver<MediaCommand>;

/// Sender for media events (held by MediaReporter)
pub type MediaEventSender = tokio::sync::mpsc::UnboundedSender<MediaEvent>;

/// Receiver for media events (held by App)
pub type MediaEventReceiver = tokio::sync::mpsc::UnboundedReceiver<MediaEvent>;

pub fn media_command_channel() -> (MediaCommandSender, MediaCommandReceiver) {
    tokio::sync::mpsc::unbounded_channel()
}

pub fn media_event_channel() -> (MediaEventSender, MediaEventReceiver) {
    tokio::sync::mpsc::unbounded_channel()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reporter_only_emits_changes() {
        let (tx, mut rx) = media_event_channel();
        let state = SharedPlaybackState::new();
        let reporter = MediaReporter::new(tx, state.clone());

        reporter.status(MediaStatus::Loading);
        reporter.status(MediaStatus::Loading);
        reporter.position(Duration::from_millis(250));

        assert_eq!(
            rx.try_recv().ok(),
            Some(MediaEvent::StatusChanged(MediaStatus::Loading))
        );
        assert_eq!(
            rx.try_recv().ok(),
            Some(MediaEvent::PositionChanged(Duration::from_millis(250)))
        );
        assert!(rx.try_recv().is_err());

        reporter.current_media(Some(PathBuf::from("/v/a.mkv")));
        assert_eq!(state.current_path(), Some(PathBuf::from("/v/a.mkv")));
    }

    #[test]
    fn buffer_progress_is_capped() {
        let (tx, mut rx) = media_event_channel();
        let reporter = MediaReporter::new(tx, SharedPlaybackState::new());
        reporter.buffer_progress(140);
        assert_eq!(rx.try_recv().ok(), Some(MediaEvent::BufferProgress(100)));
    }

    #[test]
    fn frame_slot_hands_out_newest_frame_once() {
        let (tx, _rx) = media_event_channel();
        let state = SharedPlaybackState::new();
        let reporter = MediaReporter::new(tx, state.clone());
        let sink = reporter.frames();

        let frame = |shade: u8| VideoFrame {
            width: 1,
            height: 1,
            pixels: vec![shade; 4],
        };
        sink.publish(frame(10));
        sink.publish(frame(20));

        assert_eq!(state.frames().take(), Some(frame(20)));
        assert_eq!(state.frames().take(), None);

        sink.publish(frame(30));
        sink.clear();
        assert_eq!(state.frames().take(), None);
    }

    #[test]
    fn padded_rows_are_packed() {
        // 2x2 RGBA with 4 bytes of padding per row
        let plane: Vec<u8> = (0..24).collect();
        let frame = VideoFrame::from_plane(2, 2, 12, &plane).unwrap();
        assert_eq!(frame.pixels.len(), 16);
        assert_eq!(&frame.pixels[..8], &plane[..8]);
        assert_eq!(&frame.pixels[8..], &plane[12..20]);

        let packed = VideoFrame::from_plane(2, 2, 8, &plane[..16]).unwrap();
        assert_eq!(packed.pixels, plane[..16].to_vec());
    }

    #[test]
    fn short_plane_is_rejected() {
        assert!(VideoFrame::from_plane(2, 2, 8, &[0; 12]).is_none());
        assert!(VideoFrame::from_plane(2, 2, 4, &[0; 16]).is_none());
    }
}
