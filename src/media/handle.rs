//! Media handle for non-blocking playback control from UI thread
//!
//! All methods send commands to the media thread and return immediately.
//! State and video frames are read from `SharedPlaybackState` without blocking.

use std::path::PathBuf;
use std::time::Duration;

use super::events::{MediaCommand, MediaCommandSender, SharedPlaybackState, VideoFrame};

/// Handle for controlling media from UI thread
#[derive(Clone)]
pub struct MediaHandle {
    command_tx: MediaCommandSender,
    state: SharedPlaybackState,
}

impl std::fmt::Debug for MediaHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaHandle")
            .field("state", &self.state)
            .finish()
    }
}

impl MediaHandle {
    pub fn new(command_tx: MediaCommandSender, state: SharedPlaybackState) -> Self {
        Self { command_tx, state }
    }

    fn send(&self, command: MediaCommand) {
        if self.command_tx.send(command).is_err() {
            tracing::warn!("Media thread is gone, command dropped");
        }
    }

    // ============ Playback Control ============

    /// Replace the current source; listen for `MediaEvent::StatusChanged`
    pub fn load(&self, path: PathBuf) {
        self.send(MediaCommand::Load { path });
    }

    pub fn play(&self) {
        self.send(MediaCommand::Play);
    }

    pub fn pause(&self) {
        self.send(MediaCommand::Pause);
    }

    pub fn stop(&self) {
        self.send(MediaCommand::Stop);
    }

    pub fn seek(&self, position: Duration) {
        self.send(MediaCommand::Seek { position });
    }

    /// Volume in 0.0 - 1.0
    pub fn set_volume(&self, volume: f32) {
        self.send(MediaCommand::SetVolume { volume });
    }

    pub fn set_muted(&self, muted: bool) {
        self.send(MediaCommand::SetMuted { muted });
    }

    pub fn set_rate(&self, rate: f32) {
        self.send(MediaCommand::SetRate { rate });
    }

    /// Position sync, driven by the UI tick subscription
    pub fn tick(&self) {
        let _ = self.command_tx.send(MediaCommand::Tick);
    }

    pub fn shutdown(&self) {
        let _ = self.command_tx.send(MediaCommand::Shutdown);
    }

    // ============ State Queries (non-blocking reads) ============

    pub fn current_path(&self) -> Option<PathBuf> {
        self.state.current_path()
    }

    /// Newest decoded video frame not yet shown, if any
    pub fn take_frame(&self) -> Option<VideoFrame> {
        self.state.frames().take()
    }
}
