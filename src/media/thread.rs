//! Media thread implementation
//!
//! The backend is created inside a dedicated thread (rodio's output stream
//! is not `Send`) and processes commands from the UI thread one at a time.

use std::thread::{self, JoinHandle};

use anyhow::{Context, Result};

use super::backend::{MediaBackend, create_backend};
use super::events::{
    MediaCommand, MediaCommandReceiver, MediaEventReceiver, MediaReporter, SharedPlaybackState,
    media_command_channel, media_event_channel,
};
use super::handle::MediaHandle;
use super::status::MediaStatus;

pub struct MediaThreadHandle {
    pub handle: MediaHandle,
    event_rx: Option<MediaEventReceiver>,
    thread_handle: Option<JoinHandle<()>>,
}

impl MediaThreadHandle {
    pub fn take_event_rx(&mut self) -> Option<MediaEventReceiver> {
        self.event_rx.take()
    }
}

impl Drop for MediaThreadHandle {
    fn drop(&mut self) {
        self.handle.shutdown();
        if let Some(handle) = self.thread_handle.take()
            && handle.is_finished()
        {
            let _ = handle.join();
        }
    }
}

/// Spawn the media thread with the compiled-in backend
pub fn spawn_media_thread() -> Result<MediaThreadHandle> {
    spawn_with(create_backend)
}

fn spawn_with<B, F>(make_backend: F) -> Result<MediaThreadHandle>
where
    B: MediaBackend,
    F: FnOnce(&MediaReporter) -> Result<B, String> + Send + 'static,
{
    let (command_tx, command_rx) = media_command_channel();
    let (event_tx, event_rx) = media_event_channel();

    let state = SharedPlaybackState::new();
    let reporter = MediaReporter::new(event_tx, state.clone());
    let handle = MediaHandle::new(command_tx, state);

    let thread_handle = thread::Builder::new()
        .name("media-player".to_string())
        .spawn(move || match make_backend(&reporter) {
            Ok(backend) => media_thread_main(backend, command_rx, reporter),
            Err(e) => {
                tracing::error!("Failed to create media backend: {}", e);
                reporter.status(MediaStatus::NoMedia);
                reporter.error(e);
            }
        })
        .context("Failed to spawn media thread")?;

    Ok(MediaThreadHandle {
        handle,
        event_rx: Some(event_rx),
        thread_handle: Some(thread_handle),
    })
}

/// Command loop; returns when `Shutdown` arrives or every sender is gone
fn media_thread_main<B: MediaBackend>(
    mut backend: B,
    mut command_rx: MediaCommandReceiver,
    reporter: MediaReporter,
) {
    tracing::info!("Media thread started");
    reporter.status(MediaStatus::NoMedia);

    while let Some(cmd) = command_rx.blocking_recv() {
        match cmd {
            MediaCommand::Load { path } => backend.load(&path, &reporter),
            MediaCommand::Play => backend.play(&reporter),
            MediaCommand::Pause => backend.pause(&reporter),
            MediaCommand::Stop => backend.stop(&reporter),
            MediaCommand::Seek { position } => backend.seek(position, &reporter),
            MediaCommand::SetVolume { volume } => backend.set_volume(volume),
            MediaCommand::SetMuted { muted } => backend.set_muted(muted),
            MediaCommand::SetRate { rate } => backend.set_rate(rate),
            MediaCommand::Tick => backend.tick(&reporter),
            MediaCommand::Shutdown => {
                backend.stop(&reporter);
                break;
            }
        }
    }

    tracing::info!("Media thread stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{MediaEvent, PlaybackState};
    use std::path::{Path, PathBuf};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    #[derive(Default)]
    struct Recorded {
        calls: Vec<String>,
    }

    struct FakeBackend(Arc<Mutex<Recorded>>);

    impl FakeBackend {
        fn record(&self, call: impl Into<String>) {
            self.0.lock().unwrap().calls.push(call.into());
        }
    }

    impl MediaBackend for FakeBackend {
        const EXTENSIONS: &'static [&'static str] = &["mp4"];

        fn load(&mut self, path: &Path, reporter: &MediaReporter) {
            self.record(format!("load {}", path.display()));
            reporter.current_media(Some(path.to_path_buf()));
            reporter.status(MediaStatus::Loaded);
        }

        fn play(&mut self, reporter: &MediaReporter) {
            self.record("play");
            reporter.playback_state(PlaybackState::Playing);
        }

        fn pause(&mut self, _reporter: &MediaReporter) {
            self.record("pause");
        }

        fn stop(&mut self, reporter: &MediaReporter) {
            self.record("stop");
            reporter.playback_state(PlaybackState::Stopped);
        }

        fn seek(&mut self, position: Duration, reporter: &MediaReporter) {
            self.record(format!("seek {}", position.as_millis()));
            reporter.position(position);
        }

        fn set_volume(&mut self, volume: f32) {
            self.record(format!("volume {}", volume));
        }

        fn set_muted(&mut self, muted: bool) {
            self.record(format!("muted {}", muted));
        }

        fn set_rate(&mut self, rate: f32) {
            self.record(format!("rate {}", rate));
        }
    }

    #[test]
    fn commands_reach_backend_in_order() {
        let recorded = Arc::new(Mutex::new(Recorded::default()));
        let backend = FakeBackend(recorded.clone());

        let (command_tx, command_rx) = media_command_channel();
        let (event_tx, mut event_rx) = media_event_channel();
        let state = SharedPlaybackState::new();
        let reporter = MediaReporter::new(event_tx, state.clone());
        let handle = MediaHandle::new(command_tx, state.clone());

        handle.load(PathBuf::from("/v/clip.mp4"));
        handle.play();
        handle.seek(Duration::from_millis(1500));
        handle.set_volume(0.5);
        handle.set_muted(true);
        handle.set_rate(2.0);
        handle.pause();
        handle.shutdown();

        let worker = thread::spawn(move || media_thread_main(backend, command_rx, reporter));
        worker.join().unwrap();

        assert_eq!(
            recorded.lock().unwrap().calls,
            vec![
                "load /v/clip.mp4",
                "play",
                "seek 1500",
                "volume 0.5",
                "muted true",
                "rate 2",
                "pause",
                "stop",
            ]
        );

        let mut events = Vec::new();
        while let Ok(event) = event_rx.try_recv() {
            events.push(event);
        }
        assert_eq!(events[0], MediaEvent::StatusChanged(MediaStatus::NoMedia));
        assert!(events.contains(&MediaEvent::StatusChanged(MediaStatus::Loaded)));
        assert!(events.contains(&MediaEvent::StateChanged(PlaybackState::Playing)));
        assert!(events.contains(&MediaEvent::PositionChanged(Duration::from_millis(1500))));
        assert_eq!(handle.current_path(), Some(PathBuf::from("/v/clip.mp4")));
    }

    #[test]
    fn backend_failure_is_reported() {
        let mut thread = spawn_with(|_| Err::<FakeBackend, _>("no output device".to_string()))
            .unwrap();
        let mut event_rx = thread.take_event_rx().unwrap();

        let mut events = Vec::new();
        while let Some(event) = event_rx.blocking_recv() {
            events.push(event);
        }
        assert!(events.contains(&MediaEvent::Error("no output device".into())));
        assert!(thread.take_event_rx().is_none());
    }
}
