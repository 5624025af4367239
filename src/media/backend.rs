//! Playback backend abstraction
//!
//! A backend lives on the media thread and is driven one command at a time.
//! It publishes everything it learns through the `MediaReporter` it is handed.

use std::path::Path;
use std::time::Duration;

use super::events::MediaReporter;

pub trait MediaBackend {
    /// File extensions offered by the open dialogs
    const EXTENSIONS: &'static [&'static str];

    /// Replace the current source. The source starts paused.
    fn load(&mut self, path: &Path, reporter: &MediaReporter);

    fn play(&mut self, reporter: &MediaReporter);

    fn pause(&mut self, reporter: &MediaReporter);

    fn stop(&mut self, reporter: &MediaReporter);

    fn seek(&mut self, position: Duration, reporter: &MediaReporter);

    /// Volume in 0.0 - 1.0
    fn set_volume(&mut self, volume: f32);

    fn set_muted(&mut self, muted: bool);

    fn set_rate(&mut self, rate: f32);

    /// Periodic poll for backends that do not push position updates
    fn tick(&mut self, _reporter: &MediaReporter) {}
}

#[cfg(not(feature = "gstreamer"))]
pub type ActiveBackend = super::player::RodioBackend;

#[cfg(feature = "gstreamer")]
pub type ActiveBackend = super::gst_backend::GstBackend;

/// Build the compiled-in backend on the media thread
#[cfg(feature = "gstreamer")]
pub fn create_backend(reporter: &MediaReporter) -> Result<ActiveBackend, String> {
    ActiveBackend::new(reporter.frames())
}

/// Build the compiled-in backend on the media thread
#[cfg(not(feature = "gstreamer"))]
pub fn create_backend(_reporter: &MediaReporter) -> Result<ActiveBackend, String> {
    ActiveBackend::new()
}

/// Extensions accepted by the compiled-in backend
pub fn supported_extensions() -> &'static [&'static str] {
    <ActiveBackend as MediaBackend>::EXTENSIONS
}
