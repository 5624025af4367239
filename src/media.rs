//! Media playback module
//!
//! - `MediaHandle`: non-blocking control from the UI thread
//! - `spawn_media_thread`: runs the playback backend on its own thread
//! - `events`: commands, events and shared state crossing the thread boundary
//! - `MediaBackend`: GStreamer with video frames by default, audio-only rodio
//!   when built without the `gstreamer` feature

mod backend;
mod events;
#[cfg(feature = "gstreamer")]
mod gst_backend;
mod handle;
#[cfg(not(feature = "gstreamer"))]
mod player;
mod status;
mod thread;

pub use backend::supported_extensions;
pub use events::{MediaEvent, MediaEventReceiver};
pub use handle::MediaHandle;
pub use status::{MediaStatus, PlaybackState};
pub use thread::{MediaThreadHandle, spawn_media_thread};
