//! GStreamer playback backend with video output
//!
//! Drives a `playbin` element whose video sink is a small bin converting to
//! RGBA and ending in an `appsink`. Each decoded frame lands in the
//! `FrameSlot` the UI draws from. Bus messages are drained on every tick.

use std::path::Path;
use std::time::Duration;

use gstreamer as gst;
use gstreamer::prelude::*;
use gstreamer::{ClockTime, MessageView, SeekFlags, SeekType, State};
use gstreamer_app::{AppSink, AppSinkCallbacks};
use gstreamer_video::{VideoCapsBuilder, VideoFormat, VideoFrameExt, VideoInfo};

use super::backend::MediaBackend;
use super::events::{FrameSlot, MediaReporter, VideoFrame};
use super::status::{MediaStatus, PlaybackState};

/// Remembers that the pipeline ran to end-of-stream
///
/// A pipeline at EOS stays there when set back to `Playing`; it has to be
/// rewound first.
#[derive(Debug, Default)]
struct EndOfStream(bool);

impl EndOfStream {
    fn reached(&mut self) {
        self.0 = true;
    }

    /// A flushing seek leaves EOS
    fn clear(&mut self) {
        self.0 = false;
    }

    /// Whether play has to rewind first; resets the flag
    fn take(&mut self) -> bool {
        std::mem::take(&mut self.0)
    }
}

pub struct GstBackend {
    playbin: gst::Element,
    frames: FrameSlot,
    rate: f64,
    /// Waiting for the first preroll after `load`
    loading: bool,
    ended: EndOfStream,
}

impl GstBackend {
    pub fn new(frames: FrameSlot) -> Result<Self, String> {
        gst::init().map_err(|e| format!("Failed to initialize GStreamer: {}", e))?;
        let playbin = gst::ElementFactory::make("playbin")
            .build()
            .map_err(|e| format!("Failed to create playbin: {}", e))?;

        let video_sink = video_sink(frames.clone())?;
        playbin.set_property("video-sink", &video_sink);

        Ok(Self {
            playbin,
            frames,
            rate: 1.0,
            loading: false,
            ended: EndOfStream::default(),
        })
    }

    fn rewind(&mut self, reporter: &MediaReporter) {
        self.ended.clear();
        if let Err(e) = self
            .playbin
            .seek_simple(SeekFlags::FLUSH | SeekFlags::KEY_UNIT, ClockTime::ZERO)
        {
            tracing::debug!("Rewind failed: {}", e);
        }
        reporter.position(Duration::ZERO);
    }

    fn set_state(&self, state: State, reporter: &MediaReporter) -> bool {
        match self.playbin.set_state(state) {
            Ok(_) => true,
            Err(e) => {
                reporter.error(format!("Failed to change pipeline state: {}", e));
                false
            }
        }
    }

    fn position(&self) -> Option<Duration> {
        self.playbin
            .query_position::<ClockTime>()
            .map(|t| Duration::from_millis(t.mseconds()))
    }

    fn drain_bus(&mut self, reporter: &MediaReporter) {
        let Some(bus) = self.playbin.bus() else {
            return;
        };
        while let Some(msg) = bus.pop() {
            match msg.view() {
                MessageView::Eos(_) => {
                    self.ended.reached();
                    reporter.playback_state(PlaybackState::Stopped);
                    reporter.status(MediaStatus::EndOfMedia);
                }
                MessageView::Error(err) => {
                    self.loading = false;
                    reporter.status(MediaStatus::Invalid);
                    reporter.error(err.error().to_string());
                }
                MessageView::Buffering(buffering) => {
                    let percent = buffering.percent().clamp(0, 100) as u8;
                    reporter.buffer_progress(percent);
                    if percent < 100 {
                        reporter.status(MediaStatus::Buffering);
                    } else {
                        reporter.status(MediaStatus::Buffered);
                    }
                }
                MessageView::AsyncDone(_) => {
                    if let Some(duration) = self.playbin.query_duration::<ClockTime>() {
                        reporter.duration(Duration::from_millis(duration.mseconds()));
                    }
                    let video_streams = self.playbin.property::<i32>("n-video");
                    reporter.video_available(video_streams > 0);
                    if self.loading {
                        self.loading = false;
                        reporter.status(MediaStatus::Loaded);
                    }
                }
                _ => {}
            }
        }
    }
}

/// `videoconvert ! videoscale ! appsink` with RGBA caps, wrapped in a bin
fn video_sink(frames: FrameSlot) -> Result<gst::Element, String> {
    let make = |factory: &str| {
        gst::ElementFactory::make(factory)
            .build()
            .map_err(|e| format!("Failed to create {}: {}", factory, e))
    };
    let convert = make("videoconvert")?;
    let scale = make("videoscale")?;

    let appsink = AppSink::builder()
        .caps(&VideoCapsBuilder::new().format(VideoFormat::Rgba).build())
        .max_buffers(1)
        .drop(true)
        .build();
    appsink.set_callbacks(
        AppSinkCallbacks::builder()
            .new_sample(move |sink| {
                let sample = sink.pull_sample().map_err(|_| gst::FlowError::Eos)?;
                match frame_from_sample(&sample) {
                    Some(frame) => frames.publish(frame),
                    None => tracing::debug!("Dropping undecodable video sample"),
                }
                Ok(gst::FlowSuccess::Ok)
            })
            .build(),
    );
    let appsink: gst::Element = appsink.upcast();

    let bin = gst::Bin::new();
    bin.add_many([&convert, &scale, &appsink])
        .map_err(|e| format!("Failed to build video sink: {}", e))?;
    gst::Element::link_many([&convert, &scale, &appsink])
        .map_err(|e| format!("Failed to link video sink: {}", e))?;

    let pad = convert
        .static_pad("sink")
        .ok_or_else(|| "videoconvert has no sink pad".to_string())?;
    let ghost = gst::GhostPad::with_target(&pad)
        .map_err(|e| format!("Failed to create ghost pad: {}", e))?;
    bin.add_pad(&ghost)
        .map_err(|e| format!("Failed to add ghost pad: {}", e))?;

    Ok(bin.upcast())
}

fn frame_from_sample(sample: &gst::Sample) -> Option<VideoFrame> {
    let info = VideoInfo::from_caps(sample.caps()?).ok()?;
    let buffer = sample.buffer_owned()?;
    let frame = gstreamer_video::VideoFrame::from_buffer_readable(buffer, &info).ok()?;

    let stride = usize::try_from(*frame.plane_stride().first()?).ok()?;
    VideoFrame::from_plane(info.width(), info.height(), stride, frame.plane_data(0).ok()?)
}

impl Drop for GstBackend {
    fn drop(&mut self) {
        let _ = self.playbin.set_state(State::Null);
    }
}

impl MediaBackend for GstBackend {
    const EXTENSIONS: &'static [&'static str] = &[
        "mp4", "m4v", "mkv", "webm", "mov", "avi", "wmv", "flv", "mpg", "mpeg", "ts", "ogv",
        "mp3", "m4a", "aac", "flac", "ogg", "opus", "wav",
    ];

    fn load(&mut self, path: &Path, reporter: &MediaReporter) {
        let _ = self.playbin.set_state(State::Null);
        self.ended.clear();
        self.frames.clear();

        reporter.playback_state(PlaybackState::Stopped);
        reporter.position(Duration::ZERO);
        reporter.duration(Duration::ZERO);
        reporter.video_available(false);
        reporter.current_media(Some(path.to_path_buf()));
        reporter.status(MediaStatus::Loading);

        let uri = match gst::glib::filename_to_uri(path, None) {
            Ok(uri) => uri,
            Err(e) => {
                reporter.status(MediaStatus::Invalid);
                reporter.error(format!("Invalid media path: {}", e));
                return;
            }
        };

        tracing::info!("Loading media: {}", uri);
        self.playbin.set_property("uri", uri.as_str());
        self.loading = true;
        if !self.set_state(State::Paused, reporter) {
            self.loading = false;
            reporter.status(MediaStatus::Invalid);
        }
    }

    fn play(&mut self, reporter: &MediaReporter) {
        if self.ended.take() {
            self.rewind(reporter);
        }
        if self.set_state(State::Playing, reporter) {
            reporter.playback_state(PlaybackState::Playing);
        }
    }

    fn pause(&mut self, reporter: &MediaReporter) {
        if self.set_state(State::Paused, reporter) {
            if let Some(position) = self.position() {
                reporter.position(position);
            }
            reporter.playback_state(PlaybackState::Paused);
        }
    }

    fn stop(&mut self, reporter: &MediaReporter) {
        if self.set_state(State::Paused, reporter) {
            self.rewind(reporter);
            reporter.playback_state(PlaybackState::Stopped);
        }
    }

    fn seek(&mut self, position: Duration, reporter: &MediaReporter) {
        let target = ClockTime::from_mseconds(position.as_millis() as u64);
        match self.playbin.seek(
            self.rate,
            SeekFlags::FLUSH | SeekFlags::ACCURATE,
            SeekType::Set,
            Some(target),
            SeekType::None,
            ClockTime::NONE,
        ) {
            Ok(()) => {
                self.ended.clear();
                reporter.position(position);
            }
            Err(e) => reporter.error(format!("Seek failed: {}", e)),
        }
    }

    fn set_volume(&mut self, volume: f32) {
        self.playbin
            .set_property("volume", f64::from(volume.clamp(0.0, 1.0)));
    }

    fn set_muted(&mut self, muted: bool) {
        self.playbin.set_property("mute", muted);
    }

    fn set_rate(&mut self, rate: f32) {
        self.rate = f64::from(rate);
        let position = self
            .playbin
            .query_position::<ClockTime>()
            .unwrap_or(ClockTime::ZERO);
        if let Err(e) = self.playbin.seek(
            self.rate,
            SeekFlags::FLUSH | SeekFlags::ACCURATE,
            SeekType::Set,
            Some(position),
            SeekType::None,
            ClockTime::NONE,
        ) {
            tracing::warn!("Failed to change playback rate: {}", e);
        }
    }

    fn tick(&mut self, reporter: &MediaReporter) {
        self.drain_bus(reporter);
        if let Some(position) = self.position() {
            reporter.position(position);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_after_end_rewinds_once() {
        let mut ended = EndOfStream::default();
        assert!(!ended.take());

        ended.reached();
        assert!(ended.take());
        assert!(!ended.take());
    }

    #[test]
    fn seeking_leaves_end_of_stream() {
        let mut ended = EndOfStream::default();
        ended.reached();
        ended.clear();
        assert!(!ended.take());
    }
}
