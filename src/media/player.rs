//! Audio-only playback backend using rodio, for builds without GStreamer
//!
//! Sources are decoded through symphonia, which demuxes the common video
//! containers (mp4, mkv, webm) and plays their audio track. This backend has
//! no video output, so `video_available` is always reported as false.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};

use super::backend::MediaBackend;
use super::events::MediaReporter;
use super::status::{MediaStatus, PlaybackState};

pub struct RodioBackend {
    // Dropping the stream silences every sink attached to its mixer
    stream: OutputStream,
    sink: Option<Sink>,
    path: Option<PathBuf>,
    duration: Option<Duration>,
    volume: f32,
    muted: bool,
    rate: f32,
}

impl RodioBackend {
    pub fn new() -> Result<Self, String> {
        let stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| format!("Failed to open audio output: {}", e))?;

        Ok(Self {
            stream,
            sink: None,
            path: None,
            duration: None,
            volume: 1.0,
            muted: false,
            rate: 1.0,
        })
    }

    fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.volume }
    }

    /// Decode `path` into a fresh, paused sink
    fn open(&self, path: &Path) -> Result<(Sink, Option<Duration>), String> {
        let file = File::open(path).map_err(|e| format!("Failed to open file: {}", e))?;
        let source = Decoder::new(BufReader::new(file))
            .map_err(|e| format!("Failed to decode media: {}", e))?;
        let duration = source.total_duration();

        let sink = Sink::connect_new(self.stream.mixer());
        sink.pause();
        sink.set_volume(self.effective_volume());
        sink.set_speed(self.rate);
        sink.append(source);

        Ok((sink, duration))
    }

    /// Reload the current path after the sink ran dry
    fn rewind(&mut self, reporter: &MediaReporter) -> bool {
        let Some(path) = self.path.clone() else {
            return false;
        };
        match self.open(&path) {
            Ok((sink, _)) => {
                self.sink = Some(sink);
                reporter.position(Duration::ZERO);
                true
            }
            Err(e) => {
                reporter.status(MediaStatus::Invalid);
                reporter.error(e);
                false
            }
        }
    }
}

impl MediaBackend for RodioBackend {
    const EXTENSIONS: &'static [&'static str] = &[
        "mp4", "m4v", "mkv", "webm", "mov", "mp3", "m4a", "aac", "flac", "ogg", "oga", "wav",
    ];

    fn load(&mut self, path: &Path, reporter: &MediaReporter) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
        self.path = None;
        self.duration = None;

        reporter.playback_state(PlaybackState::Stopped);
        reporter.position(Duration::ZERO);
        reporter.duration(Duration::ZERO);
        reporter.video_available(false);
        reporter.current_media(Some(path.to_path_buf()));
        reporter.status(MediaStatus::Loading);

        match self.open(path) {
            Ok((sink, duration)) => {
                tracing::info!("Loaded media: {:?} ({:?})", path, duration);
                self.sink = Some(sink);
                self.path = Some(path.to_path_buf());
                self.duration = duration;
                reporter.duration(duration.unwrap_or(Duration::ZERO));
                reporter.status(MediaStatus::Loaded);
            }
            Err(e) => {
                reporter.status(MediaStatus::Invalid);
                reporter.error(e);
            }
        }
    }

    fn play(&mut self, reporter: &MediaReporter) {
        let ended = self.sink.as_ref().is_none_or(|sink| sink.empty());
        if ended && !self.rewind(reporter) {
            return;
        }
        if let Some(sink) = &self.sink {
            sink.play();
            reporter.status(MediaStatus::Buffered);
            reporter.playback_state(PlaybackState::Playing);
        }
    }

    fn pause(&mut self, reporter: &MediaReporter) {
        if let Some(sink) = &self.sink {
            sink.pause();
            reporter.position(sink.get_pos());
            reporter.playback_state(PlaybackState::Paused);
        }
    }

    fn stop(&mut self, reporter: &MediaReporter) {
        if let Some(sink) = &self.sink {
            sink.pause();
            if let Err(e) = sink.try_seek(Duration::ZERO) {
                tracing::debug!("Rewind on stop failed: {}", e);
            }
        }
        reporter.position(Duration::ZERO);
        reporter.playback_state(PlaybackState::Stopped);
    }

    fn seek(&mut self, position: Duration, reporter: &MediaReporter) {
        let position = match self.duration {
            Some(duration) => position.min(duration),
            None => position,
        };
        if self.sink.as_ref().is_some_and(|sink| sink.empty()) && !self.rewind(reporter) {
            return;
        }
        if let Some(sink) = &self.sink {
            match sink.try_seek(position) {
                Ok(()) => reporter.position(position),
                Err(e) => reporter.error(format!("Seek failed: {}", e)),
            }
        }
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        if let Some(sink) = &self.sink {
            sink.set_volume(self.effective_volume());
        }
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        if let Some(sink) = &self.sink {
            sink.set_volume(self.effective_volume());
        }
    }

    fn set_rate(&mut self, rate: f32) {
        self.rate = rate;
        if let Some(sink) = &self.sink {
            sink.set_speed(rate);
        }
    }

    fn tick(&mut self, reporter: &MediaReporter) {
        let Some(sink) = &self.sink else {
            return;
        };
        if sink.is_paused() {
            return;
        }
        if sink.empty() {
            if let Some(duration) = self.duration {
                reporter.position(duration);
            }
            reporter.playback_state(PlaybackState::Stopped);
            reporter.status(MediaStatus::EndOfMedia);
            return;
        }
        reporter.position(sink.get_pos());
    }
}
