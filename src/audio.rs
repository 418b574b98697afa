use raylib::prelude::*;
use tracing::{debug, warn};
use crate::constants::*;
use crate::error::KeepsakeError;

/// Something that can play and pause the background music.
pub trait AudioSink {
    fn play(&mut self) -> Result<(), KeepsakeError>;
    fn pause(&mut self);
    /// Called every frame so streamed audio keeps its buffers filled.
    fn update(&mut self) {}
}

impl<S: AudioSink + ?Sized> AudioSink for Box<S> {
    fn play(&mut self) -> Result<(), KeepsakeError> {
        (**self).play()
    }

    fn pause(&mut self) {
        (**self).pause()
    }

    fn update(&mut self) {
        (**self).update()
    }
}

/// Music streamed through the raylib audio device.
pub struct StreamSink<'a> {
    music: Music<'a>,
    started: bool,
}

impl<'a> StreamSink<'a> {
    pub fn new(music: Music<'a>) -> Self {
        Self { music, started: false }
    }
}

impl AudioSink for StreamSink<'_> {
    fn play(&mut self) -> Result<(), KeepsakeError> {
        if self.started {
            self.music.resume_stream();
        } else {
            self.music.play_stream();
            self.started = true;
        }
        if self.music.is_stream_playing() {
            Ok(())
        } else {
            Err(KeepsakeError::AudioUnavailable("stream did not start".to_string()))
        }
    }

    fn pause(&mut self) {
        self.music.pause_stream();
    }

    fn update(&mut self) {
        self.music.update_stream();
    }
}

/// Stand-in used when there is no music file or no audio device.
#[derive(Debug, Default)]
pub struct Silence {
    reason: String,
}

impl Silence {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

impl AudioSink for Silence {
    fn play(&mut self) -> Result<(), KeepsakeError> {
        Err(KeepsakeError::AudioUnavailable(self.reason.clone()))
    }

    fn pause(&mut self) {}
}

/// Play/pause state of the music control.
pub struct MusicToggle<S> {
    sink: S,
    playing: bool,
}

impl<S: AudioSink> MusicToggle<S> {
    pub fn new(sink: S) -> Self {
        Self { sink, playing: false }
    }

    /// Flips between playing and paused. A failed start is logged and the
    /// control stays paused.
    pub fn toggle(&mut self) -> bool {
        if self.playing {
            self.sink.pause();
            self.playing = false;
        } else {
            match self.sink.play() {
                Ok(()) => self.playing = true,
                Err(e) => warn!("Playback failed: {}", e),
            }
        }
        debug!("Music {}", if self.playing { "playing" } else { "paused" });
        self.playing
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn icon(&self) -> &'static str {
        if self.playing { ICON_PLAYING } else { ICON_PAUSED }
    }

    pub fn update(&mut self) {
        if self.playing {
            self.sink.update();
        }
    }
}
