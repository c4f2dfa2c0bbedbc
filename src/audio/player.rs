use std::path::Path;

use rodio::{OutputStream, OutputStreamBuilder, Sink};

use crate::error::AudioError;

use super::sink::create_sink;
use super::types::AudioOutput;

/// Plays tracks on the default output device.
pub struct RodioOutput {
    stream: OutputStream,
    sink: Option<Sink>,
}

impl RodioOutput {
    /// Open the default output device.
    pub fn open() -> Result<Self, AudioError> {
        let mut stream = OutputStreamBuilder::open_default_stream()?;
        // rodio prints to stderr when the stream is dropped, which would land
        // on top of the restored terminal.
        stream.log_on_drop(false);
        Ok(Self { stream, sink: None })
    }
}

impl AudioOutput for RodioOutput {
    fn play(&mut self, path: &Path, start_paused: bool) -> Result<(), AudioError> {
        self.stop();
        let sink = create_sink(&self.stream, path)?;
        if !start_paused {
            sink.play();
        }
        tracing::info!(path = %path.display(), "playing");
        self.sink = Some(sink);
        Ok(())
    }

    fn toggle_pause(&mut self) {
        if let Some(sink) = &self.sink {
            if sink.is_paused() {
                sink.play();
            } else {
                sink.pause();
            }
        }
    }

    fn stop(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }

    fn is_paused(&self) -> bool {
        self.sink.as_ref().map(Sink::is_paused).unwrap_or(false)
    }

    fn is_finished(&self) -> bool {
        self.sink
            .as_ref()
            .map(|s| !s.is_paused() && s.empty())
            .unwrap_or(false)
    }
}
