use std::path::Path;

use crate::error::AudioError;

use super::types::AudioOutput;

/// Silent output used when no audio device could be opened.
#[derive(Debug, Default)]
pub struct NullOutput {
    loaded: bool,
    paused: bool,
}

impl AudioOutput for NullOutput {
    fn play(&mut self, path: &Path, start_paused: bool) -> Result<(), AudioError> {
        tracing::debug!(path = %path.display(), "no audio device, not playing");
        self.loaded = true;
        self.paused = start_paused;
        Ok(())
    }

    fn toggle_pause(&mut self) {
        if self.loaded {
            self.paused = !self.paused;
        }
    }

    fn stop(&mut self) {
        self.loaded = false;
        self.paused = false;
    }

    fn is_paused(&self) -> bool {
        self.paused
    }

    fn is_finished(&self) -> bool {
        false
    }
}
