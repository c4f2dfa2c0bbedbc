use std::path::Path;

use crate::error::AudioError;

/// Transport for a single track at a time.
pub trait AudioOutput {
    /// Replace whatever is loaded with `path` and start it, or leave it paused
    /// when `start_paused` is set.
    fn play(&mut self, path: &Path, start_paused: bool) -> Result<(), AudioError>;
    /// Toggle pause/resume of the loaded track.
    fn toggle_pause(&mut self);
    /// Drop the loaded track.
    fn stop(&mut self);
    fn is_paused(&self) -> bool;
    /// True once a loaded track has played to its end.
    fn is_finished(&self) -> bool;
}

#[cfg(test)]
pub(crate) mod testing {
    use std::path::{Path, PathBuf};

    use super::AudioOutput;
    use crate::error::AudioError;

    /// Output that records calls instead of producing sound.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingOutput {
        pub played: Vec<PathBuf>,
        pub paused: bool,
        pub finished: bool,
        pub stops: usize,
    }

    impl AudioOutput for RecordingOutput {
        fn play(&mut self, path: &Path, start_paused: bool) -> Result<(), AudioError> {
            self.played.push(path.to_path_buf());
            self.paused = start_paused;
            self.finished = false;
            Ok(())
        }

        fn toggle_pause(&mut self) {
            self.paused = !self.paused;
        }

        fn stop(&mut self) {
            self.stops += 1;
            self.finished = false;
        }

        fn is_paused(&self) -> bool {
            self.paused
        }

        fn is_finished(&self) -> bool {
            self.finished
        }
    }
}
