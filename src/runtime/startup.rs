use std::path::PathBuf;

use crate::app::{Command, IndexPicker, LoopMode, Session, ViewState};
use crate::audio::AudioOutput;
use crate::config;
use crate::library::LibrarySource;

use super::event_loop::load_now;

pub fn loop_mode_from(setting: config::LoopModeSetting) -> LoopMode {
    match setting {
        config::LoopModeSetting::None => LoopMode::None,
        config::LoopModeSetting::One => LoopMode::One,
        config::LoopModeSetting::All => LoopMode::All,
    }
}

/// Seed the session with the configured shuffle and loop flags.
pub fn apply_playback_defaults(
    session: &mut Session,
    settings: &config::Settings,
    library: &dyn LibrarySource,
    picker: &mut dyn IndexPicker,
) {
    session.handle(
        Command::SetShuffle(settings.playback.shuffle),
        library,
        picker,
    );
    session.handle(
        Command::SetLoop(loop_mode_from(settings.playback.loop_mode)),
        library,
        picker,
    );
}

/// Queue the files named on the command line, in order.
pub fn enqueue_paths(
    session: &mut Session,
    paths: &[PathBuf],
    library: &dyn LibrarySource,
    picker: &mut dyn IndexPicker,
) {
    for path in paths {
        session.handle(Command::EnqueuePath(path.clone()), library, picker);
    }
}

/// Hand the initial selection to the output, paused, so the first key press
/// of play/pause starts it.
pub fn load_initial(session: &Session, output: &mut dyn AudioOutput, view: &mut ViewState) {
    load_now(session, output, view, false);
}
