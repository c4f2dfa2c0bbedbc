use std::path::Path;

use super::{AudioOutput, NullOutput};

#[test]
fn null_output_tracks_pause_state_only_when_loaded() {
    let mut out = NullOutput::default();
    out.toggle_pause();
    assert!(!out.is_paused());

    out.play(Path::new("/music/a.mp3"), false).unwrap();
    assert!(!out.is_paused());
    out.toggle_pause();
    assert!(out.is_paused());

    out.stop();
    assert!(!out.is_paused());
    assert!(!out.is_finished());
}

#[test]
fn null_output_can_load_paused() {
    let mut out = NullOutput::default();
    out.play(Path::new("/music/a.mp3"), true).unwrap();
    assert!(out.is_paused());
}
