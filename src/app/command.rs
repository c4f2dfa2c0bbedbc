use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// How Next/Prev behave at the edges of the current list.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoopMode {
    /// Clamp at the first/last track.
    #[default]
    None,
    /// Stay on the current track.
    One,
    /// Wrap around the current list.
    All,
}

impl LoopMode {
    /// `None -> All -> One -> None`.
    pub fn cycle(self) -> Self {
        match self {
            LoopMode::None => LoopMode::All,
            LoopMode::All => LoopMode::One,
            LoopMode::One => LoopMode::None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LoopMode::None => "none",
            LoopMode::One => "one",
            LoopMode::All => "all",
        }
    }
}

/// User-facing commands, independent of how the UI binds them.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Rescan,
    Search(String),
    /// Choose the track at this position of the current view.
    Select(usize),
    /// Queue the track at this position of the current view.
    Enqueue(usize),
    EnqueuePath(PathBuf),
    ClearQueue,
    Prev,
    PlayPause,
    Next,
    SetShuffle(bool),
    SetLoop(LoopMode),
}

/// What the audio output has to do after a command.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// `now` was (re)selected and should be loaded.
    NowChanged,
    /// Transport toggle; the session itself did not change.
    TogglePause,
}
