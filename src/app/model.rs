//! The playback session: library snapshot, search view, queue and the
//! now-playing pointer.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::library::{LibrarySource, Track, filter_by_query};

use super::command::{Command, Effect, LoopMode};
use super::shuffle::IndexPicker;

/// Whether the selected track can be handed to the audio output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NowStatus<'a> {
    /// Nothing selected.
    Idle,
    /// Selected, but the file is gone from disk.
    Missing(&'a Track),
    Ready(&'a Track),
}

/// Mutable, non-persisted playback context.
///
/// `current_list` is frozen by `Select`: later searches change `view` but not
/// what Prev/Next walk through.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    rows: Vec<Track>,
    query: String,
    view: Vec<Track>,
    queue: Vec<PathBuf>,
    current_list: Vec<PathBuf>,
    current_idx: usize,
    now: Option<Track>,
    shuffle: bool,
    loop_mode: LoopMode,
}

impl Session {
    /// Start a session over `rows`. A non-empty library starts on its first
    /// track.
    pub fn new(rows: Vec<Track>) -> Self {
        let mut session = Self {
            view: rows.clone(),
            rows,
            ..Self::default()
        };
        if !session.view.is_empty() {
            session.select(0);
        }
        session
    }

    pub fn rows(&self) -> &[Track] {
        &self.rows
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// `rows` filtered by the current query.
    pub fn view(&self) -> &[Track] {
        &self.view
    }

    pub fn queue(&self) -> &[PathBuf] {
        &self.queue
    }

    pub fn current_list(&self) -> &[PathBuf] {
        &self.current_list
    }

    pub fn current_idx(&self) -> usize {
        self.current_idx
    }

    pub fn now(&self) -> Option<&Track> {
        self.now.as_ref()
    }

    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    pub fn loop_mode(&self) -> LoopMode {
        self.loop_mode
    }

    pub fn is_idle(&self) -> bool {
        self.now.is_none()
    }

    /// Classify `now` for the audio output. Only `Ready` tracks may be played.
    pub fn now_status(&self) -> NowStatus<'_> {
        match &self.now {
            None => NowStatus::Idle,
            Some(track) if track.exists() => NowStatus::Ready(track),
            Some(track) => NowStatus::Missing(track),
        }
    }

    /// Look a queued or listed path up in the loaded library.
    pub fn track_by_path(&self, path: &Path) -> Option<&Track> {
        self.rows.iter().find(|t| t.path == path)
    }

    /// Apply one command.
    pub fn handle(
        &mut self,
        command: Command,
        library: &dyn LibrarySource,
        picker: &mut dyn IndexPicker,
    ) -> Effect {
        tracing::debug!(?command, "session command");
        match command {
            Command::Rescan => {
                self.rows = library.rescan();
                self.refresh_view();
                Effect::None
            }
            Command::Search(query) => {
                self.query = query;
                self.refresh_view();
                Effect::None
            }
            Command::Select(i) => {
                if self.select(i) {
                    Effect::NowChanged
                } else {
                    Effect::None
                }
            }
            Command::Enqueue(i) => {
                if let Some(track) = self.view.get(i) {
                    self.queue.push(track.path.clone());
                }
                Effect::None
            }
            Command::EnqueuePath(path) => {
                self.queue.push(path);
                Effect::None
            }
            Command::ClearQueue => {
                self.queue.clear();
                Effect::None
            }
            Command::Next => self.step(Step::Forward, picker),
            Command::Prev => self.step(Step::Back, picker),
            Command::PlayPause => Effect::TogglePause,
            Command::SetShuffle(on) => {
                self.shuffle = on;
                Effect::None
            }
            Command::SetLoop(mode) => {
                self.loop_mode = mode;
                Effect::None
            }
        }
    }

    /// Called when the loaded track played to its end.
    ///
    /// Like `Next`, except that without any looping or shuffle the last track
    /// of the list ends playback instead of restarting.
    pub fn on_track_finished(&mut self, picker: &mut dyn IndexPicker) -> Effect {
        let at_end = self.current_idx.saturating_add(1) >= self.current_list.len();
        if !self.shuffle && self.loop_mode == LoopMode::None && at_end {
            return Effect::None;
        }
        self.step(Step::Forward, picker)
    }

    fn refresh_view(&mut self) {
        self.view = filter_by_query(&self.rows, &self.query);
    }

    fn select(&mut self, i: usize) -> bool {
        let Some(track) = self.view.get(i) else {
            return false;
        };
        self.now = Some(track.clone());
        self.current_idx = i;
        self.current_list = self.view.iter().map(|t| t.path.clone()).collect();
        true
    }

    fn step(&mut self, step: Step, picker: &mut dyn IndexPicker) -> Effect {
        let len = self.current_list.len();
        if len == 0 {
            return Effect::None;
        }

        // A deserialized index may point past the list.
        let old = self.current_idx.min(len - 1);
        self.current_idx = if self.shuffle {
            picker.pick(len).min(len - 1)
        } else {
            match (self.loop_mode, step) {
                (LoopMode::One, _) => old.min(len - 1),
                (LoopMode::None, Step::Forward) => (old + 1).min(len - 1),
                (LoopMode::None, Step::Back) => old.saturating_sub(1).min(len - 1),
                (LoopMode::All, Step::Forward) => (old + 1) % len,
                (LoopMode::All, Step::Back) => (old + len - 1) % len,
            }
        };

        let replay = self.shuffle || self.loop_mode == LoopMode::One;
        let path = &self.current_list[self.current_idx];
        match self.rows.iter().find(|t| &t.path == path) {
            Some(track) => {
                self.now = Some(track.clone());
                if replay || self.current_idx != old {
                    Effect::NowChanged
                } else {
                    Effect::None
                }
            }
            None => {
                tracing::debug!(path = %path.display(), "track no longer in library");
                Effect::None
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Step {
    Forward,
    Back,
}
