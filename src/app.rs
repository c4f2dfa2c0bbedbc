//! Application module: the playback session and its commands.
//!
//! `Session` holds the loaded library, the search view, the queue and the
//! navigation context. Commands mutate it in place and report an `Effect`
//! telling the runtime what the audio output should do.

mod command;
mod model;
mod shuffle;
mod view;

pub use command::{Command, Effect, LoopMode};
pub use model::{NowStatus, Session};
pub use shuffle::{IndexPicker, ThreadPicker};
pub use view::ViewState;
