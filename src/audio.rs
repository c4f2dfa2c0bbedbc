//! Audio output: the opaque "given a path, play it" capability.
//!
//! The session never talks to `rodio` directly; the runtime drives an
//! `AudioOutput` implementation after every state change.

mod null;
mod player;
mod sink;
mod types;

pub use null::NullOutput;
pub use player::RodioOutput;
pub use types::AudioOutput;

#[cfg(test)]
pub(crate) use types::testing;

#[cfg(test)]
mod tests;
