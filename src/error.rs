//! Error types for the fallible steps behind the best-effort public API.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Reading tags from an audio file failed.
#[derive(Debug, Error)]
pub enum TagError {
    #[error(transparent)]
    Lofty(#[from] lofty::error::LoftyError),
}

/// Reading or writing the library cache failed.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache file {path:?} is unavailable: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cache file {path:?} is malformed: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The audio output could not start or play a track.
#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no audio output device: {0}")]
    Device(#[from] rodio::StreamError),
    #[error("failed to open {path:?}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to decode {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },
}
