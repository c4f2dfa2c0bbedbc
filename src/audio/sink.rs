//! Utilities for creating `rodio` sinks from file paths.
//!
//! The helper here encapsulates opening/decoding a file and preparing a
//! paused `Sink` attached to the output mixer.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::{Decoder, OutputStream, Sink};

use crate::error::AudioError;

/// Create a paused `Sink` playing `path`.
pub(super) fn create_sink(stream: &OutputStream, path: &Path) -> Result<Sink, AudioError> {
    let file = File::open(path).map_err(|source| AudioError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let source = Decoder::new(BufReader::new(file)).map_err(|source| AudioError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let sink = Sink::connect_new(stream.mixer());
    sink.pause();
    sink.append(source);
    Ok(sink)
}
