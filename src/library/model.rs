use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

use super::tags::TrackTags;

/// Placeholder used for missing artist/album tags.
pub const UNKNOWN: &str = "Unknown";

/// One playable audio file in the library index.
///
/// The `path` is the identity key: two tracks are the same track iff their
/// paths are equal. All other fields always carry a value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub album: String,
    /// Length in seconds, `0.0` when unknown.
    pub duration: f64,
    pub path: PathBuf,
}

impl Track {
    /// Build a track from possibly incomplete tags, filling every gap with
    /// its default.
    pub fn from_tags(path: impl Into<PathBuf>, tags: TrackTags) -> Self {
        let path = path.into();
        let title = non_blank(tags.title).unwrap_or_else(|| file_stem(&path));
        Self {
            title,
            artist: non_blank(tags.artist).unwrap_or_else(|| UNKNOWN.to_string()),
            album: non_blank(tags.album).unwrap_or_else(|| UNKNOWN.to_string()),
            duration: tags
                .duration
                .filter(|d| d.is_finite() && *d >= 0.0)
                .unwrap_or(0.0),
            path,
        }
    }

    /// Whether the file behind this track is still present on disk.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Cache entries may lack any key but `path`; missing keys are defaulted the
/// same way a failed tag read would be.
#[derive(Deserialize)]
struct CachedTrack {
    title: Option<String>,
    artist: Option<String>,
    album: Option<String>,
    duration: Option<f64>,
    path: PathBuf,
}

impl<'de> Deserialize<'de> for Track {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let cached = CachedTrack::deserialize(deserializer)?;
        let tags = TrackTags {
            title: cached.title,
            artist: cached.artist,
            album: cached.album,
            duration: cached.duration,
        };
        Ok(Track::from_tags(cached.path, tags))
    }
}
