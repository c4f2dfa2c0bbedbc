use std::path::Path;

use lofty::prelude::{Accessor, AudioFile, TaggedFileExt};

use crate::error::TagError;

/// Raw tag values as read from a file. `None` means absent or unreadable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackTags {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub duration: Option<f64>,
}

/// Read title/artist/album/duration from `path`.
///
/// Never fails: any read error yields empty tags, which `Track::from_tags`
/// turns into the filename stem, "Unknown" and `0.0`.
pub fn read_tags(path: &Path) -> TrackTags {
    match try_read_tags(path) {
        Ok(tags) => tags,
        Err(err) => {
            tracing::debug!(path = %path.display(), "tag read failed: {err}");
            TrackTags::default()
        }
    }
}

pub(crate) fn try_read_tags(path: &Path) -> Result<TrackTags, TagError> {
    let tagged = lofty::read_from_path(path)?;

    let mut tags = TrackTags {
        duration: Some(tagged.properties().duration().as_secs_f64()),
        ..TrackTags::default()
    };

    if let Some(tag) = tagged.primary_tag().or_else(|| tagged.first_tag()) {
        tags.title = tag.title().map(|v| v.trim().to_string());
        tags.artist = tag.artist().map(|v| v.trim().to_string());
        tags.album = tag.album().map(|v| v.trim().to_string());
    }

    Ok(tags)
}
