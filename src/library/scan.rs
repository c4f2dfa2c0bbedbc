use std::path::Path;

use walkdir::WalkDir;

use crate::config::LibrarySettings;

use super::model::Track;
use super::tags::read_tags;

fn normalized_extensions(settings: &LibrarySettings) -> Vec<String> {
    settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect()
}

fn has_allowed_extension(path: &Path, exts: &[String]) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Walk `dir` and build a track for every file with an allowed extension.
///
/// Files whose tags cannot be read are still listed, with default metadata.
/// Entries the walker cannot access are skipped.
pub fn scan(dir: &Path, settings: &LibrarySettings) -> Vec<Track> {
    let exts = normalized_extensions(settings);
    let mut tracks: Vec<Track> = Vec::new();

    let mut walker = WalkDir::new(dir)
        .follow_links(settings.follow_links)
        .sort_by_file_name();

    // Non-recursive = only the root directory.
    let depth_cap = if settings.recursive {
        settings.max_depth
    } else {
        Some(1)
    };
    if let Some(d) = depth_cap {
        walker = walker.max_depth(d);
    }

    for entry in walker
        .into_iter()
        .filter_entry(|e| settings.include_hidden || e.depth() == 0 || !is_hidden(e.path()))
    {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!("skipping unreadable entry: {err}");
                continue;
            }
        };

        let path = entry.path();
        if path.is_file() && has_allowed_extension(path, &exts) {
            tracks.push(Track::from_tags(path, read_tags(path)));
        }
    }

    tracing::info!(dir = %dir.display(), count = tracks.len(), "library scanned");
    tracks
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn settings_with(exts: &[&str]) -> LibrarySettings {
        LibrarySettings {
            extensions: exts.iter().map(|e| e.to_string()).collect(),
            ..LibrarySettings::default()
        }
    }

    #[test]
    fn allowed_extension_is_case_insensitive_and_ignores_dots() {
        let exts = normalized_extensions(&settings_with(&[".MP3", " flac ", ""]));
        assert_eq!(exts, vec!["mp3".to_string(), "flac".to_string()]);

        assert!(has_allowed_extension(Path::new("/tmp/a.mp3"), &exts));
        assert!(has_allowed_extension(Path::new("/tmp/a.Mp3"), &exts));
        assert!(has_allowed_extension(Path::new("/tmp/a.FLAC"), &exts));
        assert!(!has_allowed_extension(Path::new("/tmp/a.wav"), &exts));
        assert!(!has_allowed_extension(Path::new("/tmp/a"), &exts));
    }

    #[test]
    fn default_extensions_cover_common_formats() {
        let exts = normalized_extensions(&LibrarySettings::default());
        for ext in ["mp3", "wav", "flac", "aac", "m4a", "ogg"] {
            assert!(exts.iter().any(|e| e == ext), "missing {ext}");
        }
    }

    #[test]
    fn scan_keeps_unreadable_audio_with_default_metadata() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("Broken Song.MP3"), b"not a real mp3").unwrap();
        fs::write(dir.path().join("notes.txt"), b"ignore me").unwrap();

        let tracks = scan(dir.path(), &LibrarySettings::default());
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].title, "Broken Song");
        assert_eq!(tracks[0].artist, "Unknown");
        assert_eq!(tracks[0].album, "Unknown");
        assert_eq!(tracks[0].path, dir.path().join("Broken Song.MP3"));
    }

    #[test]
    fn scan_recurses_into_subdirectories() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("album");
        fs::create_dir_all(&sub).unwrap();
        fs::write(dir.path().join("root.ogg"), b"x").unwrap();
        fs::write(sub.join("child.wav"), b"x").unwrap();

        let tracks = scan(dir.path(), &LibrarySettings::default());
        let titles: Vec<&str> = tracks.iter().map(|t| t.title.as_str()).collect();
        assert!(titles.contains(&"root"));
        assert!(titles.contains(&"child"));
    }

    #[test]
    fn scan_respects_recursive_false() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir_all(&sub).unwrap();
        fs::write(dir.path().join("root.mp3"), b"x").unwrap();
        fs::write(sub.join("child.mp3"), b"x").unwrap();

        let settings = LibrarySettings {
            recursive: false,
            ..LibrarySettings::default()
        };
        let tracks = scan(dir.path(), &settings);
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].title, "root");
    }

    #[test]
    fn scan_respects_include_hidden_false() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".hidden.mp3"), b"x").unwrap();
        fs::write(dir.path().join("visible.mp3"), b"x").unwrap();

        let settings = LibrarySettings {
            include_hidden: false,
            ..LibrarySettings::default()
        };
        let tracks = scan(dir.path(), &settings);
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0].title, "visible");
    }

    #[test]
    fn scan_of_missing_directory_is_empty() {
        let dir = tempdir().unwrap();
        let tracks = scan(&dir.path().join("nope"), &LibrarySettings::default());
        assert!(tracks.is_empty());
    }
}
