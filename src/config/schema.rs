use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/vesper/config.toml` or `~/.config/vesper/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `VESPER__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub library: LibrarySettings,
    pub playback: PlaybackSettings,
    pub ui: UiSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LibrarySettings {
    /// Directory scanned for audio files; created when missing.
    pub assets_dir: PathBuf,
    /// JSON index of the last scan.
    pub cache_path: PathBuf,
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to follow symlinks during scanning.
    pub follow_links: bool,
    /// Whether to include hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Optional cap on directory recursion depth.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
    /// Drop cached entries whose file no longer exists when loading the cache.
    pub prune_missing: bool,
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            cache_path: PathBuf::from("library.json"),
            extensions: ["mp3", "wav", "flac", "aac", "m4a", "ogg"]
                .into_iter()
                .map(String::from)
                .collect(),
            follow_links: true,
            include_hidden: true,
            recursive: true,
            max_depth: None,
            prune_missing: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PlaybackSettings {
    /// Whether shuffle starts enabled.
    pub shuffle: bool,
    /// Default loop mode.
    pub loop_mode: LoopModeSetting,
    /// Start playing as soon as a track is chosen; otherwise it loads paused.
    pub autoplay: bool,
    /// Move on to the next track when the current one ends.
    pub advance_on_finish: bool,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            shuffle: false,
            loop_mode: LoopModeSetting::None,
            autoplay: true,
            advance_on_finish: true,
        }
    }
}

#[derive(Debug, Copy, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoopModeSetting {
    #[serde(alias = "no_loop", alias = "no-loop", alias = "off")]
    None,
    #[serde(
        alias = "loopone",
        alias = "loop_one",
        alias = "loop-one",
        alias = "repeat-one"
    )]
    One,
    #[serde(
        alias = "loopall",
        alias = "loop_all",
        alias = "loop-all",
        alias = "loop-around"
    )]
    All,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// Whether the queue panel is shown next to the track list.
    pub show_queue: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ the library hums ~ ".to_string(),
            show_queue: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter directive; `RUST_LOG` takes precedence.
    pub level: String,
    /// Log file. Defaults to the XDG state directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}
