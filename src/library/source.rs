use std::path::PathBuf;

use crate::config::LibrarySettings;

use super::cache::{ensure_assets_dir, load_index, save_index};
use super::model::Track;
use super::scan::scan;

/// Where the session gets a fresh index from on rescan.
pub trait LibrarySource {
    /// Scan from scratch, persist the result and return it.
    fn rescan(&self) -> Vec<Track>;
}

/// The assets directory plus its JSON cache on the local filesystem.
#[derive(Debug, Clone)]
pub struct DiskLibrary {
    pub assets_dir: PathBuf,
    pub cache_path: PathBuf,
    pub settings: LibrarySettings,
}

impl DiskLibrary {
    pub fn new(settings: LibrarySettings) -> Self {
        Self {
            assets_dir: settings.assets_dir.clone(),
            cache_path: settings.cache_path.clone(),
            settings,
        }
    }

    /// Create the assets directory and load the index, from cache when possible.
    pub fn load(&self) -> Vec<Track> {
        ensure_assets_dir(&self.assets_dir);
        load_index(&self.cache_path, &self.assets_dir, &self.settings)
    }
}

impl LibrarySource for DiskLibrary {
    fn rescan(&self) -> Vec<Track> {
        ensure_assets_dir(&self.assets_dir);
        let rows = scan(&self.assets_dir, &self.settings);
        save_index(&self.cache_path, &rows);
        rows
    }
}
