use std::fs;
use std::path::Path;

use crate::config::LibrarySettings;
use crate::error::CacheError;

use super::model::Track;
use super::scan::scan;

/// Load the library index from `cache_path`, falling back to a fresh scan of
/// `dir` (which is then persisted) when the cache is absent or unusable.
///
/// Never fails; the worst case is an empty index.
pub fn load_index(cache_path: &Path, dir: &Path, settings: &LibrarySettings) -> Vec<Track> {
    match try_load_cache(cache_path) {
        Ok(rows) if settings.prune_missing => {
            let total = rows.len();
            let rows: Vec<Track> = rows.into_iter().filter(Track::exists).collect();
            if rows.len() != total {
                tracing::info!(dropped = total - rows.len(), "pruned missing files from cache");
            }
            rows
        }
        Ok(rows) => rows,
        Err(err) => {
            if cache_path.exists() {
                tracing::warn!("rebuilding library index: {err}");
            } else {
                tracing::info!(cache = %cache_path.display(), "no library cache, scanning");
            }
            let rows = scan(dir, settings);
            save_index(cache_path, &rows);
            rows
        }
    }
}

/// Read and parse the cache file.
pub fn try_load_cache(cache_path: &Path) -> Result<Vec<Track>, CacheError> {
    let text = fs::read_to_string(cache_path).map_err(|source| CacheError::Io {
        path: cache_path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CacheError::Json {
        path: cache_path.to_path_buf(),
        source,
    })
}

/// Persist `rows` to `cache_path`. Failures are logged and otherwise ignored.
pub fn save_index(cache_path: &Path, rows: &[Track]) {
    if let Err(err) = try_save_index(cache_path, rows) {
        tracing::warn!("failed to write library cache: {err}");
    }
}

/// Persist `rows` as pretty-printed JSON, creating parent directories.
pub fn try_save_index(cache_path: &Path, rows: &[Track]) -> Result<(), CacheError> {
    let io_err = |source: std::io::Error| CacheError::Io {
        path: cache_path.to_path_buf(),
        source,
    };

    if let Some(parent) = cache_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let json = serde_json::to_string_pretty(rows).map_err(|source| CacheError::Json {
        path: cache_path.to_path_buf(),
        source,
    })?;
    fs::write(cache_path, json).map_err(io_err)
}

/// Create the assets directory if it does not exist yet.
pub fn ensure_assets_dir(dir: &Path) {
    if dir.is_dir() {
        return;
    }
    match fs::create_dir_all(dir) {
        Ok(()) => tracing::info!(dir = %dir.display(), "created assets directory"),
        Err(err) => tracing::warn!(dir = %dir.display(), "cannot create assets directory: {err}"),
    }
}
