use std::fs;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::{LoggingSettings, default_log_path};

/// Route `tracing` output to the log file; the terminal belongs to the UI.
///
/// Returns the writer guard, which must live until shutdown so buffered
/// lines are flushed. `None` means logging stays off.
pub fn init(settings: &LoggingSettings) -> Option<WorkerGuard> {
    let path = settings.file.clone().or_else(default_log_path)?;
    let (dir, file_name) = split_log_path(&path)?;
    fs::create_dir_all(&dir).ok()?;

    let appender = tracing_appender::rolling::never(&dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .ok()?;

    Some(guard)
}

fn split_log_path(path: &Path) -> Option<(PathBuf, &std::ffi::OsStr)> {
    let file_name = path.file_name()?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Some((dir, file_name))
}
