//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Settings;

/// vesper - browse and play the music in a local folder
#[derive(Parser, Debug, Default)]
#[command(name = "vesper", version, about)]
pub struct Args {
    /// Directory to scan for audio files (overrides `library.assets_dir`)
    pub dir: Option<PathBuf>,

    /// Library index file (overrides `library.cache_path`)
    #[arg(long)]
    pub cache: Option<PathBuf>,

    /// Config file (overrides `VESPER_CONFIG_PATH`)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Add a file to the play queue at startup (repeatable)
    #[arg(long = "enqueue", value_name = "PATH")]
    pub enqueue: Vec<PathBuf>,

    /// Ignore the cached index and scan at startup
    #[arg(long)]
    pub rescan: bool,

    /// Print the effective settings as TOML and exit
    #[arg(long)]
    pub print_config: bool,
}

impl Args {
    /// Layer command-line overrides on top of loaded settings.
    pub fn apply(&self, settings: &mut Settings) {
        if let Some(dir) = &self.dir {
            settings.library.assets_dir = dir.clone();
        }
        if let Some(cache) = &self.cache {
            settings.library.cache_path = cache.clone();
        }
    }
}
