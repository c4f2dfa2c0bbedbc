use std::path::PathBuf;

use crate::config;

/// Load settings, falling back to defaults when the config is unusable.
///
/// Logging is not up yet at this point, so the reason for a fallback is
/// handed back for the caller to log.
pub fn load_settings(config_path: Option<PathBuf>) -> (config::Settings, Option<String>) {
    let loaded = match config_path {
        Some(path) => config::Settings::load_from(Some(path)),
        None => config::Settings::load(),
    };

    match loaded {
        Ok(s) => match s.validate() {
            Ok(()) => (s, None),
            Err(msg) => (
                config::Settings::default(),
                Some(format!("invalid config, using defaults: {msg}")),
            ),
        },
        // Config is optional; failures should not prevent the app from starting.
        Err(e) => (
            config::Settings::default(),
            Some(format!("failed to load config, using defaults: {e}")),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_config_falls_back_to_defaults_with_a_reason() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[library]\nextensions = []\n").unwrap();

        let (settings, warning) = load_settings(Some(path));
        assert!(!settings.library.extensions.is_empty());
        assert!(warning.unwrap().contains("library.extensions"));
    }

    #[test]
    fn unparsable_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[library]\nrecursive = \"sometimes\"\n").unwrap();

        let (settings, warning) = load_settings(Some(path));
        assert!(settings.library.recursive);
        assert!(warning.is_some());
    }
}
