use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::settings::Settings;

const SETTINGS_FILE: &str = "autowide_settings.json";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode settings: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Owns the location of the persisted settings document.
///
/// Reads never fail: a missing or unreadable file degrades to the defaults and
/// per-field merging handles partially valid content.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Settings file next to the executable, same convention as the log file.
    pub fn default_location() -> Self {
        let dir = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(dir.join(SETTINGS_FILE))
    }

    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current effective settings: stored value merged under the defaults,
    /// with legacy-shape migration applied.
    pub fn load(&self) -> Settings {
        match self.read_raw() {
            Some(raw) => Settings::from_stored(raw),
            None => Settings::default(),
        }
    }

    /// Persist the full settings object, replacing any prior value.
    pub fn save(&self, settings: &Settings) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(settings)?;
        std::fs::write(&self.path, content)?;
        tracing::info!("saved settings to {:?}", self.path);
        Ok(())
    }

    fn read_raw(&self) -> Option<serde_json::Value> {
        if !self.path.exists() {
            tracing::info!("no settings file at {:?}, using defaults", self.path);
            return None;
        }
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("could not read settings file {:?}: {}", self.path, e);
                return None;
            }
        };
        match serde_json::from_str(&content) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!("settings file {:?} is not valid JSON: {}", self.path, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> SettingsStore {
        let path = std::env::temp_dir().join(format!(
            "autowide_store_{}_{}.json",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        SettingsStore::new(path)
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let store = temp_store("missing");
        assert_eq!(store.load(), Settings::default());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let store = temp_store("round_trip");
        let mut settings = Settings::default();
        settings.show_header = true;
        settings.auto_scroll.enabled = true;
        settings.auto_scroll.offset = 420;

        store.save(&settings).unwrap();
        assert_eq!(store.load(), settings);

        let _ = std::fs::remove_file(store.path());
    }

    #[test]
    fn test_save_replaces_prior_value() {
        let store = temp_store("replace");
        let mut first = Settings::default();
        first.watch_address = true;
        store.save(&first).unwrap();

        let second = Settings::default();
        store.save(&second).unwrap();
        assert_eq!(store.load(), second);

        let _ = std::fs::remove_file(store.path());
    }

    #[test]
    fn test_load_malformed_file_returns_defaults() {
        let store = temp_store("malformed");
        std::fs::write(store.path(), "{ not json").unwrap();
        assert_eq!(store.load(), Settings::default());

        let _ = std::fs::remove_file(store.path());
    }
}
