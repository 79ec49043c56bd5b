//! File-backed setting store.
//!
//! Settings live in a small toml file next to the main config
//! (default: `~/.config/msgboard/settings.toml`). Read once at open;
//! every `set` writes the file back. I/O failures are swallowed per the
//! [`SettingStore`](super::SettingStore) contract.

use super::SettingStore;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

pub struct FileSettingStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileSettingStore {
    pub fn open(path: PathBuf) -> Self {
        let values = fs::read_to_string(&path)
            .ok()
            .and_then(|contents| toml::from_str(&contents).ok())
            .unwrap_or_default();
        Self { path, values }
    }

    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("msgboard")
            .join("settings.toml")
    }

    fn flush(&self) {
        if let Some(parent) = self.path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        if let Ok(contents) = toml::to_string_pretty(&self.values) {
            if let Err(e) = fs::write(&self.path, contents) {
                tracing::warn!(path = %self.path.display(), "failed to write settings: {e}");
            }
        }
    }
}

impl SettingStore for FileSettingStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        self.flush();
    }
}
