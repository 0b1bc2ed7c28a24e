//! Settings persisted as a flat TOML table in the user config directory.

use std::collections::BTreeMap;
use std::path::PathBuf;

use folio_terminal::SettingsStore;
use folio_types::error::{FolioError, Result};

/// Durable key/value store backed by a TOML file.
///
/// The file is read once on open and rewritten on every `set`.
#[derive(Debug)]
pub struct FileSettingsStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileSettingsStore {
    /// Open `path`, starting empty when the file does not exist.
    ///
    /// A file that does not parse as a flat string table is ignored with a
    /// warning and rewritten on the next `set`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let values = if path.is_file() {
            let src = std::fs::read_to_string(&path)?;
            toml::from_str(&src).unwrap_or_else(|e| {
                log::warn!("Ignoring unreadable settings {}: {e}", path.display());
                BTreeMap::new()
            })
        } else {
            BTreeMap::new()
        };
        log::debug!("Settings store at {} ({} keys)", path.display(), values.len());
        Ok(Self { path, values })
    }

    /// `<config dir>/folio/settings.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("folio").join("settings.toml"))
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let src = toml::to_string(&self.values)?;
        std::fs::write(&self.path, src)?;
        Ok(())
    }
}

impl SettingsStore for FileSettingsStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.save().map_err(|e| {
            FolioError::Settings(format!("cannot write {}: {e}", self.path.display()))
        })
    }
}
