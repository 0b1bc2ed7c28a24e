//! Host capabilities the interpreter calls into.
//!
//! The terminal never talks to the platform directly. The front end hands it
//! a [`Host`] bundling a settings store, a clipboard, and a link opener.

use std::collections::HashMap;

use folio_types::error::Result;

/// Settings key under which the active theme is persisted.
pub const THEME_KEY: &str = "portfolio-theme";

/// Durable key/value storage for user preferences.
pub trait SettingsStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// System clipboard.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// Opens a URL in the user's browser.
pub trait LinkOpener {
    fn open(&mut self, url: &str) -> Result<()>;
}

/// Host capabilities borrowed for the duration of one input event.
pub struct Host<'a> {
    pub settings: &'a mut dyn SettingsStore,
    pub clipboard: &'a mut dyn Clipboard,
    pub opener: &'a mut dyn LinkOpener,
}

/// Settings store that lives only as long as the process.
#[derive(Debug, Default, Clone)]
pub struct MemorySettings {
    values: HashMap<String, String>,
}

impl MemorySettings {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettings {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
