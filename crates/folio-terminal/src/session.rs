//! Per-terminal interpreter state.

use folio_types::output::Reveal;
use folio_types::theme::ThemeName;

use crate::history::History;
use crate::host::{SettingsStore, THEME_KEY};

/// Mutable state of one terminal instance.
///
/// Nothing here is global, so several terminals can run side by side.
#[derive(Debug, Clone)]
pub struct Session {
    pub(crate) history: History,
    prompt: String,
    theme: ThemeName,
    typing: bool,
}

impl Session {
    pub fn new(prompt: impl Into<String>, theme: ThemeName) -> Self {
        Self {
            history: History::new(),
            prompt: prompt.into(),
            theme,
            typing: false,
        }
    }

    /// Read the persisted theme, falling back to `default` when nothing valid
    /// is stored.
    pub fn restore_theme(settings: &dyn SettingsStore, default: ThemeName) -> ThemeName {
        match settings.get(THEME_KEY) {
            Some(stored) => stored.parse().unwrap_or_else(|_| {
                log::warn!("Ignoring unknown stored theme '{stored}'");
                default
            }),
            None => default,
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn theme(&self) -> ThemeName {
        self.theme
    }

    /// Switch theme and persist the choice.
    ///
    /// A persistence failure is logged; the in-memory theme still changes.
    pub fn apply_theme(&mut self, theme: ThemeName, settings: &mut dyn SettingsStore) {
        self.theme = theme;
        if let Err(e) = settings.set(THEME_KEY, theme.as_str()) {
            log::warn!("Failed to persist theme '{theme}': {e}");
        }
        log::info!("Theme set to {theme}");
    }

    pub fn typing(&self) -> bool {
        self.typing
    }

    pub fn set_typing(&mut self, enabled: bool) {
        self.typing = enabled;
    }

    /// Reveal mode for newly appended text.
    pub fn reveal(&self) -> Reveal {
        if self.typing {
            Reveal::Progressive
        } else {
            Reveal::Instant
        }
    }
}
