use folio_terminal::{Host, Screen, Terminal};
use folio_types::config::FolioConfig;

use crate::host::{ArboardClipboard, SystemLinkOpener};
use crate::settings::FileSettingsStore;

/// All mutable application state except `backend`, which stays a separate
/// local in main() so it can be borrowed alongside this.
pub struct AppState {
    pub config: FolioConfig,
    pub terminal: Terminal,
    pub screen: Screen,
    pub settings: FileSettingsStore,
    pub clipboard: ArboardClipboard,
    pub opener: SystemLinkOpener,
    /// Scrollback rows visible at once, used as the page size.
    pub page_rows: usize,
}

impl AppState {
    /// Split into the terminal, its sink, and the host capabilities.
    pub fn parts(&mut self) -> (&mut Terminal, &mut Screen, Host<'_>) {
        let host = Host {
            settings: &mut self.settings,
            clipboard: &mut self.clipboard,
            opener: &mut self.opener,
        };
        (&mut self.terminal, &mut self.screen, host)
    }
}
