use folio_terminal::InputResult;
use folio_types::input::{InputEvent, Key};

use crate::app_state::AppState;

/// Rows of chrome around the scrollback: title bar and prompt line.
pub const CHROME_ROWS: usize = 2;

/// Route one event to the terminal, handling what it ignores.
pub fn handle_input(event: &InputEvent, state: &mut AppState) -> InputResult {
    let (terminal, screen, mut host) = state.parts();
    let result = terminal.handle_input(event, &mut host, screen);
    if result != InputResult::Ignored {
        return result;
    }

    let page = state.page_rows.max(1);
    match event {
        InputEvent::Key(Key::PageUp) => state.screen.scroll_up(page),
        InputEvent::Key(Key::PageDown) => state.screen.scroll_down(page),
        InputEvent::Resize { rows, .. } => {
            state.page_rows = usize::from(*rows).saturating_sub(CHROME_ROWS);
            log::debug!("Resized, {} scrollback rows", state.page_rows);
        },
        _ => {},
    }
    InputResult::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_terminal::{Screen, Terminal};
    use folio_types::config::FolioConfig;
    use folio_types::profile::Profile;

    use crate::host::{ArboardClipboard, SystemLinkOpener};
    use crate::settings::FileSettingsStore;

    fn state(dir: &tempfile::TempDir) -> AppState {
        let config = FolioConfig::default();
        AppState {
            terminal: Terminal::new(Profile::builtin().unwrap()),
            screen: Screen::new(config.reveal_interval_ms, config.scrollback_limit),
            settings: FileSettingsStore::open(dir.path().join("settings.toml")).unwrap(),
            clipboard: ArboardClipboard::new(),
            opener: SystemLinkOpener,
            page_rows: 2,
            config,
        }
    }

    fn submit(state: &mut AppState, line: &str) {
        for ch in line.chars() {
            handle_input(&InputEvent::TextInput(ch), state);
        }
        handle_input(&InputEvent::Key(Key::Enter), state);
    }

    #[test]
    fn page_keys_scroll_the_screen() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = state(&dir);
        submit(&mut s, "help");
        assert_eq!(
            handle_input(&InputEvent::Key(Key::PageUp), &mut s),
            InputResult::Continue
        );
        assert_eq!(s.screen.scroll_offset(), 2);
        handle_input(&InputEvent::Key(Key::PageDown), &mut s);
        assert_eq!(s.screen.scroll_offset(), 0);
    }

    #[test]
    fn resize_updates_page_size() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = state(&dir);
        handle_input(&InputEvent::Resize { cols: 80, rows: 30 }, &mut s);
        assert_eq!(s.page_rows, 28);
    }

    #[test]
    fn theme_change_reaches_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = state(&dir);
        submit(&mut s, "theme light");
        let src = std::fs::read_to_string(dir.path().join("settings.toml")).unwrap();
        assert!(src.contains("light"));
    }

    #[test]
    fn ctrl_c_quits() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = state(&dir);
        assert_eq!(handle_input(&InputEvent::Ctrl('c'), &mut s), InputResult::Quit);
    }
}
