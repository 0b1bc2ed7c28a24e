//! folio terminal entry point.
//!
//! Full-screen portfolio terminal. Type `help` for commands, PageUp/PageDown
//! scroll, Ctrl+C or Ctrl+D to quit.

mod app_state;
mod host;
mod input;
mod settings;

use std::fs::File;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use app_state::AppState;
use folio_backend_term::{Frame, TermBackend};
use folio_terminal::{InputResult, Screen, Session, Terminal};
use folio_types::config::FolioConfig;
use folio_types::profile::Profile;
use host::{ArboardClipboard, SystemLinkOpener};
use settings::FileSettingsStore;

fn main() -> Result<()> {
    init_logging();

    // Resolve config from CLI arg, FOLIO_CONFIG env var, or the config dir.
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("FOLIO_CONFIG").map(PathBuf::from))
        .or_else(|| dirs::config_dir().map(|d| d.join("folio").join("folio.toml")));
    let config = match &config_path {
        Some(path) => FolioConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => FolioConfig::default(),
    };

    let profile = match &config.profile_path {
        Some(path) => Profile::from_path(path)
            .with_context(|| format!("loading profile {}", path.display()))?,
        None => Profile::builtin()?,
    };
    log::info!("Starting folio for {}", profile.header.name);

    let settings_path = FileSettingsStore::default_path()
        .unwrap_or_else(|| PathBuf::from("folio-settings.toml"));
    let settings = FileSettingsStore::open(&settings_path)?;
    let theme = Session::restore_theme(&settings, config.default_theme);

    let mut terminal = Terminal::new(profile).with_theme(theme);
    if let Some(prompt) = &config.prompt {
        terminal = terminal.with_prompt(prompt.as_str());
    }
    let mut screen = Screen::new(config.reveal_interval_ms, config.scrollback_limit);
    terminal.welcome(&mut screen);

    let mut backend = TermBackend::new()?;
    let (_, rows) = backend.size();

    let mut state = AppState {
        terminal,
        screen,
        settings,
        clipboard: ArboardClipboard::new(),
        opener: SystemLinkOpener,
        page_rows: usize::from(rows).saturating_sub(input::CHROME_ROWS),
        config,
    };

    let frame_time = Duration::from_millis(state.config.frame_ms);
    let mut last = Instant::now();
    'running: loop {
        let events = backend.poll_events(frame_time)?;
        for event in &events {
            if input::handle_input(event, &mut state) == InputResult::Quit {
                break 'running;
            }
        }

        let now = Instant::now();
        let dt = u64::try_from(now.duration_since(last).as_millis()).unwrap_or(u64::MAX);
        last = now;
        state.screen.tick(dt);

        backend.draw(&Frame {
            title: &state.terminal.profile().meta.host_title,
            theme: state.terminal.theme(),
            screen: &state.screen,
            prompt: state.terminal.prompt(),
            input: state.terminal.input(),
        })?;
    }

    log::info!("Shutting down");
    Ok(())
}

/// Log to `folio.log` in the cache dir so output never lands on the
/// full-screen terminal. Falls back to stderr when the file can't be opened.
fn init_logging() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if let Some(file) = log_file() {
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    builder.init();
}

fn log_file() -> Option<File> {
    let dir = dirs::cache_dir()?.join("folio");
    std::fs::create_dir_all(&dir).ok()?;
    File::options()
        .create(true)
        .append(true)
        .open(dir.join("folio.log"))
        .ok()
}
