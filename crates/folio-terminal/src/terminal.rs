//! The terminal: dispatcher plus key handling over one session.

use folio_types::error::FolioError;
use folio_types::input::{InputEvent, Key};
use folio_types::output::{OutputLine, Reveal};
use folio_types::profile::Profile;
use folio_types::theme::ThemeName;

use crate::alias::AliasTable;
use crate::commands::register_builtins;
use crate::completion::{Completion, complete};
use crate::host::Host;
use crate::interpreter::{CommandOutput, CommandRegistry, Environment};
use crate::line::InputLine;
use crate::session::Session;
use crate::sink::RenderSink;

/// What the front end should do after an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Event consumed.
    Continue,
    /// Event not meant for the terminal (scrolling, resize).
    Ignored,
    /// The user asked to leave.
    Quit,
}

/// A single terminal instance.
pub struct Terminal {
    registry: CommandRegistry,
    aliases: AliasTable,
    profile: Profile,
    session: Session,
    input: InputLine,
}

impl Terminal {
    /// Terminal with all built-in commands, using the profile's prompt.
    pub fn new(profile: Profile) -> Self {
        let mut registry = CommandRegistry::new();
        register_builtins(&mut registry);
        let session = Session::new(profile.meta.prompt.as_str(), ThemeName::default());
        Self {
            registry,
            aliases: AliasTable::default(),
            profile,
            session,
            input: InputLine::new(),
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        let theme = self.session.theme();
        self.session = Session::new(prompt, theme);
        self
    }

    pub fn with_theme(mut self, theme: ThemeName) -> Self {
        self.session = Session::new(self.session.prompt().to_string(), theme);
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn input(&self) -> &InputLine {
        &self.input
    }

    pub fn prompt(&self) -> &str {
        self.session.prompt()
    }

    pub fn theme(&self) -> ThemeName {
        self.session.theme()
    }

    /// Render the startup banner.
    pub fn welcome(&self, sink: &mut dyn RenderSink) {
        sink.append_lines(
            vec![
                OutputLine::info(format!(
                    "Welcome to {}'s terminal portfolio.",
                    self.profile.header.name
                )),
                OutputLine::muted(format!(
                    "Type \"help\" to explore, or \"theme {}\".",
                    ThemeName::choices()
                )),
            ],
            Reveal::Instant,
        );
    }

    /// Run one submitted line.
    pub fn execute(&mut self, raw: &str, host: &mut Host<'_>, sink: &mut dyn RenderSink) {
        let line = raw.trim();
        if line.is_empty() {
            self.session.history.reset();
            return;
        }

        sink.append_lines(
            vec![OutputLine::Echo {
                prompt: self.session.prompt().to_string(),
                text: line.to_string(),
            }],
            Reveal::Instant,
        );
        self.session.history.push(line);

        let resolved = self.aliases.resolve(line);
        let mut parts = resolved.split_whitespace();
        let name = parts.next().unwrap_or_default().to_lowercase();
        let args: Vec<&str> = parts.collect();

        let result = match self.registry.get(&name) {
            Some(kind) => {
                log::debug!("Dispatching {name} {args:?}");
                let mut env = Environment {
                    profile: &self.profile,
                    session: &mut self.session,
                    settings: &mut *host.settings,
                    clipboard: &mut *host.clipboard,
                    opener: &mut *host.opener,
                };
                kind.handler().execute(&args, &mut env)
            },
            None => Err(FolioError::UnknownCommand(name)),
        };

        match result {
            Ok(CommandOutput::Lines(lines)) => sink.append_lines(lines, self.session.reveal()),
            Ok(CommandOutput::Clear) => sink.clear(),
            Ok(CommandOutput::None) => {},
            Err(e) => {
                log::debug!("Command failed: {e}");
                sink.append_lines(
                    vec![OutputLine::text(e.to_string(), e.style())],
                    self.session.reveal(),
                );
            },
        }

        self.session.history.reset();
    }

    /// Move through history and load the recalled entry into the input line.
    pub fn recall(&mut self, delta: isize) {
        if let Some(text) = self.session.history.recall(delta) {
            let text = text.to_string();
            self.input.set(text);
        }
    }

    /// Tab completion of the current input.
    pub fn complete(&mut self, sink: &mut dyn RenderSink) {
        let partial = self.input.text().trim();
        match complete(&self.registry, &self.aliases, partial) {
            Completion::Single(name) => self.input.set(format!("{name} ")),
            Completion::Multiple(names) => {
                let listing = vec![OutputLine::muted(names.join("  "))];
                sink.append_lines(listing, self.session.reveal());
            },
            Completion::None => {},
        }
    }

    /// Apply one input event.
    pub fn handle_input(
        &mut self,
        event: &InputEvent,
        host: &mut Host<'_>,
        sink: &mut dyn RenderSink,
    ) -> InputResult {
        match event {
            InputEvent::Quit => return InputResult::Quit,
            InputEvent::Ctrl('c' | 'd') => return InputResult::Quit,
            InputEvent::Ctrl('l') => sink.clear(),
            InputEvent::Ctrl('a') => self.input.home(),
            InputEvent::Ctrl('e') => self.input.end(),
            InputEvent::Ctrl(_) => {},
            InputEvent::TextInput(ch) => self.input.insert(*ch),
            InputEvent::Key(key) => match key {
                Key::Enter => {
                    let line = self.input.take();
                    self.execute(&line, host, sink);
                },
                Key::Tab => self.complete(sink),
                Key::Up => self.recall(-1),
                Key::Down => self.recall(1),
                Key::Backspace => self.input.backspace(),
                Key::Delete => self.input.delete(),
                Key::Left => self.input.move_left(),
                Key::Right => self.input.move_right(),
                Key::Home => self.input.home(),
                Key::End => self.input.end(),
                Key::PageUp | Key::PageDown | Key::Escape => return InputResult::Ignored,
            },
            InputEvent::Resize { .. } => return InputResult::Ignored,
        }
        InputResult::Continue
    }
}
