//! Command trait, command kinds, and the registry.

use folio_types::error::Result;
use folio_types::output::OutputLine;
use folio_types::profile::Profile;

use crate::action_commands::{CopyCmd, OpenCmd, ThemeCmd, TypeCmd};
use crate::commands::{
    CertsCmd, ClearCmd, ContactCmd, ExperienceCmd, HelpCmd, ProjectsCmd, SkillsCmd, WhoamiCmd,
};
use crate::host::{Clipboard, LinkOpener, SettingsStore};
use crate::session::Session;

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Lines to append to the display.
    Lines(Vec<OutputLine>),
    /// Signal to truncate the display surface.
    Clear,
    /// Command produced no visible output.
    None,
}

/// Everything a command may read or mutate while it runs.
pub struct Environment<'a> {
    /// The portfolio dataset.
    pub profile: &'a Profile,
    /// Theme, typing flag, and history of the calling terminal.
    pub session: &'a mut Session,
    /// Durable preference storage.
    pub settings: &'a mut dyn SettingsStore,
    pub clipboard: &'a mut dyn Clipboard,
    pub opener: &'a mut dyn LinkOpener,
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types).
    fn name(&self) -> &str;

    /// One-line description.
    fn description(&self) -> &str;

    /// Usage string without the `Usage: ` prefix (e.g. "theme light|dark|matrix").
    fn usage(&self) -> &str;

    /// Execute the command with the given arguments and environment.
    ///
    /// Errors are reported inline by the caller, never propagated further.
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput>;
}

/// The fixed set of commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Help,
    Whoami,
    Skills,
    Experience,
    Projects,
    Certs,
    Contact,
    Clear,
    Theme,
    Copy,
    Open,
    Type,
}

impl CommandKind {
    /// Every command, in registration order.
    pub const ALL: [CommandKind; 12] = [
        CommandKind::Help,
        CommandKind::Skills,
        CommandKind::Experience,
        CommandKind::Projects,
        CommandKind::Certs,
        CommandKind::Contact,
        CommandKind::Whoami,
        CommandKind::Clear,
        CommandKind::Theme,
        CommandKind::Copy,
        CommandKind::Open,
        CommandKind::Type,
    ];

    /// The handler for this command.
    pub fn handler(self) -> &'static dyn Command {
        match self {
            Self::Help => &HelpCmd,
            Self::Whoami => &WhoamiCmd,
            Self::Skills => &SkillsCmd,
            Self::Experience => &ExperienceCmd,
            Self::Projects => &ProjectsCmd,
            Self::Certs => &CertsCmd,
            Self::Contact => &ContactCmd,
            Self::Clear => &ClearCmd,
            Self::Theme => &ThemeCmd,
            Self::Copy => &CopyCmd,
            Self::Open => &OpenCmd,
            Self::Type => &TypeCmd,
        }
    }

    pub fn name(self) -> &'static str {
        self.handler().name()
    }
}

/// Registry of available commands, in registration order.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: Vec<CommandKind>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command. Registering the same kind twice is a no-op.
    pub fn register(&mut self, kind: CommandKind) {
        if !self.commands.contains(&kind) {
            self.commands.push(kind);
        }
    }

    /// Look up a command by its lowercase name.
    pub fn get(&self, name: &str) -> Option<CommandKind> {
        self.commands.iter().copied().find(|k| k.name() == name)
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.iter().map(|k| k.name())
    }

    pub fn kinds(&self) -> &[CommandKind] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
