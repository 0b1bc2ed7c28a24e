//! Command interpreter and terminal subsystem.
//!
//! The terminal is a registry-based dispatch system over a fixed set of
//! command kinds. Submitted lines are echoed, recorded in history, passed
//! through the alias table, and dispatched to a handler. Handlers return
//! abstract output; a `RenderSink` decides how it is shown.

mod action_commands;
mod alias;
mod commands;
mod completion;
mod history;
mod host;
mod interpreter;
mod line;
mod screen;
mod session;
mod sink;
mod terminal;

#[cfg(test)]
mod test_utils;

/// Fixed alias literals and the resolver over them.
pub use alias::{ALIASES, AliasTable};
/// Register all built-in commands into a registry.
pub use commands::register_builtins;
/// Tab completion over command names and alias keys.
pub use completion::{Completion, complete};
/// Submitted lines with a recall cursor.
pub use history::History;
/// Host capabilities the interpreter calls into.
pub use host::{Clipboard, Host, LinkOpener, MemorySettings, SettingsStore, THEME_KEY};
/// A single executable command trait.
pub use interpreter::Command;
/// The fixed set of command kinds.
pub use interpreter::CommandKind;
/// Output produced by a command (lines or signals).
pub use interpreter::CommandOutput;
/// Registry of available commands.
pub use interpreter::CommandRegistry;
/// Mutable environment passed to every command.
pub use interpreter::Environment;
/// Editable prompt line.
pub use line::InputLine;
/// Scrollback buffer with reveal tasks.
pub use screen::{Row, Screen, Span, Tone};
/// Per-terminal state.
pub use session::Session;
/// Display surface accepting abstract output.
pub use sink::RenderSink;
/// Dispatcher and key handling.
pub use terminal::{InputResult, Terminal};
