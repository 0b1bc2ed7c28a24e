//! Platform-agnostic input event types.
//!
//! Every backend maps its native key events to these enums. The terminal
//! never sees raw platform input.

/// A platform-agnostic input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Printable character typed.
    TextInput(char),
    /// A named editing or navigation key.
    Key(Key),
    /// A key pressed with the control modifier (lowercased letter).
    Ctrl(char),
    /// The display was resized.
    Resize { cols: u16, rows: u16 },
    /// User requested quit (window close, etc.).
    Quit,
}

/// Named keys the terminal reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Enter,
    Tab,
    Backspace,
    Delete,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Escape,
}
