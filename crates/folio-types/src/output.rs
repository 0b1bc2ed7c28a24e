//! Abstract output produced by commands.
//!
//! Commands never touch the display. They return [`OutputLine`] values and a
//! render sink decides how each one is presented.

/// Semantic style tag for a line of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineStyle {
    #[default]
    Plain,
    Info,
    Ok,
    Warn,
    Error,
    Muted,
}

/// A labelled hyperlink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub href: String,
}

impl Link {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// One element of a pre-built content block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockItem {
    /// Highlighted sub-heading (skill group, job title, project name).
    Heading(String),
    /// A styled line of text.
    Text { text: String, style: LineStyle },
    /// Bulleted list.
    Bullets(Vec<String>),
    /// Inline badge group (e.g. skills).
    Badges(Vec<String>),
    /// Inline link group.
    Links(Vec<Link>),
    /// Empty separator line.
    Spacer,
}

/// An opaque group of content rendered as a unit.
///
/// Blocks are always written instantly, even when the typing effect is on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block {
    pub items: Vec<BlockItem>,
}

impl Block {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style push.
    pub fn with(mut self, item: BlockItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn push(&mut self, item: BlockItem) {
        self.items.push(item);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A unit of rendered content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputLine {
    /// Plain text with a style tag.
    Text { text: String, style: LineStyle },
    /// The echoed user input, prefixed by the prompt label.
    Echo { prompt: String, text: String },
    /// A pre-built content block.
    Block(Block),
}

impl OutputLine {
    pub fn text(text: impl Into<String>, style: LineStyle) -> Self {
        Self::Text {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::text(text, LineStyle::Plain)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::text(text, LineStyle::Info)
    }

    pub fn ok(text: impl Into<String>) -> Self {
        Self::text(text, LineStyle::Ok)
    }

    pub fn warn(text: impl Into<String>) -> Self {
        Self::text(text, LineStyle::Warn)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::text(text, LineStyle::Error)
    }

    pub fn muted(text: impl Into<String>) -> Self {
        Self::text(text, LineStyle::Muted)
    }

    /// The text of a `Text` line, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text, .. } => Some(text),
            _ => None,
        }
    }

    /// The style of a `Text` line, if any.
    pub fn style(&self) -> Option<LineStyle> {
        match self {
            Self::Text { style, .. } => Some(*style),
            _ => None,
        }
    }
}

/// How new text lines should appear on the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reveal {
    /// Written in full immediately.
    #[default]
    Instant,
    /// Grown character by character.
    Progressive,
}
