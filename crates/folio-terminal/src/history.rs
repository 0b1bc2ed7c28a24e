//! Command history with a recall cursor.

/// Previously submitted command lines, oldest first.
///
/// The cursor ranges over `[0, len]`. `len` is the fresh-line state, where
/// the presented value is the empty string. Entries are never deduplicated
/// or evicted.
#[derive(Debug, Default, Clone)]
pub struct History {
    entries: Vec<String>,
    cursor: usize,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line. Does not move the cursor.
    pub fn push(&mut self, line: &str) {
        self.entries.push(line.to_string());
    }

    /// Move the cursor by `delta` and return the value to present.
    ///
    /// A move that would leave `[0, len]` is ignored and returns `None`.
    pub fn recall(&mut self, delta: isize) -> Option<&str> {
        let target = self.cursor.checked_add_signed(delta)?;
        if target > self.entries.len() {
            return None;
        }
        self.cursor = target;
        Some(self.entries.get(target).map_or("", String::as_str))
    }

    /// Put the cursor back on the fresh line.
    pub fn reset(&mut self) {
        self.cursor = self.entries.len();
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
