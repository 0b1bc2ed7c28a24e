//! crossterm backend for folio.
//!
//! Owns the real terminal: raw mode, the alternate screen, event polling,
//! and painting a [`Frame`] with the active theme's palette.

mod events;
mod guard;
mod layout;
mod palette;

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::cursor::{self, MoveTo};
use crossterm::event;
use crossterm::queue;
use crossterm::style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};
use unicode_width::UnicodeWidthStr;

use folio_terminal::{InputLine, Screen};
use folio_types::error::Result;
use folio_types::input::InputEvent;
use folio_types::theme::ThemeName;

pub use events::map_event;
pub use guard::TerminalGuard;
pub use layout::{Segment, input_view, visible_lines, wrap_row};
pub use palette::{Palette, Palettes, parse_hex_color};

/// Everything needed to paint one frame.
pub struct Frame<'a> {
    pub title: &'a str,
    pub theme: ThemeName,
    pub screen: &'a Screen,
    pub prompt: &'a str,
    pub input: &'a InputLine,
}

/// crossterm rendering and input backend.
pub struct TermBackend {
    out: Stdout,
    palettes: Palettes,
    cols: u16,
    rows: u16,
    // Dropped last so the terminal is restored after the final flush.
    _guard: TerminalGuard,
}

impl TermBackend {
    /// Enter raw mode on the alternate screen.
    pub fn new() -> Result<Self> {
        let palettes = Palettes::builtin()?;
        let guard = TerminalGuard::new()?;
        let (cols, rows) = terminal::size()?;
        log::info!("Terminal backend initialized ({cols}x{rows})");
        Ok(Self {
            out: io::stdout(),
            palettes,
            cols,
            rows,
            _guard: guard,
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.cols, self.rows)
    }

    /// Wait up to `timeout` for input, then drain whatever else is queued.
    pub fn poll_events(&mut self, timeout: Duration) -> Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        let mut wait = timeout;
        while event::poll(wait)? {
            if let Some(ev) = map_event(event::read()?) {
                if let InputEvent::Resize { cols, rows } = ev {
                    self.cols = cols;
                    self.rows = rows;
                }
                events.push(ev);
            }
            wait = Duration::ZERO;
        }
        Ok(events)
    }

    /// Paint a full frame: title bar, scrollback, and the prompt line.
    pub fn draw(&mut self, frame: &Frame<'_>) -> Result<()> {
        let palette = self.palettes.get(frame.theme);
        let width = usize::from(self.cols);
        let height = usize::from(self.rows);
        if width == 0 || height < 3 {
            return Ok(());
        }

        queue!(self.out, cursor::Hide, SetBackgroundColor(palette.background))?;

        // Title bar.
        let title = format!(" {} ", frame.title);
        let pad = width.saturating_sub(title.width()) / 2;
        queue!(
            self.out,
            MoveTo(0, 0),
            SetBackgroundColor(palette.accent),
            SetForegroundColor(palette.heading),
            Print(" ".repeat(pad)),
            Print(&title),
            Clear(ClearType::UntilNewLine),
            SetBackgroundColor(palette.background),
        )?;

        // Scrollback.
        let body = height - 2;
        let lines = visible_lines(frame.screen, width, body);
        for y in 0..body {
            queue!(self.out, MoveTo(0, to_u16(y + 1)))?;
            if let Some(line) = lines.get(y) {
                for (text, tone) in line {
                    queue!(self.out, SetForegroundColor(palette.tone(*tone)), Print(text))?;
                }
            }
            queue!(self.out, Clear(ClearType::UntilNewLine))?;
        }

        // Prompt line.
        let (shown, col) = input_view(frame.prompt, frame.input.text(), frame.input.cursor(), width);
        let last = to_u16(height - 1);
        queue!(
            self.out,
            MoveTo(0, last),
            SetForegroundColor(palette.prompt),
            Print(frame.prompt),
            Print(" "),
            SetForegroundColor(palette.foreground),
            Print(shown),
            Clear(ClearType::UntilNewLine),
            ResetColor,
            MoveTo(col, last),
            cursor::Show,
        )?;
        self.out.flush()?;
        Ok(())
    }
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
