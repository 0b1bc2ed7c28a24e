//! Scrollback buffer that renders abstract output into styled rows.
//!
//! [`Screen`] is the standard [`RenderSink`]. Progressive text lines are
//! revealed by per-row tasks that advance on [`Screen::tick`]; clearing the
//! screen drops every task along with the rows.

use std::collections::VecDeque;

use folio_types::output::{Block, BlockItem, LineStyle, OutputLine, Reveal};

use crate::sink::RenderSink;

/// Visual role of a span; the backend maps it to a theme color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Text(LineStyle),
    Prompt,
    Heading,
    Link,
    Badge,
    Bullet,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
}

impl Span {
    fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

/// One display row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    id: u64,
    pub spans: Vec<Span>,
}

impl Row {
    /// Concatenated text of all spans.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// A row being revealed one character per interval.
#[derive(Debug)]
struct RevealTask {
    row_id: u64,
    remaining: std::vec::IntoIter<char>,
}

#[derive(Debug)]
pub struct Screen {
    rows: VecDeque<Row>,
    next_id: u64,
    tasks: Vec<RevealTask>,
    interval_ms: u64,
    elapsed_ms: u64,
    scrollback_limit: usize,
    scroll: usize,
}

impl Screen {
    pub fn new(interval_ms: u32, scrollback_limit: usize) -> Self {
        Self {
            rows: VecDeque::new(),
            next_id: 0,
            tasks: Vec::new(),
            interval_ms: u64::from(interval_ms.max(1)),
            elapsed_ms: 0,
            scrollback_limit: scrollback_limit.max(1),
            scroll: 0,
        }
    }

    /// Advance reveal tasks by `dt_ms` of wall time.
    ///
    /// Every pending row gains one character per elapsed interval. Finished
    /// tasks are dropped.
    pub fn tick(&mut self, dt_ms: u64) {
        if self.tasks.is_empty() {
            self.elapsed_ms = 0;
            return;
        }
        self.elapsed_ms += dt_ms;
        let steps = self.elapsed_ms / self.interval_ms;
        self.elapsed_ms %= self.interval_ms;
        if steps == 0 {
            return;
        }

        let rows = &mut self.rows;
        self.tasks.retain_mut(|task| {
            let Ok(idx) = rows.binary_search_by_key(&task.row_id, |r| r.id) else {
                // Row scrolled out of the buffer.
                return false;
            };
            let Some(span) = rows[idx].spans.last_mut() else {
                return false;
            };
            for _ in 0..steps {
                match task.remaining.next() {
                    Some(ch) => span.text.push(ch),
                    None => return false,
                }
            }
            !task.remaining.as_slice().is_empty()
        });
    }

    /// Number of rows still being revealed.
    pub fn pending_reveals(&self) -> usize {
        self.tasks.len()
    }

    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &Row> {
        self.rows.iter()
    }

    /// Rows from the top of the buffer down to the current scroll position.
    pub fn visible_rows(&self) -> impl DoubleEndedIterator<Item = &Row> {
        let end = self.rows.len().saturating_sub(self.scroll);
        self.rows.range(..end)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows hidden below the viewport.
    pub fn scroll_offset(&self) -> usize {
        self.scroll
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.scroll = (self.scroll + n).min(self.rows.len().saturating_sub(1));
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.scroll = self.scroll.saturating_sub(n);
    }

    fn push_row(&mut self, spans: Vec<Span>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.rows.push_back(Row { id, spans });
        id
    }

    fn push_text(&mut self, text: String, style: LineStyle, reveal: Reveal) {
        let tone = Tone::Text(style);
        if reveal == Reveal::Progressive && !text.is_empty() {
            let row_id = self.push_row(vec![Span::new(String::new(), tone)]);
            let chars: Vec<char> = text.chars().collect();
            self.tasks.push(RevealTask {
                row_id,
                remaining: chars.into_iter(),
            });
        } else {
            self.push_row(vec![Span::new(text, tone)]);
        }
    }

    fn push_block(&mut self, block: Block) {
        for item in block.items {
            match item {
                BlockItem::Heading(text) => {
                    self.push_row(vec![Span::new(text, Tone::Heading)]);
                },
                BlockItem::Text { text, style } => {
                    self.push_row(vec![Span::new(text, Tone::Text(style))]);
                },
                BlockItem::Bullets(items) => {
                    for item in items {
                        self.push_row(vec![
                            Span::new("  - ", Tone::Bullet),
                            Span::new(item, Tone::Text(LineStyle::Plain)),
                        ]);
                    }
                },
                BlockItem::Badges(items) => {
                    let mut spans = Vec::with_capacity(items.len() * 2);
                    for (i, item) in items.into_iter().enumerate() {
                        if i > 0 {
                            spans.push(Span::new(" ", Tone::Text(LineStyle::Plain)));
                        }
                        spans.push(Span::new(format!("[{item}]"), Tone::Badge));
                    }
                    self.push_row(spans);
                },
                BlockItem::Links(links) => {
                    if links.is_empty() {
                        continue;
                    }
                    let mut spans = Vec::new();
                    for (i, link) in links.into_iter().enumerate() {
                        if i > 0 {
                            spans.push(Span::new("  ", Tone::Text(LineStyle::Plain)));
                        }
                        let show_href = link.href != link.label;
                        spans.push(Span::new(link.label, Tone::Link));
                        if show_href {
                            spans.push(Span::new(
                                format!(" <{}>", link.href),
                                Tone::Text(LineStyle::Muted),
                            ));
                        }
                    }
                    self.push_row(spans);
                },
                BlockItem::Spacer => {
                    self.push_row(Vec::new());
                },
            }
        }
    }

    fn enforce_scrollback(&mut self) {
        while self.rows.len() > self.scrollback_limit {
            self.rows.pop_front();
        }
        if let Some(first) = self.rows.front().map(|r| r.id) {
            self.tasks.retain(|t| t.row_id >= first);
        }
    }
}

impl RenderSink for Screen {
    fn append_lines(&mut self, lines: Vec<OutputLine>, reveal: Reveal) {
        for line in lines {
            match line {
                OutputLine::Text { text, style } => self.push_text(text, style, reveal),
                OutputLine::Echo { prompt, text } => {
                    self.push_row(vec![
                        Span::new(format!("{prompt} "), Tone::Prompt),
                        Span::new(text, Tone::Text(LineStyle::Plain)),
                    ]);
                },
                OutputLine::Block(block) => self.push_block(block),
            }
        }
        self.enforce_scrollback();
        self.scroll = 0;
    }

    fn clear(&mut self) {
        let cancelled = self.tasks.len();
        self.tasks.clear();
        self.rows.clear();
        self.scroll = 0;
        self.elapsed_ms = 0;
        if cancelled > 0 {
            log::debug!("Cancelled {cancelled} pending reveal(s)");
        }
    }
}
