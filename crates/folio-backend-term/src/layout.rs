//! Soft wrapping of screen rows into fixed-width display lines.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use folio_terminal::{Row, Screen, Span, Tone};

/// A run of same-toned text on one display line.
pub type Segment = (String, Tone);

/// Wrap a row's spans at `width` display columns. An empty row yields one
/// empty line. A glyph wider than the whole line gets a line of its own.
pub fn wrap_row(row: &Row, width: usize) -> Vec<Vec<Segment>> {
    wrap_spans(&row.spans, width)
}

fn wrap_spans(spans: &[Span], width: usize) -> Vec<Vec<Segment>> {
    let width = width.max(1);
    let mut lines = vec![Vec::new()];
    let mut col = 0;
    for span in spans {
        let mut current = String::new();
        for ch in span.text.chars() {
            let w = ch.width().unwrap_or(0);
            if col > 0 && col + w > width {
                if !current.is_empty() {
                    push_segment(&mut lines, std::mem::take(&mut current), span.tone);
                }
                lines.push(Vec::new());
                col = 0;
            }
            current.push(ch);
            col += w;
        }
        if !current.is_empty() {
            push_segment(&mut lines, current, span.tone);
        }
    }
    lines
}

fn push_segment(lines: &mut [Vec<Segment>], text: String, tone: Tone) {
    if let Some(line) = lines.last_mut() {
        line.push((text, tone));
    }
}

/// The bottom-most `height` display lines of the screen's visible rows.
pub fn visible_lines(screen: &Screen, width: usize, height: usize) -> Vec<Vec<Segment>> {
    let mut out = Vec::with_capacity(height);
    'rows: for row in screen.visible_rows().rev() {
        for line in wrap_row(row, width).into_iter().rev() {
            if out.len() == height {
                break 'rows;
            }
            out.push(line);
        }
    }
    out.reverse();
    out
}

/// Slice of the input line that fits in `width` columns after the prompt,
/// and the cursor's display column within the whole line.
///
/// `cursor` is a character index into `text`.
pub fn input_view(prompt: &str, text: &str, cursor: usize, width: usize) -> (String, u16) {
    let lead = prompt.width() + 1;
    let room = width.saturating_sub(lead).max(1);
    let chars: Vec<(char, usize)> = text
        .chars()
        .map(|c| (c, c.width().unwrap_or(0)))
        .collect();
    let cursor = cursor.min(chars.len());
    let cursor_cell = chars.get(cursor).map_or(1, |&(_, w)| w.max(1));

    // Drop leading chars until everything up to and including the cursor
    // cell fits.
    let mut skip = 0;
    let mut before: usize = chars[..cursor].iter().map(|&(_, w)| w).sum();
    while skip < cursor && before + cursor_cell > room {
        before -= chars[skip].1;
        skip += 1;
    }

    let mut shown = String::new();
    let mut used = 0;
    for &(c, w) in &chars[skip..] {
        if used + w > room {
            break;
        }
        shown.push(c);
        used += w;
    }
    let col = (lead + before).min(width.saturating_sub(1));
    (shown, u16::try_from(col).unwrap_or(u16::MAX))
}
