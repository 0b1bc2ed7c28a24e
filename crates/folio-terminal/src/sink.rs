//! Where command output goes.

use folio_types::output::{OutputLine, Reveal};

/// A display surface that accepts abstract output.
///
/// Implementations own any in-flight reveal animations. `clear` must cancel
/// them so no character lands after the surface is emptied.
pub trait RenderSink {
    /// Append lines. `reveal` applies to `Text` lines only; blocks and echoes
    /// are always written instantly.
    fn append_lines(&mut self, lines: Vec<OutputLine>, reveal: Reveal);

    /// Remove all content and cancel pending reveals.
    fn clear(&mut self);
}
