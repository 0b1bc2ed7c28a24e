//! Shared fakes for unit tests.

use folio_types::error::{FolioError, Result};
use folio_types::output::{OutputLine, Reveal};
use folio_types::profile::Profile;
use folio_types::theme::ThemeName;

use crate::host::{Clipboard, Host, LinkOpener, MemorySettings};
use crate::interpreter::Environment;
use crate::session::Session;
use crate::sink::RenderSink;

#[derive(Debug, Default)]
pub struct RecordingClipboard {
    pub copied: Vec<String>,
    pub fail: bool,
}

impl Clipboard for RecordingClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.fail {
            return Err(FolioError::Backend("no clipboard".into()));
        }
        self.copied.push(text.to_string());
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct RecordingOpener {
    pub opened: Vec<String>,
    pub fail: bool,
}

impl LinkOpener for RecordingOpener {
    fn open(&mut self, url: &str) -> Result<()> {
        if self.fail {
            return Err(FolioError::Backend("no browser".into()));
        }
        self.opened.push(url.to_string());
        Ok(())
    }
}

/// Builtin profile, a fresh session, and recording host capabilities.
pub struct FakeHost {
    pub profile: Profile,
    pub session: Session,
    pub settings: MemorySettings,
    pub clipboard: RecordingClipboard,
    pub opener: RecordingOpener,
}

impl FakeHost {
    pub fn new() -> Self {
        Self {
            profile: Profile::builtin().unwrap(),
            session: Session::new("$", ThemeName::Matrix),
            settings: MemorySettings::new(),
            clipboard: RecordingClipboard::default(),
            opener: RecordingOpener::default(),
        }
    }

    pub fn env(&mut self) -> Environment<'_> {
        Environment {
            profile: &self.profile,
            session: &mut self.session,
            settings: &mut self.settings,
            clipboard: &mut self.clipboard,
            opener: &mut self.opener,
        }
    }

    /// Host view without the session, for driving a `Terminal`.
    pub fn host(&mut self) -> Host<'_> {
        Host {
            settings: &mut self.settings,
            clipboard: &mut self.clipboard,
            opener: &mut self.opener,
        }
    }
}

/// Sink that records every call.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub lines: Vec<(OutputLine, Reveal)>,
    pub clears: usize,
}

impl RecordingSink {
    pub fn texts(&self) -> Vec<&str> {
        self.lines.iter().filter_map(|(l, _)| l.as_text()).collect()
    }

    pub fn last(&self) -> Option<&OutputLine> {
        self.lines.last().map(|(l, _)| l)
    }
}

impl RenderSink for RecordingSink {
    fn append_lines(&mut self, lines: Vec<OutputLine>, reveal: Reveal) {
        self.lines.extend(lines.into_iter().map(|l| (l, reveal)));
    }

    fn clear(&mut self) {
        self.lines.clear();
        self.clears += 1;
    }
}
