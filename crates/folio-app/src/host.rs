//! Desktop implementations of the clipboard and link opener.

use std::process::{Command, Stdio};

use folio_terminal::{Clipboard, LinkOpener};
use folio_types::error::{FolioError, Result};

/// System clipboard via `arboard`.
///
/// The handle is created on first use and kept alive, since some platforms
/// drop clipboard contents when their owner goes away.
#[derive(Default)]
pub struct ArboardClipboard {
    inner: Option<arboard::Clipboard>,
}

impl ArboardClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for ArboardClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.inner.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|e| FolioError::Backend(e.to_string()))?;
            self.inner = Some(clipboard);
        }
        let Some(clipboard) = self.inner.as_mut() else {
            return Err(FolioError::Backend("clipboard not initialized".into()));
        };
        clipboard
            .set_text(text)
            .map_err(|e| FolioError::Backend(e.to_string()))
    }
}

/// Opens URLs with the platform's default handler.
#[derive(Debug, Default)]
pub struct SystemLinkOpener;

impl SystemLinkOpener {
    fn command(url: &str) -> Command {
        if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", "", url]);
            cmd
        } else if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(url);
            cmd
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            cmd
        }
    }
}

impl LinkOpener for SystemLinkOpener {
    fn open(&mut self, url: &str) -> Result<()> {
        let mut child = Self::command(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;
        log::info!("Opened {url}");
        // Reap the launcher off the frame loop so it never lingers as a zombie.
        std::thread::spawn(move || match child.wait() {
            Ok(status) if !status.success() => log::warn!("Link opener exited with {status}"),
            Ok(_) => {},
            Err(e) => log::warn!("Waiting on link opener failed: {e}"),
        });
        Ok(())
    }
}
