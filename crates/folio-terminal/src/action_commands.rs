//! Commands with side effects: theme, clipboard, link opening, typing effect.

use folio_types::error::{FolioError, Result};
use folio_types::output::OutputLine;
use folio_types::theme::ThemeName;

use crate::interpreter::{Command, CommandOutput, Environment};

/// First argument or a usage error.
fn required_arg<'a>(cmd: &dyn Command, args: &[&'a str]) -> Result<&'a str> {
    args.first()
        .copied()
        .ok_or_else(|| FolioError::Usage(cmd.usage().to_string()))
}

// ---------------------------------------------------------------------------
// theme
// ---------------------------------------------------------------------------

pub(crate) struct ThemeCmd;
impl Command for ThemeCmd {
    fn name(&self) -> &str {
        "theme"
    }
    fn description(&self) -> &str {
        "Switch the color theme"
    }
    fn usage(&self) -> &str {
        "theme light|dark|matrix"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let arg = required_arg(self, args)?;
        let theme: ThemeName = arg.parse()?;
        env.session.apply_theme(theme, env.settings);
        Ok(CommandOutput::Lines(vec![OutputLine::ok(format!(
            "Theme set to {arg}."
        ))]))
    }
}

// ---------------------------------------------------------------------------
// copy
// ---------------------------------------------------------------------------

pub(crate) struct CopyCmd;
impl Command for CopyCmd {
    fn name(&self) -> &str {
        "copy"
    }
    fn description(&self) -> &str {
        "Copy a contact detail to the clipboard"
    }
    fn usage(&self) -> &str {
        "copy email|github|linkedin"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let arg = required_arg(self, args)?;
        let contact = &env.profile.contact;
        let value = match arg.to_lowercase().as_str() {
            "email" => Some(contact.email.as_str()),
            "github" => Some(contact.github.as_str()),
            "linkedin" => Some(contact.linkedin.as_str()),
            _ => None,
        };
        let Some(value) = value.filter(|v| !v.is_empty()) else {
            return Err(FolioError::NoTarget(
                "Nothing to copy for that target.".into(),
            ));
        };
        if let Err(e) = env.clipboard.set_text(value) {
            log::warn!("Clipboard write failed: {e}");
            return Err(FolioError::Unavailable("Clipboard unavailable.".into()));
        }
        Ok(CommandOutput::Lines(vec![OutputLine::ok(format!(
            "{arg} copied to clipboard."
        ))]))
    }
}

// ---------------------------------------------------------------------------
// open
// ---------------------------------------------------------------------------

pub(crate) struct OpenCmd;
impl Command for OpenCmd {
    fn name(&self) -> &str {
        "open"
    }
    fn description(&self) -> &str {
        "Open a profile link in the browser"
    }
    fn usage(&self) -> &str {
        "open github|linkedin|resume"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let arg = required_arg(self, args)?;
        let contact = &env.profile.contact;
        let url = match arg.to_lowercase().as_str() {
            "github" => Some(contact.github.as_str()),
            "linkedin" => Some(contact.linkedin.as_str()),
            "resume" => contact.resume.as_deref(),
            _ => None,
        };
        let Some(url) = url.filter(|u| !u.is_empty()) else {
            return Err(FolioError::NoTarget(
                "No link configured for that target.".into(),
            ));
        };
        if let Err(e) = env.opener.open(url) {
            log::warn!("Failed to open {url}: {e}");
            return Err(FolioError::Unavailable(format!("Unable to open {arg}.")));
        }
        Ok(CommandOutput::Lines(vec![OutputLine::info(format!(
            "Opening {arg}..."
        ))]))
    }
}

// ---------------------------------------------------------------------------
// type
// ---------------------------------------------------------------------------

pub(crate) struct TypeCmd;
impl Command for TypeCmd {
    fn name(&self) -> &str {
        "type"
    }
    fn description(&self) -> &str {
        "Toggle the typing effect"
    }
    fn usage(&self) -> &str {
        "type on|off"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let arg = required_arg(self, args)?;
        let enabled = match arg.to_lowercase().as_str() {
            "on" | "fast" | "true" => true,
            "off" | "false" => false,
            _ => return Err(FolioError::Usage(self.usage().to_string())),
        };
        env.session.set_typing(enabled);
        let msg = if enabled {
            "Typing effect enabled."
        } else {
            "Typing effect disabled."
        };
        Ok(CommandOutput::Lines(vec![OutputLine::ok(msg)]))
    }
}
