//! Error types for folio.

use std::io;

use crate::output::LineStyle;

/// Errors produced by folio.
///
/// The first four variants form the command taxonomy. None of them is fatal:
/// the dispatcher renders each one as a single styled line and returns to
/// the prompt.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    #[error("Command not found: {0}")]
    UnknownCommand(String),

    /// Missing or invalid argument. Holds the usage text without the prefix.
    #[error("Usage: {0}")]
    Usage(String),

    /// The argument named a target with nothing configured behind it.
    #[error("{0}")]
    NoTarget(String),

    /// A host capability (clipboard, link opener) refused the request.
    #[error("{0}")]
    Unavailable(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("settings error: {0}")]
    Settings(String),

    #[error("backend error: {0}")]
    Backend(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FolioError {
    /// Line style used when this error is reported inline.
    pub fn style(&self) -> LineStyle {
        match self {
            Self::Usage(_) | Self::Unavailable(_) => LineStyle::Warn,
            _ => LineStyle::Error,
        }
    }
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_command_display() {
        let e = FolioError::UnknownCommand("foo".into());
        assert_eq!(format!("{e}"), "Command not found: foo");
    }

    #[test]
    fn usage_display() {
        let e = FolioError::Usage("theme light|dark|matrix".into());
        assert_eq!(format!("{e}"), "Usage: theme light|dark|matrix");
    }

    #[test]
    fn no_target_display_is_verbatim() {
        let e = FolioError::NoTarget("Nothing to copy for that target.".into());
        assert_eq!(format!("{e}"), "Nothing to copy for that target.");
    }

    #[test]
    fn config_error_display() {
        let e = FolioError::Config("missing key".into());
        assert_eq!(format!("{e}"), "config error: missing key");
    }

    #[test]
    fn settings_error_display() {
        let e = FolioError::Settings("read-only".into());
        assert_eq!(format!("{e}"), "settings error: read-only");
    }

    #[test]
    fn styles_follow_taxonomy() {
        assert_eq!(FolioError::UnknownCommand("x".into()).style(), LineStyle::Error);
        assert_eq!(FolioError::Usage("x".into()).style(), LineStyle::Warn);
        assert_eq!(FolioError::NoTarget("x".into()).style(), LineStyle::Error);
        assert_eq!(FolioError::Unavailable("x".into()).style(), LineStyle::Warn);
        assert_eq!(FolioError::Backend("x".into()).style(), LineStyle::Error);
    }

    #[test]
    fn io_error_from_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "gone");
        let e: FolioError = io_err.into();
        let msg = format!("{e}");
        assert!(msg.contains("I/O error"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn toml_error_from_conversion() {
        let toml_err = toml::from_str::<toml::Value>("this is [[[not valid toml").unwrap_err();
        let e: FolioError = toml_err.into();
        assert!(format!("{e}").contains("TOML parse error"));
    }

    #[test]
    fn json_error_from_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let e: FolioError = json_err.into();
        assert!(format!("{e}").contains("JSON error"));
    }

    #[test]
    fn result_alias_err() {
        let r: Result<i32> = Err(FolioError::Backend("oops".into()));
        assert!(r.is_err());
    }
}
