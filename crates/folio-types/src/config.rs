//! Runtime configuration.
//!
//! Loaded from `folio.toml`. Every field has a default, so an empty or
//! missing file yields a working configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};
use crate::theme::ThemeName;

/// Top-level folio configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Prompt label override. Falls back to the profile's `meta.prompt`.
    pub prompt: Option<String>,
    /// Theme used when no preference has been persisted yet.
    pub default_theme: ThemeName,
    /// Milliseconds between revealed characters when the typing effect is on.
    pub reveal_interval_ms: u32,
    /// Maximum rows kept in the scrollback.
    pub scrollback_limit: usize,
    /// Input poll timeout / frame length in milliseconds.
    pub frame_ms: u64,
    /// Optional profile file (TOML or JSON) replacing the built-in sample.
    pub profile_path: Option<PathBuf>,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            prompt: None,
            default_theme: ThemeName::Matrix,
            reveal_interval_ms: 10,
            scrollback_limit: 1000,
            frame_ms: 16,
            profile_path: None,
        }
    }
}

impl FolioConfig {
    pub fn from_toml_str(src: &str) -> Result<Self> {
        let cfg: Self = toml::from_str(src)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let src = std::fs::read_to_string(path)?;
        let cfg = Self::from_toml_str(&src)?;
        log::info!("Loaded config from {}", path.display());
        Ok(cfg)
    }

    fn validate(&self) -> Result<()> {
        if self.reveal_interval_ms == 0 {
            return Err(FolioError::Config(
                "reveal_interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.scrollback_limit == 0 {
            return Err(FolioError::Config(
                "scrollback_limit must be greater than zero".to_string(),
            ));
        }
        if self.frame_ms == 0 {
            return Err(FolioError::Config("frame_ms must be greater than zero".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_toml_is_default() {
        let cfg = FolioConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, FolioConfig::default());
    }

    #[test]
    fn partial_toml_overrides_fields() {
        let cfg = FolioConfig::from_toml_str(
            r#"
default_theme = "light"
reveal_interval_ms = 25
prompt = "me@box:~$"
"#,
        )
        .unwrap();
        assert_eq!(cfg.default_theme, ThemeName::Light);
        assert_eq!(cfg.reveal_interval_ms, 25);
        assert_eq!(cfg.prompt.as_deref(), Some("me@box:~$"));
        assert_eq!(cfg.scrollback_limit, 1000);
    }

    #[test]
    fn unknown_theme_is_parse_error() {
        let err = FolioConfig::from_toml_str("default_theme = \"purple\"").unwrap_err();
        assert!(matches!(err, FolioError::TomlParse(_)));
    }

    #[test]
    fn zero_interval_rejected() {
        let err = FolioConfig::from_toml_str("reveal_interval_ms = 0").unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
    }

    #[test]
    fn zero_scrollback_rejected() {
        let err = FolioConfig::from_toml_str("scrollback_limit = 0").unwrap_err();
        assert!(err.to_string().contains("scrollback_limit"));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let cfg = FolioConfig::load(Path::new("/nonexistent/folio.toml")).unwrap();
        assert_eq!(cfg, FolioConfig::default());
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "scrollback_limit = 50").unwrap();
        let cfg = FolioConfig::load(file.path()).unwrap();
        assert_eq!(cfg.scrollback_limit, 50);
    }
}
