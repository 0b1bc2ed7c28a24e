//! Per-theme colors, loaded from the embedded palette file.

use crossterm::style::Color;
use serde::Deserialize;

use folio_terminal::Tone;
use folio_types::error::{FolioError, Result};
use folio_types::output::LineStyle;
use folio_types::theme::ThemeName;

const PALETTES_TOML: &str = include_str!("../assets/palettes.toml");

/// Raw palette entry as written in TOML.
#[derive(Debug, Clone, Deserialize)]
struct PaletteDef {
    background: String,
    foreground: String,
    muted: String,
    info: String,
    ok: String,
    warn: String,
    error: String,
    prompt: String,
    heading: String,
    link: String,
    badge: String,
    accent: String,
}

#[derive(Debug, Deserialize)]
struct PaletteFile {
    light: PaletteDef,
    dark: PaletteDef,
    matrix: PaletteDef,
}

/// Resolved colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,
    pub info: Color,
    pub ok: Color,
    pub warn: Color,
    pub error: Color,
    pub prompt: Color,
    pub heading: Color,
    pub link: Color,
    pub badge: Color,
    /// Title bar background.
    pub accent: Color,
}

impl Palette {
    fn from_def(def: &PaletteDef) -> Result<Self> {
        let c = |field: &str, s: &str| {
            parse_hex_color(s)
                .ok_or_else(|| FolioError::Config(format!("bad color for {field}: {s}")))
        };
        Ok(Self {
            background: c("background", &def.background)?,
            foreground: c("foreground", &def.foreground)?,
            muted: c("muted", &def.muted)?,
            info: c("info", &def.info)?,
            ok: c("ok", &def.ok)?,
            warn: c("warn", &def.warn)?,
            error: c("error", &def.error)?,
            prompt: c("prompt", &def.prompt)?,
            heading: c("heading", &def.heading)?,
            link: c("link", &def.link)?,
            badge: c("badge", &def.badge)?,
            accent: c("accent", &def.accent)?,
        })
    }

    /// Foreground color for a span.
    pub fn tone(&self, tone: Tone) -> Color {
        match tone {
            Tone::Text(style) => match style {
                LineStyle::Plain => self.foreground,
                LineStyle::Info => self.info,
                LineStyle::Ok => self.ok,
                LineStyle::Warn => self.warn,
                LineStyle::Error => self.error,
                LineStyle::Muted => self.muted,
            },
            Tone::Prompt => self.prompt,
            Tone::Heading => self.heading,
            Tone::Link => self.link,
            Tone::Badge => self.badge,
            Tone::Bullet => self.muted,
        }
    }
}

/// Palettes for every theme.
#[derive(Debug, Clone, Copy)]
pub struct Palettes {
    light: Palette,
    dark: Palette,
    matrix: Palette,
}

impl Palettes {
    /// Parse the built-in palette file.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(PALETTES_TOML)
    }

    pub fn from_toml_str(src: &str) -> Result<Self> {
        let file: PaletteFile = toml::from_str(src)?;
        Ok(Self {
            light: Palette::from_def(&file.light)?,
            dark: Palette::from_def(&file.dark)?,
            matrix: Palette::from_def(&file.matrix)?,
        })
    }

    pub fn get(&self, theme: ThemeName) -> Palette {
        match theme {
            ThemeName::Light => self.light,
            ThemeName::Dark => self.dark,
            ThemeName::Matrix => self.matrix,
        }
    }
}

/// Parse a `#RRGGBB` string.
pub fn parse_hex_color(s: &str) -> Option<Color> {
    let s = s.strip_prefix('#')?;
    if s.len() != 6 || !s.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&s[0..2], 16).ok()?;
    let g = u8::from_str_radix(&s[2..4], 16).ok()?;
    let b = u8::from_str_radix(&s[4..6], 16).ok()?;
    Some(Color::Rgb { r, g, b })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex_colors() {
        assert_eq!(
            parse_hex_color("#FF0000"),
            Some(Color::Rgb { r: 255, g: 0, b: 0 })
        );
        assert_eq!(parse_hex_color("00FF00"), None);
        assert_eq!(parse_hex_color("#GG0000"), None);
        assert_eq!(parse_hex_color("#FFF"), None);
    }

    #[test]
    fn builtin_palettes_cover_all_themes() {
        let p = Palettes::builtin().unwrap();
        assert_eq!(
            p.get(ThemeName::Matrix).background,
            Color::Rgb { r: 0, g: 0, b: 0 }
        );
        assert_ne!(
            p.get(ThemeName::Light).background,
            p.get(ThemeName::Dark).background
        );
    }

    #[test]
    fn missing_theme_fails_to_parse() {
        let src = r##"
[light]
background = "#FFFFFF"
foreground = "#000000"
muted = "#000000"
info = "#000000"
ok = "#000000"
warn = "#000000"
error = "#000000"
prompt = "#000000"
heading = "#000000"
link = "#000000"
badge = "#000000"
accent = "#000000"
"##;
        let err = Palettes::from_toml_str(src).unwrap_err();
        assert!(matches!(err, FolioError::TomlParse(_)));
    }

    #[test]
    fn bad_hex_is_config_error() {
        let src = PALETTES_TOML.replacen("#000000", "#00000Z", 1);
        let err = Palettes::from_toml_str(&src).unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
    }

    #[test]
    fn tones_map_to_palette_entries() {
        let p = Palettes::builtin().unwrap().get(ThemeName::Dark);
        assert_eq!(p.tone(Tone::Text(LineStyle::Error)), p.error);
        assert_eq!(p.tone(Tone::Prompt), p.prompt);
        assert_eq!(p.tone(Tone::Bullet), p.muted);
    }
}
