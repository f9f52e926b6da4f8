//! Theme loading: btop-style `theme[key]="value"` and hex → ratatui Color.

use ratatui::style::Color;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Number of tile kinds the theme colours.
pub const TILE_KINDS: usize = 8;

/// Glyph per tile kind; index 2 is the bomb, index 7 the rock.
const GLYPHS: [&str; TILE_KINDS] = ["●", "◆", "✱", "▲", "■", "♥", "♣", "▒"];

/// One Dark tile and UI colours, optionally overridden from a theme file.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Tile colours by kind.
    pub tiles: [Color; TILE_KINDS],
    /// Board background.
    pub bg: Color,
    /// Grid / border.
    pub div_line: Color,
    /// Text (score, timer).
    pub main_fg: Color,
    /// Highlight / titles.
    pub title: Color,
    /// Secondary text and hints.
    pub inactive_fg: Color,
    /// Keyboard cursor frame.
    pub cursor: Color,
}

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid hex: {0}")]
    InvalidHex(String),
}

const fn rgb(hex: u32) -> Color {
    Color::Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

const ONEDARK_TILES: [Color; TILE_KINDS] = [
    rgb(0x98C379), // green
    rgb(0xE5C07B), // yellow
    rgb(0xE06C75), // red, bomb
    rgb(0x61AFEF), // blue
    rgb(0xC678DD), // magenta
    rgb(0x56B6C2), // cyan
    rgb(0xD19A66), // orange
    rgb(0x7F848E), // grey, rock
];

impl Default for Theme {
    fn default() -> Self {
        Self::onedark_default()
    }
}

impl Theme {
    pub const fn onedark_default() -> Self {
        Self {
            tiles: ONEDARK_TILES,
            bg: rgb(0x31353F),
            div_line: rgb(0x3F444F),
            main_fg: rgb(0xABB2BF),
            title: rgb(0xE5C07B),
            inactive_fg: rgb(0x5C6370),
            cursor: rgb(0xFFFFFF),
        }
    }

    /// Load theme from a btop-style file: `theme[key]="value"` or `theme[key]='value'`.
    /// Falls back to One Dark defaults if path is None or the file is missing.
    pub fn load(path: Option<&Path>, palette: crate::Palette) -> Result<Self, ThemeError> {
        let path = match path {
            Some(p) if p.exists() => p,
            _ => return Ok(Self::default_for_palette(palette)),
        };
        let s = std::fs::read_to_string(path)?;
        let map = parse_theme_file(&s);
        let mut theme = Self::from_map(&map);
        theme.apply_palette(palette);
        Ok(theme)
    }

    fn default_for_palette(palette: crate::Palette) -> Self {
        let mut t = Self::onedark_default();
        t.apply_palette(palette);
        t
    }

    /// Override tile colours for high-contrast or colorblind play. Rocks stay grey.
    pub fn apply_palette(&mut self, palette: crate::Palette) {
        match palette {
            crate::Palette::Normal => {}
            crate::Palette::HighContrast => {
                self.tiles = [
                    rgb(0x00FF00),
                    rgb(0xFFFF00),
                    rgb(0xFF0000),
                    rgb(0x0088FF),
                    rgb(0xFF00FF),
                    rgb(0x00FFFF),
                    rgb(0xFF8800),
                    rgb(0xA0A0A0),
                ];
                self.cursor = rgb(0xFFFFFF);
            }
            crate::Palette::Colorblind => {
                // Tol bright: no red/green pair carries meaning alone
                self.tiles = [
                    rgb(0x0077BB),
                    rgb(0xEE7733),
                    rgb(0xCC3311),
                    rgb(0x009988),
                    rgb(0xEE3377),
                    rgb(0xBBBB00),
                    rgb(0x33BBEE),
                    rgb(0xBBBBBB),
                ];
            }
        }
    }

    fn from_map(map: &HashMap<String, String>) -> Self {
        let get = |key: &str| {
            map.get(key)
                .and_then(|v| parse_hex(v.trim_matches('"').trim_matches('\'').trim()).ok())
        };
        let d = Self::onedark_default();
        let t = d.tiles;
        // Keys follow onedark.theme; anything missing keeps the One Dark value.
        Self {
            tiles: [
                get("mem_box").or_else(|| get("cpu_start")).unwrap_or(t[0]),
                get("cpu_mid").unwrap_or(t[1]),
                get("cpu_end").or_else(|| get("temp_end")).unwrap_or(t[2]),
                get("cpu_box").unwrap_or(t[3]),
                get("net_box").unwrap_or(t[4]),
                get("hi_fg").or_else(|| get("proc_misc")).unwrap_or(t[5]),
                get("temp_mid").unwrap_or(t[6]),
                get("graph_text").unwrap_or(t[7]),
            ],
            bg: get("meter_bg").unwrap_or(d.bg),
            div_line: get("div_line").unwrap_or(d.div_line),
            main_fg: get("main_fg").unwrap_or(d.main_fg),
            title: get("title").unwrap_or(d.title),
            inactive_fg: get("inactive_fg").unwrap_or(d.inactive_fg),
            cursor: get("selected_fg").unwrap_or(d.cursor),
        }
    }

    #[inline]
    pub fn tile_color(&self, kind: u8) -> Color {
        self.tiles[usize::from(kind) % TILE_KINDS]
    }

    #[inline]
    pub fn tile_glyph(kind: u8) -> &'static str {
        GLYPHS[usize::from(kind) % TILE_KINDS]
    }
}

/// Parse btop-style theme file into key -> value map.
fn parse_theme_file(s: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for line in s.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let Some(stripped) = line.strip_prefix("theme[") else {
            continue;
        };
        let Some(end) = stripped.find(']') else {
            continue;
        };
        let key = stripped[..end].trim();
        let rest = stripped[end + 1..].trim();
        if let Some(value) = rest.strip_prefix('=') {
            let value = value.trim().trim_matches('"').trim_matches('\'');
            if !value.is_empty() {
                map.insert(key.to_string(), value.to_string());
            }
        }
    }
    map
}

/// Parse hex colour "#RRGGBB" or "#RGB" into ratatui Color.
pub fn parse_hex(s: &str) -> Result<Color, ThemeError> {
    let s = s.trim().trim_start_matches('#');
    let invalid = || ThemeError::InvalidHex(s.to_string());
    if !s.is_ascii() {
        return Err(invalid());
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&s[range], 16).map_err(|_| invalid())
    };
    match s.len() {
        6 => Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        3 => Ok(Color::Rgb(
            channel(0..1)? * 17,
            channel(1..2)? * 17,
            channel(2..3)? * 17,
        )),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_6() {
        let c = parse_hex("#98C379").unwrap();
        assert!(matches!(c, Color::Rgb(0x98, 0xC3, 0x79)));
    }

    #[test]
    fn test_parse_hex_3() {
        let c = parse_hex("#FFF").unwrap();
        assert!(matches!(c, Color::Rgb(255, 255, 255)));
    }

    #[test]
    fn test_parse_hex_rejects_garbage() {
        assert!(matches!(parse_hex("#12345"), Err(ThemeError::InvalidHex(_))));
        assert!(matches!(parse_hex("zzzzzz"), Err(ThemeError::InvalidHex(_))));
    }

    #[test]
    fn test_parse_theme_line() {
        let map = parse_theme_file(r##"theme[meter_bg]="#31353F""##);
        assert_eq!(map.get("meter_bg"), Some(&"#31353F".to_string()));
    }

    #[test]
    fn test_theme_file_overrides_tiles() {
        let map = parse_theme_file(
            "# comment\ntheme[cpu_end]='#FF0000'\ntheme[main_fg]=\"#FFFFFF\"\nnot a theme line",
        );
        let theme = Theme::from_map(&map);
        assert_eq!(theme.tile_color(2), Color::Rgb(255, 0, 0));
        assert_eq!(theme.main_fg, Color::Rgb(255, 255, 255));
        assert_eq!(theme.tile_color(0), ONEDARK_TILES[0]);
    }

    #[test]
    fn test_const_rgb_matches_parser() {
        assert_eq!(rgb(0x61AFEF), parse_hex("#61AFEF").unwrap());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let t = Theme::load(
            Some(Path::new("/nonexistent/bloomtui.theme")),
            crate::Palette::HighContrast,
        )
        .unwrap();
        assert_eq!(t.tile_color(2), Color::Rgb(255, 0, 0));
    }
}
