//! Color themes for the reader.
//!
//! Provides:
//! - Theme struct with all UI colors
//! - Built-in presets (midnight, newsprint, nord, gruvbox)
//! - Hex color parsing for config overrides

use ratatui::style::Color;
use thiserror::Error;

/// Theme colors for the UI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Screen background
    pub background: Color,
    /// Body text
    pub foreground: Color,
    /// Top bar background
    pub app_bar_bg: Color,
    /// Top bar text and nav icon
    pub app_bar_fg: Color,
    /// Background of the focused card
    pub selection_bg: Color,
    /// Text of the focused card
    pub selection_fg: Color,
    /// Section titles, focused borders, links
    pub accent: Color,
    /// Bylines and secondary text
    pub dimmed: Color,
    /// Publication names, hints
    pub dimmed_alt: Color,
    /// Horizontal rules between list items
    pub divider: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::midnight()
    }
}

impl Theme {
    /// Dark blue-gray, amber accent
    pub fn midnight() -> Self {
        Self {
            background: Color::Rgb(16, 20, 28),       // #10141c
            foreground: Color::Rgb(226, 232, 240),    // #e2e8f0
            app_bar_bg: Color::Rgb(30, 38, 54),       // #1e2636
            app_bar_fg: Color::Rgb(241, 245, 249),    // #f1f5f9
            selection_bg: Color::Rgb(36, 48, 70),     // #243046
            selection_fg: Color::Rgb(248, 250, 252),  // #f8fafc
            accent: Color::Rgb(224, 165, 38),         // #e0a526
            dimmed: Color::Rgb(148, 163, 184),        // #94a3b8
            dimmed_alt: Color::Rgb(100, 116, 139),    // #64748b
            divider: Color::Rgb(51, 65, 85),          // #334155
        }
    }

    /// Light paper tones
    pub fn newsprint() -> Self {
        Self {
            background: Color::Rgb(250, 248, 242),    // #faf8f2
            foreground: Color::Rgb(33, 33, 33),       // #212121
            app_bar_bg: Color::Rgb(33, 33, 33),       // #212121
            app_bar_fg: Color::Rgb(250, 248, 242),    // #faf8f2
            selection_bg: Color::Rgb(232, 226, 208),  // #e8e2d0
            selection_fg: Color::Rgb(20, 20, 20),     // #141414
            accent: Color::Rgb(178, 34, 34),          // #b22222
            dimmed: Color::Rgb(97, 97, 97),           // #616161
            dimmed_alt: Color::Rgb(140, 140, 140),    // #8c8c8c
            divider: Color::Rgb(214, 208, 192),       // #d6d0c0
        }
    }

    pub fn nord() -> Self {
        Self {
            background: Color::Rgb(46, 52, 64),       // #2e3440 (nord0)
            foreground: Color::Rgb(236, 239, 244),    // #eceff4 (nord6)
            app_bar_bg: Color::Rgb(59, 66, 82),       // #3b4252 (nord1)
            app_bar_fg: Color::Rgb(236, 239, 244),    // #eceff4 (nord6)
            selection_bg: Color::Rgb(67, 76, 94),     // #434c5e (nord2)
            selection_fg: Color::Rgb(236, 239, 244),  // #eceff4 (nord6)
            accent: Color::Rgb(136, 192, 208),        // #88c0d0 (nord8)
            dimmed: Color::Rgb(216, 222, 233),        // #d8dee9 (nord4)
            dimmed_alt: Color::Rgb(129, 161, 193),    // #81a1c1 (nord9)
            divider: Color::Rgb(76, 86, 106),         // #4c566a (nord3)
        }
    }

    pub fn gruvbox() -> Self {
        Self {
            background: Color::Rgb(40, 40, 40),       // #282828 (bg)
            foreground: Color::Rgb(235, 219, 178),    // #ebdbb2 (fg)
            app_bar_bg: Color::Rgb(60, 56, 54),       // #3c3836 (bg1)
            app_bar_fg: Color::Rgb(251, 241, 199),    // #fbf1c7 (fg0)
            selection_bg: Color::Rgb(80, 73, 69),     // #504945 (bg2)
            selection_fg: Color::Rgb(251, 241, 199),  // #fbf1c7 (fg0)
            accent: Color::Rgb(250, 189, 47),         // #fabd2f (yellow)
            dimmed: Color::Rgb(168, 153, 132),        // #a89984 (gray)
            dimmed_alt: Color::Rgb(146, 131, 116),    // #928374 (gray)
            divider: Color::Rgb(80, 73, 69),          // #504945 (bg2)
        }
    }

    /// Load theme from preset name
    pub fn from_preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "midnight" | "default" => Some(Self::midnight()),
            "newsprint" | "light" => Some(Self::newsprint()),
            "nord" => Some(Self::nord()),
            "gruvbox" | "gruvbox-dark" | "gruvbox_dark" => Some(Self::gruvbox()),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    #[error("invalid color length (expected 3 or 6 hex chars)")]
    InvalidLength,
    #[error("invalid hex character")]
    InvalidHex,
}

/// Parse hex color string to Color
/// Supports: #rrggbb, #rgb, rrggbb, rgb
pub fn parse_hex_color(s: &str) -> Result<Color, ColorError> {
    let s = s.trim().trim_start_matches('#');
    let channel = |range: std::ops::Range<usize>| {
        s.get(range)
            .and_then(|hex| u8::from_str_radix(hex, 16).ok())
            .ok_or(ColorError::InvalidHex)
    };

    match s.len() {
        3 => Ok(Color::Rgb(
            channel(0..1)? * 17,
            channel(1..2)? * 17,
            channel(2..3)? * 17,
        )),
        6 => Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        _ => Err(ColorError::InvalidLength),
    }
}

/// Serde deserializer for hex colors
pub mod serde_color {
    use super::*;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<Color>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let opt: Option<String> = Option::deserialize(deserializer)?;
        opt.map(|s| parse_hex_color(&s).map_err(serde::de::Error::custom))
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_6() {
        assert_eq!(parse_hex_color("#e0a526"), Ok(Color::Rgb(224, 165, 38)));
        assert_eq!(parse_hex_color("00ff00"), Ok(Color::Rgb(0, 255, 0)));
    }

    #[test]
    fn test_parse_hex_3() {
        assert_eq!(parse_hex_color("#f00"), Ok(Color::Rgb(255, 0, 0)));
        assert_eq!(parse_hex_color(" 0f0 "), Ok(Color::Rgb(0, 255, 0)));
    }

    #[test]
    fn test_parse_hex_invalid() {
        assert_eq!(parse_hex_color("#gg0000"), Err(ColorError::InvalidHex));
        assert_eq!(parse_hex_color("#ff00"), Err(ColorError::InvalidLength));
        // Multi-byte chars must not panic on slicing
        assert!(parse_hex_color("ééé").is_err());
    }

    #[test]
    fn test_presets() {
        assert!(Theme::from_preset("midnight").is_some());
        assert!(Theme::from_preset("Newsprint").is_some());
        assert!(Theme::from_preset("nord").is_some());
        assert!(Theme::from_preset("gruvbox-dark").is_some());
        assert!(Theme::from_preset("nonexistent").is_none());
    }
}
