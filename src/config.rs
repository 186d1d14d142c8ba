use anyhow::{Context, Result};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::insets::Insets;
use crate::sections::{DEFAULT_POPULAR, DEFAULT_RECENT};
use crate::ui::theme::{serde_color, Theme};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub appearance: AppearanceConfig,
    pub feed: FeedConfig,
    pub layout: LayoutConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Title shown in the top bar
    pub title: String,
    /// Theme preset name
    pub theme: String,
    /// Accent color override, "#rrggbb"
    #[serde(
        default,
        deserialize_with = "serde_color::deserialize_option",
        skip_serializing
    )]
    pub accent: Option<Color>,
    /// Glyph of the drawer control in the top bar
    pub nav_icon: String,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            title: "Newsdesk".to_string(),
            theme: "midnight".to_string(),
            accent: None,
            nav_icon: "☰".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// JSON posts file; the bundled feed is used when unset
    pub posts_file: Option<String>,
    /// Number of history cards
    pub recent_count: usize,
    /// Number of popular cards
    pub popular_count: usize,
    /// Refuse to render when the feed cannot fill every card
    pub strict_sections: bool,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            posts_file: None,
            recent_count: DEFAULT_RECENT,
            popular_count: DEFAULT_POPULAR,
            strict_sections: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Rows covered by the status bar at the bottom of the screen
    pub bottom_inset: u16,
    /// Extra rows above the first history card
    pub extra_top_padding: Option<u16>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            bottom_inset: 1,
            extra_top_padding: None,
        }
    }
}

impl LayoutConfig {
    pub fn system_insets(&self) -> Insets {
        Insets::bottom_bar(self.bottom_inset)
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path);
        let path = Path::new(expanded.as_ref());

        if path.exists() {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            Self::parse(&content)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            tracing::info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Theme preset with the accent override applied
    pub fn resolve_theme(&self) -> Theme {
        let mut theme = Theme::from_preset(&self.appearance.theme).unwrap_or_else(|| {
            tracing::warn!(
                "Unknown theme '{}', falling back to default",
                self.appearance.theme
            );
            Theme::default()
        });
        if let Some(accent) = self.appearance.accent {
            theme.accent = accent;
        }
        theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.appearance.title, "Newsdesk");
        assert_eq!(config.feed.recent_count, 3);
        assert_eq!(config.feed.popular_count, 2);
        assert!(!config.feed.strict_sections);
        assert_eq!(config.layout.bottom_inset, 1);
        assert!(config.appearance.accent.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = Config::parse(
            r##"
            [appearance]
            title = "Morning Brief"
            theme = "nord"
            accent = "#ff8800"

            [feed]
            posts_file = "~/news.json"
            strict_sections = true

            [layout]
            bottom_inset = 2
            extra_top_padding = 1
            "##,
        )
        .unwrap();

        assert_eq!(config.appearance.title, "Morning Brief");
        assert_eq!(config.appearance.accent, Some(Color::Rgb(255, 136, 0)));
        assert_eq!(config.feed.posts_file.as_deref(), Some("~/news.json"));
        assert_eq!(config.feed.recent_count, 3);
        assert!(config.feed.strict_sections);
        assert_eq!(config.layout.system_insets().bottom, 2);
        assert_eq!(config.layout.extra_top_padding, Some(1));
    }

    #[test]
    fn test_invalid_accent() {
        assert!(Config::parse("[appearance]\naccent = \"#zzzzzz\"").is_err());
    }

    #[test]
    fn test_resolve_theme() {
        let mut config = Config::default();
        config.appearance.theme = "gruvbox".to_string();
        assert_eq!(config.resolve_theme().background, Theme::gruvbox().background);

        config.appearance.accent = Some(Color::Rgb(1, 2, 3));
        assert_eq!(config.resolve_theme().accent, Color::Rgb(1, 2, 3));

        config.appearance.theme = "nonexistent".to_string();
        assert_eq!(config.resolve_theme().background, Theme::default().background);
    }

    #[test]
    fn test_load_missing_file() {
        let config = Config::load("/nonexistent/newsdesk/config.toml").unwrap();
        assert_eq!(config.feed.recent_count, 3);
    }
}
