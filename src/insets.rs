//! Safe-area insets for scrollable content.
//!
//! The status bar occupies the bottom rows of the screen and is drawn over
//! the content area. Content is padded so its last item can scroll clear of it.

use ratatui::widgets::Padding;

/// Rows reserved by screen chrome at the bottom edge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Insets {
    pub bottom: u16,
}

impl Insets {
    /// Insets of a status bar of `height` rows pinned to the bottom edge
    pub fn bottom_bar(height: u16) -> Self {
        Self { bottom: height }
    }
}

/// Bottom-only padding from the system insets, plus optional extra top padding
pub fn bottom_bar_padding(system: Insets, additional_top: Option<u16>) -> Padding {
    Padding {
        left: 0,
        right: 0,
        top: additional_top.unwrap_or(0),
        bottom: system.bottom,
    }
}
