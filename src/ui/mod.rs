//! UI module - handles all TUI rendering
//!
//! Structure:
//! - `draw/` - Screen draw functions
//! - `theme.rs` - Color themes and presets
//! - `layout.rs` - Home list layout and scrolling
//! - `post_card.rs` - History and popular card widgets
//! - `text.rs` - Truncation and word wrap

mod draw;
pub mod layout;
pub mod post_card;
pub mod text;
pub mod theme;

// Re-export main draw function
pub use draw::draw;

pub use theme::Theme;
