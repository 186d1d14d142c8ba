//! Post card widgets for the home screen
//!
//! History cards are flat three-line rows:
//! - Title (bold)
//! - Author · date · reading time (dimmed)
//! - Publication (more dimmed)
//!
//! Popular cards are bordered boxes laid out side by side, with the title
//! wrapped over two lines.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::border,
    widgets::{Block, Widget},
};

use super::text::{truncate, wrap};
use super::theme::Theme;
use crate::post::Post;

/// Marker drawn left of the focused history card
const FOCUS_MARKER: &str = "▌";

fn fill_background(area: Rect, buf: &mut Buffer, bg: Color) {
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_bg(bg);
            }
        }
    }
}

/// Stacked card in the history section
pub struct HistoryCard<'a> {
    post: &'a Post,
    theme: &'a Theme,
    selected: bool,
}

impl<'a> HistoryCard<'a> {
    pub fn new(post: &'a Post, theme: &'a Theme) -> Self {
        Self {
            post,
            theme,
            selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl Widget for HistoryCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 3 || area.height == 0 {
            return;
        }

        let bg = if self.selected { self.theme.selection_bg } else { self.theme.background };
        let fg = if self.selected { self.theme.selection_fg } else { self.theme.foreground };
        fill_background(area, buf, bg);

        if self.selected {
            let marker = Style::default().fg(self.theme.accent).bg(bg);
            for y in area.top()..area.bottom() {
                buf.set_string(area.x, y, FOCUS_MARKER, marker);
            }
        }

        let text_x = area.x + 2;
        let width = area.width.saturating_sub(3) as usize;

        let lines = [
            (
                self.post.title.clone(),
                Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD),
            ),
            (
                self.post.byline(),
                Style::default().fg(self.theme.dimmed).bg(bg),
            ),
            (
                self.post
                    .publication
                    .as_ref()
                    .map(|p| p.name.clone())
                    .unwrap_or_default(),
                Style::default().fg(self.theme.dimmed_alt).bg(bg),
            ),
        ];

        for (offset, (text, style)) in lines.iter().enumerate() {
            let y = area.y + offset as u16;
            if y >= area.bottom() {
                break;
            }
            buf.set_string(text_x, y, truncate(text, width), *style);
        }
    }
}

/// Boxed card in the popular row
pub struct PopularCard<'a> {
    post: &'a Post,
    theme: &'a Theme,
    selected: bool,
}

impl<'a> PopularCard<'a> {
    pub fn new(post: &'a Post, theme: &'a Theme) -> Self {
        Self {
            post,
            theme,
            selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl Widget for PopularCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height < 3 {
            return;
        }

        let bg = if self.selected { self.theme.selection_bg } else { self.theme.background };
        let fg = if self.selected { self.theme.selection_fg } else { self.theme.foreground };
        let border_color = if self.selected { self.theme.accent } else { self.theme.divider };

        let block = Block::bordered()
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(border_color).bg(bg))
            .style(Style::default().bg(bg));
        let inner = block.inner(area);
        block.render(area, buf);

        let width = inner.width.saturating_sub(1) as usize;
        let text_x = inner.x + 1;
        let mut y = inner.y;

        // Title gets whatever the two metadata lines leave over, at most two lines
        let title_lines = inner.height.saturating_sub(2).clamp(1, 2) as usize;
        let title_style = Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD);
        for line in wrap(&self.post.title, width, title_lines) {
            if y >= inner.bottom() {
                return;
            }
            buf.set_string(text_x, y, line, title_style);
            y += 1;
        }

        if y < inner.bottom() {
            let style = Style::default().fg(self.theme.dimmed).bg(bg);
            buf.set_string(text_x, y, truncate(&self.post.short_byline(), width), style);
            y += 1;
        }

        if y < inner.bottom() {
            if let Some(publication) = &self.post.publication {
                let style = Style::default().fg(self.theme.dimmed_alt).bg(bg);
                buf.set_string(text_x, y, truncate(&publication.name, width), style);
            }
        }
    }
}

/// Horizontal rule between list items
pub struct Divider<'a> {
    theme: &'a Theme,
}

impl<'a> Divider<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for Divider<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let style = Style::default().fg(self.theme.divider).bg(self.theme.background);
        let rule = border::PLAIN.horizontal_top.repeat(area.width as usize);
        buf.set_string(area.x, area.y, rule, style);
    }
}
