//! Drawing functions for the TUI
//!
//! This module contains all rendering logic, split by screen:
//! - `home` - Top bar, history cards, popular row
//! - `article` - Article detail view
//! - `drawer` - Navigation drawer overlay

mod article;
mod drawer;
mod home;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Screen};
use crate::ui::theme::Theme;

use article::draw_article;
use drawer::draw_drawer;
use home::draw_home;

/// Main draw function
pub fn draw(f: &mut Frame, app: &mut App) {
    let theme = app.theme().clone();

    if let Some(article) = app.article_mut() {
        draw_article(f, article, &theme);
    } else if let Screen::Home(home) = app.screen() {
        draw_home(f, home, app.config(), &theme, app.notice());
    }

    if let Some(drawer) = app.drawer() {
        draw_drawer(f, drawer, app.config(), &theme);
    }
}

/// One-row app bar: navigation glyph followed by the title
pub(crate) fn draw_top_bar(f: &mut Frame, area: Rect, icon: &str, title: &str, theme: &Theme) {
    let style = Style::default().fg(theme.app_bar_fg).bg(theme.app_bar_bg);
    let line = Line::from(vec![
        Span::styled(format!(" {icon} "), style.fg(theme.accent)),
        Span::styled(format!(" {title}"), style.add_modifier(Modifier::BOLD)),
    ]);
    f.render_widget(Paragraph::new(line).style(style), area);
}

/// Hint line at the bottom of the screen, replaced by `notice` when set
pub(crate) fn draw_status_bar(
    f: &mut Frame,
    area: Rect,
    hints: &str,
    notice: Option<&str>,
    theme: &Theme,
) {
    let (text, fg) = match notice {
        Some(notice) => (format!(" {notice}"), theme.accent),
        None => (format!(" {hints}"), theme.dimmed),
    };
    let status = Paragraph::new(text).style(Style::default().fg(fg).bg(theme.background));
    f.render_widget(status, area);
}
