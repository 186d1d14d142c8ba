//! Navigation drawer overlay

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{DrawerItem, DrawerState};
use crate::config::Config;
use crate::ui::theme::Theme;

/// Widest the drawer gets, in columns
const DRAWER_WIDTH: u16 = 28;

pub(crate) fn draw_drawer(f: &mut Frame, drawer: &DrawerState, config: &Config, theme: &Theme) {
    let screen = f.area();
    let area = Rect {
        width: DRAWER_WIDTH.min(screen.width),
        ..screen
    };
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(theme.divider))
        .style(Style::default().bg(theme.app_bar_bg));

    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {}", config.appearance.title),
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];

    for (index, item) in DrawerItem::ALL.iter().enumerate() {
        let line = if index == drawer.selected() {
            Line::styled(
                format!(" ● {}", item.label()),
                Style::default()
                    .fg(theme.selection_fg)
                    .bg(theme.selection_bg)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Line::styled(
                format!("   {}", item.label()),
                Style::default().fg(theme.app_bar_fg),
            )
        };
        lines.push(line);
    }

    let menu = Paragraph::new(lines).block(block);
    f.render_widget(menu, area);
}
