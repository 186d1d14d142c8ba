//! Home screen drawing functions
//!
//! This module handles rendering the home feed:
//! - Top bar with the drawer control
//! - History cards separated by dividers
//! - Popular section title and its horizontally scrolling row
//! - Status bar over the bottom inset

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use super::{draw_status_bar, draw_top_bar};
use crate::config::Config;
use crate::home::{CardRef, HomeView};
use crate::insets::bottom_bar_padding;
use crate::sections::Section;
use crate::ui::layout::{
    popular_card_width, popular_card_x, popular_row_offset, HomeLayout, Slot,
};
use crate::ui::post_card::{Divider, HistoryCard, PopularCard};
use crate::ui::theme::Theme;

const HOME_HINTS: &str = "↑↓←→: move | Enter: open | m: menu | r: refresh | q: quit";

/// Draw the home screen
pub(crate) fn draw_home(
    f: &mut Frame,
    home: &HomeView,
    config: &Config,
    theme: &Theme,
    notice: Option<&str>,
) {
    let area = f.area();
    let bg_block = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(bg_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Top bar
            Constraint::Min(0),    // Feed, status bar drawn over its bottom inset
        ])
        .split(area);

    draw_top_bar(
        f,
        chunks[0],
        &config.appearance.nav_icon,
        &config.appearance.title,
        theme,
    );

    let body = chunks[1];
    if body.height == 0 {
        return;
    }

    let insets = config.layout.system_insets();
    let padding = bottom_bar_padding(insets, config.layout.extra_top_padding);
    let content = Block::default().padding(padding).inner(body);

    draw_feed(f, home, content, config, theme);

    let status_height = insets.bottom.min(body.height);
    if status_height > 0 {
        let status_area = Rect {
            y: body.bottom() - status_height,
            height: status_height,
            ..body
        };
        draw_status_bar(f, status_area, HOME_HINTS, notice, theme);
    }
}

/// Draw the scrollable list of sections into `area`
fn draw_feed(f: &mut Frame, home: &HomeView, area: Rect, config: &Config, theme: &Theme) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let sections = home.sections();
    let recent = home.section_posts(Section::Recent);
    let popular = home.section_posts(Section::Popular);

    if recent.is_empty() && popular.is_empty() {
        let empty = Paragraph::new("No posts to show")
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.dimmed).bg(theme.background));
        f.render_widget(empty, area);
        return;
    }

    let layout = HomeLayout::build(
        sections.len(Section::Recent),
        sections.len(Section::Popular),
    );
    let focus = home.focus();
    let offset = layout.scroll_offset(focus, area.height);

    for placed in layout.visible(offset, area.height) {
        let slot_area = Rect {
            x: area.x,
            y: area.y + (placed.y - offset),
            width: area.width,
            height: placed.height,
        };

        match placed.slot {
            Slot::History(index) => {
                let card = HistoryCard::new(&recent[index], theme)
                    .selected(focus == Some(CardRef::recent(index)));
                f.render_widget(card, slot_area);
            }
            Slot::Divider => f.render_widget(Divider::new(theme), slot_area),
            Slot::PopularTitle => {
                let title = Paragraph::new(format!(" Popular on {}", config.appearance.title))
                    .style(
                        Style::default()
                            .fg(theme.accent)
                            .bg(theme.background)
                            .add_modifier(Modifier::BOLD),
                    );
                f.render_widget(title, slot_area);
            }
            Slot::PopularRow => {
                let focused = match focus {
                    Some(CardRef {
                        section: Section::Popular,
                        index,
                    }) => Some(index),
                    _ => None,
                };
                draw_popular_row(f, home, focused, slot_area, theme);
            }
        }
    }
}

/// Draw the popular cards side by side, scrolled so the focused one is visible
fn draw_popular_row(
    f: &mut Frame,
    home: &HomeView,
    focused: Option<usize>,
    area: Rect,
    theme: &Theme,
) {
    let posts = home.section_posts(Section::Popular);
    let card_width = popular_card_width(area.width);
    let offset = popular_row_offset(focused.unwrap_or(0), area.width);

    for (index, post) in posts.iter().enumerate() {
        let x = popular_card_x(index, area.width);
        // Only cards entirely inside the row are drawn
        if x < offset || (x - offset).saturating_add(card_width) > area.width {
            continue;
        }

        let card_area = Rect {
            x: area.x + (x - offset),
            y: area.y,
            width: card_width,
            height: area.height,
        };
        let card = PopularCard::new(post, theme).selected(focused == Some(index));
        f.render_widget(card, card_area);
    }
}
