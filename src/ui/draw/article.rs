//! Article screen drawing

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Padding, Paragraph},
    Frame,
};

use super::{draw_status_bar, draw_top_bar};
use crate::article::ArticleView;
use crate::post::{ParagraphKind, Post};
use crate::ui::text::wrap;
use crate::ui::theme::Theme;
use unicode_width::UnicodeWidthStr;

const ARTICLE_HINTS: &str = "j/k: scroll | Space: page | g: top | Esc: back | q: quit";

pub(crate) fn draw_article(f: &mut Frame, article: &mut ArticleView, theme: &Theme) {
    let area = f.area();
    let bg_block = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(bg_block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Top bar
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let publication = article
        .post()
        .publication
        .as_ref()
        .map(|p| p.name.clone())
        .unwrap_or_default();
    draw_top_bar(f, chunks[0], "←", &publication, theme);

    let body = Block::default()
        .padding(Padding::horizontal(2))
        .inner(chunks[1]);
    if body.width > 0 && body.height > 0 {
        let lines = article_lines(article.post(), body.width as usize, theme);
        let total = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        article.clamp_scroll(total, body.height);

        let paragraph = Paragraph::new(lines)
            .style(Style::default().fg(theme.foreground).bg(theme.background))
            .scroll((article.scroll(), 0));
        f.render_widget(paragraph, body);
    }

    draw_status_bar(f, chunks[2], ARTICLE_HINTS, None, theme);
}

/// Pre-wrapped body lines, so the scroll range is known exactly
fn article_lines(post: &Post, width: usize, theme: &Theme) -> Vec<Line<'static>> {
    let base = Style::default().fg(theme.foreground).bg(theme.background);
    let mut lines = Vec::new();

    push_wrapped(
        &mut lines,
        &post.title,
        "",
        base.fg(theme.accent).add_modifier(Modifier::BOLD),
        width,
    );
    if let Some(subtitle) = &post.subtitle {
        push_wrapped(&mut lines, subtitle, "", base.add_modifier(Modifier::ITALIC), width);
    }
    push_wrapped(&mut lines, &post.byline(), "", base.fg(theme.dimmed), width);
    if let Some(url) = &post.metadata.author.url {
        push_wrapped(&mut lines, url, "", base.fg(theme.dimmed_alt), width);
    }
    if !post.url.is_empty() {
        push_wrapped(&mut lines, &post.url, "", base.fg(theme.dimmed_alt), width);
    }
    lines.push(Line::default());

    for paragraph in &post.paragraphs {
        let (prefix, style) = match paragraph.kind {
            ParagraphKind::Text => ("", base),
            ParagraphKind::Header => ("", base.fg(theme.accent).add_modifier(Modifier::BOLD)),
            ParagraphKind::Subhead => ("", base.add_modifier(Modifier::BOLD)),
            ParagraphKind::Quote => ("│ ", base.fg(theme.dimmed).add_modifier(Modifier::ITALIC)),
            ParagraphKind::Bullet => ("• ", base),
            ParagraphKind::Code => ("    ", base.fg(theme.dimmed)),
        };
        push_wrapped(&mut lines, &paragraph.text, prefix, style, width);
        lines.push(Line::default());
    }

    lines
}

/// Wrap `text` after `prefix`. Continuation lines repeat quote bars and
/// indent under bullets.
fn push_wrapped(
    lines: &mut Vec<Line<'static>>,
    text: &str,
    prefix: &str,
    style: Style,
    width: usize,
) {
    let prefix_width = prefix.width();
    let inner_width = width.saturating_sub(prefix_width).max(1);
    for (n, line) in wrap(text, inner_width, usize::MAX).into_iter().enumerate() {
        let lead = if n == 0 || prefix.trim().is_empty() || prefix.starts_with('│') {
            prefix.to_string()
        } else {
            " ".repeat(prefix_width)
        };
        lines.push(Line::styled(format!("{lead}{line}"), style));
    }
}
