//! Article detail screen state.

use crate::home::CardRef;
use crate::post::Post;

pub struct ArticleView {
    post: Post,
    /// First visible line of the wrapped body
    scroll: u16,
    /// Card to refocus when returning home
    origin: Option<CardRef>,
}

impl ArticleView {
    pub fn new(post: Post, origin: Option<CardRef>) -> Self {
        Self {
            post,
            scroll: 0,
            origin,
        }
    }

    pub fn post(&self) -> &Post {
        &self.post
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn origin(&self) -> Option<CardRef> {
        self.origin
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    /// Keep the scroll offset within a body of `content_lines` shown in `viewport` rows
    pub fn clamp_scroll(&mut self, content_lines: u16, viewport: u16) {
        self.scroll = self.scroll.min(content_lines.saturating_sub(viewport));
    }
}
