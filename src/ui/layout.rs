//! Home list layout.
//!
//! The home screen is one tall virtual column:
//!
//! ```text
//! history card 0
//! ──────────────
//! history card 1
//! ──────────────
//! history card 2
//! ──────────────
//! Popular title
//! [card 0] [card 1] ->
//! ──────────────
//! ```
//!
//! [`HomeLayout`] places each slot at a virtual row and works out scroll
//! offsets that keep the focused card on screen.

use crate::home::CardRef;
use crate::sections::Section;

pub const HISTORY_CARD_HEIGHT: u16 = 3;
pub const DIVIDER_HEIGHT: u16 = 1;
pub const POPULAR_TITLE_HEIGHT: u16 = 1;
pub const POPULAR_CARD_HEIGHT: u16 = 6;
pub const POPULAR_CARD_WIDTH: u16 = 30;
pub const POPULAR_CARD_GAP: u16 = 2;

/// One item of the virtual column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    History(usize),
    Divider,
    PopularTitle,
    PopularRow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedSlot {
    pub slot: Slot,
    /// First virtual row
    pub y: u16,
    pub height: u16,
}

impl PlacedSlot {
    pub fn end(&self) -> u16 {
        self.y.saturating_add(self.height)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeLayout {
    slots: Vec<PlacedSlot>,
    content_height: u16,
}

impl HomeLayout {
    /// Place `recent` history cards and, when non-empty, the popular block.
    /// Rows past `u16::MAX` pile up on the last row and are never visible.
    pub fn build(recent: usize, popular: usize) -> Self {
        let mut slots = Vec::new();
        let mut y = 0u16;
        let mut place = |slot: Slot, height: u16| {
            slots.push(PlacedSlot { slot, y, height });
            y = y.saturating_add(height);
        };

        for index in 0..recent {
            place(Slot::History(index), HISTORY_CARD_HEIGHT);
            place(Slot::Divider, DIVIDER_HEIGHT);
        }

        if popular > 0 {
            place(Slot::PopularTitle, POPULAR_TITLE_HEIGHT);
            place(Slot::PopularRow, POPULAR_CARD_HEIGHT);
            place(Slot::Divider, DIVIDER_HEIGHT);
        }

        Self {
            content_height: y,
            slots,
        }
    }

    fn find(&self, slot: Slot) -> Option<&PlacedSlot> {
        self.slots.iter().find(|placed| placed.slot == slot)
    }

    /// Virtual rows that must be on screen for `card` to read well.
    /// Popular cards bring their section title along.
    pub fn card_span(&self, card: CardRef) -> Option<(u16, u16)> {
        match card.section {
            Section::Recent => self
                .find(Slot::History(card.index))
                .map(|placed| (placed.y, placed.end())),
            Section::Popular => {
                let title = self.find(Slot::PopularTitle)?;
                let row = self.find(Slot::PopularRow)?;
                Some((title.y, row.end()))
            }
        }
    }

    /// Vertical offset that keeps the focused card inside `viewport` rows
    pub fn scroll_offset(&self, focus: Option<CardRef>, viewport: u16) -> u16 {
        let max_offset = self.content_height.saturating_sub(viewport);
        let Some((start, end)) = focus.and_then(|card| self.card_span(card)) else {
            return 0;
        };

        let offset = if end > viewport {
            end - viewport
        } else {
            0
        };
        // A card taller than the viewport shows its top
        offset.min(start).min(max_offset)
    }

    /// Slots entirely inside the window `offset..offset + viewport`
    pub fn visible(&self, offset: u16, viewport: u16) -> impl Iterator<Item = &PlacedSlot> {
        let bottom = offset.saturating_add(viewport);
        self.slots.iter().filter(move |placed| {
            placed.y >= offset
                && placed
                    .y
                    .checked_add(placed.height)
                    .is_some_and(|end| end <= bottom)
        })
    }
}

/// Width of a popular card in a row `row_width` columns wide
pub fn popular_card_width(row_width: u16) -> u16 {
    POPULAR_CARD_WIDTH.min(row_width)
}

/// Horizontal offset of the popular row that keeps card `focused` in view
pub fn popular_row_offset(focused: usize, row_width: u16) -> u16 {
    let card_width = popular_card_width(row_width);
    let right_edge = popular_card_x(focused, row_width).saturating_add(card_width);
    right_edge.saturating_sub(row_width)
}

/// X position of card `index` relative to the row start, before scrolling
pub fn popular_card_x(index: usize, row_width: u16) -> u16 {
    let stride = popular_card_width(row_width).saturating_add(POPULAR_CARD_GAP);
    stride.saturating_mul(u16::try_from(index).unwrap_or(u16::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_full() {
        let layout = HomeLayout::build(3, 2);
        let kinds: Vec<Slot> = layout.slots.iter().map(|p| p.slot).collect();
        assert_eq!(
            kinds,
            [
                Slot::History(0),
                Slot::Divider,
                Slot::History(1),
                Slot::Divider,
                Slot::History(2),
                Slot::Divider,
                Slot::PopularTitle,
                Slot::PopularRow,
                Slot::Divider,
            ]
        );
        // 3 * (3 + 1) + 1 + 6 + 1
        assert_eq!(layout.content_height, 20);
        assert_eq!(layout.slots[6].y, 12);
    }

    #[test]
    fn test_build_many_cards_saturates() {
        let layout = HomeLayout::build(20_000, 2);
        assert_eq!(layout.content_height, u16::MAX);
        let last = layout.slots.last().unwrap();
        assert_eq!(last.y, u16::MAX);
        assert_eq!(last.end(), u16::MAX);

        // Focus deep in the list still yields an offset
        let offset = layout.scroll_offset(Some(CardRef::recent(19_999)), 20);
        assert!(offset <= u16::MAX - 20);
        assert_eq!(layout.visible(0, 8).count(), 4);
        // Slots pushed past the last row never show up
        assert!(layout
            .visible(u16::MAX - 20, 20)
            .all(|p| p.y < u16::MAX));
    }

    #[test]
    fn test_build_without_popular() {
        let layout = HomeLayout::build(2, 0);
        assert_eq!(layout.slots.len(), 4);
        assert!(layout
            .slots
            .iter()
            .all(|p| !matches!(p.slot, Slot::PopularTitle | Slot::PopularRow)));
        assert_eq!(layout.card_span(CardRef::popular(0)), None);
    }

    #[test]
    fn test_scroll_offset() {
        let layout = HomeLayout::build(3, 2);

        // Everything fits
        assert_eq!(layout.scroll_offset(Some(CardRef::popular(1)), 30), 0);

        // Small viewport: first card at top
        assert_eq!(layout.scroll_offset(Some(CardRef::recent(0)), 8), 0);
        // Card 2 spans rows 8..11
        assert_eq!(layout.scroll_offset(Some(CardRef::recent(2)), 8), 3);
        // Popular title + row span 12..19
        assert_eq!(layout.scroll_offset(Some(CardRef::popular(0)), 8), 11);
        assert_eq!(layout.scroll_offset(None, 8), 0);
    }

    #[test]
    fn test_scroll_offset_tiny_viewport() {
        let layout = HomeLayout::build(3, 2);
        // Popular span is taller than the viewport: show its top
        assert_eq!(layout.scroll_offset(Some(CardRef::popular(0)), 4), 12);
    }

    #[test]
    fn test_visible_window() {
        let layout = HomeLayout::build(3, 2);
        let visible: Vec<Slot> = layout.visible(3, 8).map(|p| p.slot).collect();
        assert_eq!(
            visible,
            [Slot::Divider, Slot::History(1), Slot::Divider, Slot::History(2)]
        );
    }

    #[test]
    fn test_popular_row_offset() {
        // Both cards fit in 62 columns
        assert_eq!(popular_row_offset(1, 62), 0);
        // 40 columns: second card ends at 32 + 30 = 62
        assert_eq!(popular_row_offset(0, 40), 0);
        assert_eq!(popular_row_offset(1, 40), 22);
        // Narrow row shrinks cards
        assert_eq!(popular_card_width(20), 20);
        assert_eq!(popular_card_x(1, 20), 22);
        assert_eq!(popular_row_offset(1, 20), 22);
    }

    #[test]
    fn test_popular_row_far_index() {
        assert_eq!(popular_card_x(2_100, 80), u16::MAX);
        assert_eq!(popular_card_x(usize::MAX, 80), u16::MAX);
        assert_eq!(popular_row_offset(2_100, 80), u16::MAX - 80);
    }
}
