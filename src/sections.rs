//! Partition of the feed into the home screen sections.
//!
//! The first `recent` posts form the history section, the next `popular`
//! posts form the popular row. Sections are slices into the fetched list,
//! never copies.

use std::ops::Range;

use thiserror::Error;

use crate::post::Post;

/// Default number of history cards
pub const DEFAULT_RECENT: usize = 3;
/// Default number of popular cards
pub const DEFAULT_POPULAR: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SectionError {
    #[error("home screen needs {required} posts, feed has {available}")]
    NotEnoughPosts { required: usize, available: usize },
}

/// Which section a card belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Recent,
    Popular,
}

/// Index ranges of each section within the post list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeSections {
    recent: Range<usize>,
    popular: Range<usize>,
}

impl HomeSections {
    /// Partition with clamping: missing posts leave sections short or empty
    pub fn partition(total: usize, recent_len: usize, popular_len: usize) -> Self {
        let recent_end = recent_len.min(total);
        let popular_end = recent_end.saturating_add(popular_len).min(total);
        Self {
            recent: 0..recent_end,
            popular: recent_end..popular_end,
        }
    }

    /// Partition that requires every slot to be filled
    pub fn partition_strict(
        total: usize,
        recent_len: usize,
        popular_len: usize,
    ) -> Result<Self, SectionError> {
        let required = recent_len.saturating_add(popular_len);
        if total < required {
            return Err(SectionError::NotEnoughPosts {
                required,
                available: total,
            });
        }
        Ok(Self::partition(total, recent_len, popular_len))
    }

    pub fn range(&self, section: Section) -> Range<usize> {
        match section {
            Section::Recent => self.recent.clone(),
            Section::Popular => self.popular.clone(),
        }
    }

    pub fn len(&self, section: Section) -> usize {
        self.range(section).len()
    }

    pub fn is_empty(&self, section: Section) -> bool {
        self.len(section) == 0
    }

    /// Posts of a section, in feed order
    pub fn slice<'a>(&self, section: Section, posts: &'a [Post]) -> &'a [Post] {
        &posts[self.range(section)]
    }

    /// Index into the post list for the `index`-th card of a section
    pub fn post_index(&self, section: Section, index: usize) -> Option<usize> {
        let range = self.range(section);
        let idx = range.start + index;
        range.contains(&idx).then_some(idx)
    }
}
