//! Home screen state.
//!
//! A [`HomeView`] lives for one visit to the home screen: it fetches the
//! feed on entry, splits it into sections, tracks which card has focus and
//! forwards activations to its [`HomeNavigator`]. Dropping the view cancels
//! any drawer dispatch still queued on its scope.

use std::sync::Arc;

use anyhow::Result;

use crate::config::FeedConfig;
use crate::navigation::HomeNavigator;
use crate::post::Post;
use crate::repository::PostsRepository;
use crate::scope::ViewScope;
use crate::sections::{HomeSections, Section};

/// A card on the home screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardRef {
    pub section: Section,
    pub index: usize,
}

impl CardRef {
    pub fn recent(index: usize) -> Self {
        Self {
            section: Section::Recent,
            index,
        }
    }

    pub fn popular(index: usize) -> Self {
        Self {
            section: Section::Popular,
            index,
        }
    }
}

pub struct HomeView {
    posts: Vec<Post>,
    sections: HomeSections,
    focus: Option<CardRef>,
    navigator: Arc<dyn HomeNavigator>,
    scope: ViewScope,
}

impl HomeView {
    /// Fetch posts and build the view for one screen entry
    pub fn enter(
        repository: &dyn PostsRepository,
        feed: &FeedConfig,
        navigator: Arc<dyn HomeNavigator>,
    ) -> Result<Self> {
        let posts = repository.get_posts()?;
        tracing::info!("Home: loaded {} posts", posts.len());

        let sections = if feed.strict_sections {
            HomeSections::partition_strict(posts.len(), feed.recent_count, feed.popular_count)?
        } else {
            let sections =
                HomeSections::partition(posts.len(), feed.recent_count, feed.popular_count);
            let shown = sections.len(Section::Recent) + sections.len(Section::Popular);
            let wanted = feed.recent_count.saturating_add(feed.popular_count);
            if shown < wanted {
                tracing::warn!(
                    "Feed has {} posts, showing {} of {} cards",
                    posts.len(),
                    shown,
                    wanted
                );
            }
            sections
        };

        Ok(Self::new(posts, sections, navigator))
    }

    pub fn new(posts: Vec<Post>, sections: HomeSections, navigator: Arc<dyn HomeNavigator>) -> Self {
        let mut view = Self {
            posts,
            sections,
            focus: None,
            navigator,
            scope: ViewScope::new("home"),
        };
        view.focus = view.first_card();
        view
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn sections(&self) -> &HomeSections {
        &self.sections
    }

    /// Posts of one section, in order
    pub fn section_posts(&self, section: Section) -> &[Post] {
        self.sections.slice(section, &self.posts)
    }

    pub fn post(&self, card: CardRef) -> Option<&Post> {
        self.sections
            .post_index(card.section, card.index)
            .map(|i| &self.posts[i])
    }

    pub fn focus(&self) -> Option<CardRef> {
        self.focus
    }

    /// Move focus to `card` if it exists
    pub fn set_focus(&mut self, card: CardRef) {
        if self.post(card).is_some() {
            self.focus = Some(card);
        }
    }

    fn first_card(&self) -> Option<CardRef> {
        [CardRef::recent(0), CardRef::popular(0)]
            .into_iter()
            .find(|card| self.post(*card).is_some())
    }

    /// Move focus down: through the history cards, then into the popular row
    pub fn focus_next(&mut self) {
        let Some(focus) = self.focus else { return };
        if focus.section == Section::Recent {
            let next = CardRef::recent(focus.index + 1);
            if self.post(next).is_some() {
                self.focus = Some(next);
            } else if !self.sections.is_empty(Section::Popular) {
                self.focus = Some(CardRef::popular(0));
            }
        }
    }

    /// Move focus up: out of the popular row onto the last history card
    pub fn focus_previous(&mut self) {
        let Some(focus) = self.focus else { return };
        match focus.section {
            Section::Recent => {
                self.focus = Some(CardRef::recent(focus.index.saturating_sub(1)));
            }
            Section::Popular => {
                let recent = self.sections.len(Section::Recent);
                if recent > 0 {
                    self.focus = Some(CardRef::recent(recent - 1));
                }
            }
        }
    }

    /// Move focus left within the popular row
    pub fn focus_left(&mut self) {
        if let Some(focus) = self.focus {
            if focus.section == Section::Popular {
                self.focus = Some(CardRef::popular(focus.index.saturating_sub(1)));
            }
        }
    }

    /// Move focus right within the popular row
    pub fn focus_right(&mut self) {
        if let Some(focus) = self.focus {
            let next = CardRef::popular(focus.index + 1);
            if focus.section == Section::Popular && self.post(next).is_some() {
                self.focus = Some(next);
            }
        }
    }

    /// Activate the focused card
    pub fn activate(&self) {
        if let Some(card) = self.focus {
            self.activate_card(card);
        }
    }

    /// Navigate to the article behind `card`
    pub fn activate_card(&self, card: CardRef) {
        match self.post(card) {
            Some(post) => {
                tracing::debug!("Home: open article {}", post.id);
                self.navigator.navigate_to_article(&post.id);
            }
            None => tracing::warn!("Home: no post for card {:?}", card),
        }
    }

    /// Ask for the drawer without blocking the caller
    pub fn open_drawer(&mut self) {
        let navigator = Arc::clone(&self.navigator);
        self.scope.launch(async move {
            navigator.open_drawer();
        });
    }

    #[cfg(test)]
    pub fn scope_mut(&mut self) -> &mut ViewScope {
        &mut self.scope
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::post::fixtures;
    use crate::repository::RepositoryError;
    use crate::sections::SectionError;
    use parking_lot::Mutex;

    /// Navigator that records every callback
    #[derive(Default)]
    pub(crate) struct RecordingNavigator {
        pub articles: Mutex<Vec<String>>,
        pub drawer_opens: Mutex<usize>,
    }

    impl HomeNavigator for RecordingNavigator {
        fn navigate_to_article(&self, post_id: &str) {
            self.articles.lock().push(post_id.to_string());
        }

        fn open_drawer(&self) {
            *self.drawer_opens.lock() += 1;
        }
    }

    struct FixedRepository(usize);

    impl PostsRepository for FixedRepository {
        fn get_posts(&self) -> Result<Vec<Post>, RepositoryError> {
            Ok(fixtures::posts(self.0))
        }
    }

    pub(crate) fn view_with(count: usize) -> (HomeView, Arc<RecordingNavigator>) {
        let navigator = Arc::new(RecordingNavigator::default());
        let view = HomeView::enter(
            &FixedRepository(count),
            &FeedConfig::default(),
            navigator.clone(),
        )
        .unwrap();
        (view, navigator)
    }

    #[test]
    fn test_enter_partitions_feed() {
        let (view, _) = view_with(7);
        let recent: Vec<_> = view.section_posts(Section::Recent).iter().map(|p| &p.id).collect();
        let popular: Vec<_> = view.section_posts(Section::Popular).iter().map(|p| &p.id).collect();
        assert_eq!(recent, ["post-0", "post-1", "post-2"]);
        assert_eq!(popular, ["post-3", "post-4"]);
        assert_eq!(view.focus(), Some(CardRef::recent(0)));
    }

    #[test]
    fn test_enter_strict_fails_on_short_feed() {
        let feed = FeedConfig {
            strict_sections: true,
            ..FeedConfig::default()
        };
        let navigator = Arc::new(RecordingNavigator::default());
        let err = HomeView::enter(&FixedRepository(4), &feed, navigator)
            .err()
            .unwrap();
        assert_eq!(
            err.downcast_ref::<SectionError>(),
            Some(&SectionError::NotEnoughPosts {
                required: 5,
                available: 4
            })
        );
    }

    #[test]
    fn test_enter_clamps_short_feed() {
        let (view, _) = view_with(4);
        assert_eq!(view.section_posts(Section::Recent).len(), 3);
        assert_eq!(view.section_posts(Section::Popular).len(), 1);

        let (view, _) = view_with(0);
        assert_eq!(view.focus(), None);
        view.activate();
    }

    #[test]
    fn test_activate_each_card_once() {
        let (view, navigator) = view_with(5);
        let cards = [
            CardRef::recent(0),
            CardRef::recent(1),
            CardRef::recent(2),
            CardRef::popular(0),
            CardRef::popular(1),
        ];
        for (n, card) in cards.into_iter().enumerate() {
            view.activate_card(card);
            let articles = navigator.articles.lock();
            assert_eq!(articles.len(), n + 1);
            assert_eq!(articles[n], format!("post-{n}"));
        }
    }

    #[test]
    fn test_activate_missing_card_is_noop() {
        let (view, navigator) = view_with(5);
        view.activate_card(CardRef::popular(2));
        assert!(navigator.articles.lock().is_empty());
    }

    #[test]
    fn test_focus_navigation() {
        let (mut view, _) = view_with(5);

        view.focus_previous();
        assert_eq!(view.focus(), Some(CardRef::recent(0)));

        view.focus_next();
        view.focus_next();
        assert_eq!(view.focus(), Some(CardRef::recent(2)));

        // Left/right do nothing in the history list
        view.focus_right();
        assert_eq!(view.focus(), Some(CardRef::recent(2)));

        view.focus_next();
        assert_eq!(view.focus(), Some(CardRef::popular(0)));

        view.focus_right();
        assert_eq!(view.focus(), Some(CardRef::popular(1)));
        view.focus_right();
        assert_eq!(view.focus(), Some(CardRef::popular(1)));

        // Down from the last row stays put
        view.focus_next();
        assert_eq!(view.focus(), Some(CardRef::popular(1)));

        view.focus_left();
        assert_eq!(view.focus(), Some(CardRef::popular(0)));

        view.focus_previous();
        assert_eq!(view.focus(), Some(CardRef::recent(2)));
    }

    #[test]
    fn test_activate_focused() {
        let (mut view, navigator) = view_with(5);
        for _ in 0..3 {
            view.focus_next();
        }
        view.focus_right();
        view.activate();
        assert_eq!(*navigator.articles.lock(), ["post-4"]);
    }

    #[test]
    fn test_set_focus_ignores_missing_card() {
        let (mut view, _) = view_with(4);
        view.set_focus(CardRef::popular(1));
        assert_eq!(view.focus(), Some(CardRef::recent(0)));
        view.set_focus(CardRef::popular(0));
        assert_eq!(view.focus(), Some(CardRef::popular(0)));
    }

    #[tokio::test]
    async fn test_open_drawer_is_async_and_once() {
        let (mut view, navigator) = view_with(5);

        view.open_drawer();
        // Dispatch returned before the callback ran
        assert_eq!(*navigator.drawer_opens.lock(), 0);

        view.scope_mut().settle().await;
        assert_eq!(*navigator.drawer_opens.lock(), 1);
    }

    #[tokio::test]
    async fn test_drawer_dispatch_cancelled_with_view() {
        let (mut view, navigator) = view_with(5);
        view.open_drawer();
        drop(view);

        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
        assert_eq!(*navigator.drawer_opens.lock(), 0);
    }
}
