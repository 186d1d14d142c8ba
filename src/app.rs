use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc::{self, UnboundedReceiver};

use crate::article::ArticleView;
use crate::config::Config;
use crate::home::{CardRef, HomeView};
use crate::navigation::{Action, ActionSender};
use crate::repository::PostsRepository;
use crate::ui::Theme;

/// Screen currently shown under the drawer
pub enum Screen {
    Home(HomeView),
    Article(ArticleView),
}

/// Destinations listed in the navigation drawer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerItem {
    Home,
    Quit,
}

impl DrawerItem {
    pub const ALL: [DrawerItem; 2] = [DrawerItem::Home, DrawerItem::Quit];

    pub fn label(self) -> &'static str {
        match self {
            DrawerItem::Home => "Home",
            DrawerItem::Quit => "Quit",
        }
    }

    fn action(self) -> Action {
        match self {
            DrawerItem::Home => Action::GoHome,
            DrawerItem::Quit => Action::Quit,
        }
    }
}

/// Navigation drawer overlay state
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DrawerState {
    selected: usize,
}

impl DrawerState {
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> DrawerItem {
        DrawerItem::ALL[self.selected]
    }
}

/// Application state
pub struct App {
    /// Current screen
    screen: Screen,
    /// Open drawer, drawn over the screen
    drawer: Option<DrawerState>,
    /// Source of posts for every screen entry
    repository: Box<dyn PostsRepository>,
    /// Configuration
    config: Config,
    /// Theme resolved from the config once at startup
    theme: Theme,
    /// Handed to screens as their navigator
    actions: ActionSender,
    /// Actions queued by screens, applied once per loop tick
    rx: UnboundedReceiver<Action>,
    /// Last error worth showing in the status bar
    notice: Option<String>,
    should_quit: bool,
}

impl App {
    /// Create the app and enter the home screen
    pub fn new(repository: Box<dyn PostsRepository>, config: Config) -> Result<Self> {
        let (tx, rx) = mpsc::unbounded_channel();
        let actions = ActionSender::new(tx);
        let home = HomeView::enter(
            repository.as_ref(),
            &config.feed,
            Arc::new(actions.clone()),
        )?;

        Ok(Self {
            screen: Screen::Home(home),
            drawer: None,
            repository,
            theme: config.resolve_theme(),
            config,
            actions,
            rx,
            notice: None,
            should_quit: false,
        })
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn home(&self) -> Option<&HomeView> {
        match &self.screen {
            Screen::Home(home) => Some(home),
            Screen::Article(_) => None,
        }
    }

    pub fn home_mut(&mut self) -> Option<&mut HomeView> {
        match &mut self.screen {
            Screen::Home(home) => Some(home),
            Screen::Article(_) => None,
        }
    }

    pub fn article_mut(&mut self) -> Option<&mut ArticleView> {
        match &mut self.screen {
            Screen::Article(article) => Some(article),
            Screen::Home(_) => None,
        }
    }

    pub fn drawer(&self) -> Option<&DrawerState> {
        self.drawer.as_ref()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Queue an action for the next [`App::process_actions`]
    pub fn send(&self, action: Action) {
        self.actions.send(action);
    }

    /// Apply every queued action, returns how many were applied
    pub fn process_actions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(action) = self.rx.try_recv() {
            self.dispatch(action);
            applied += 1;
        }
        applied
    }

    /// Apply one action
    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!("Dispatch {:?}", action);
        match action {
            Action::OpenArticle(id) => self.open_article(&id),
            Action::OpenDrawer => {
                if self.drawer.is_none() {
                    self.drawer = Some(DrawerState::default());
                }
            }
            Action::CloseDrawer => self.drawer = None,
            Action::GoHome => {
                self.drawer = None;
                self.go_home(None);
            }
            Action::Back => {
                if let Screen::Article(article) = &self.screen {
                    let origin = article.origin();
                    self.go_home(origin);
                }
            }
            Action::Refresh => {
                if let Some(home) = self.home() {
                    let focus = home.focus();
                    self.go_home(focus);
                }
            }
            Action::Quit => self.should_quit = true,
        }
    }

    fn open_article(&mut self, id: &str) {
        let (cached, origin) = match self.home() {
            Some(home) => (
                home.posts().iter().find(|post| post.id == id).cloned(),
                home.focus(),
            ),
            None => (None, None),
        };

        let post = match cached {
            Some(post) => Some(post),
            None => match self.repository.get_post(id) {
                Ok(post) => post,
                Err(e) => {
                    tracing::error!("Failed to load article {}: {:#}", id, e);
                    self.notice = Some(format!("Could not load article: {e}"));
                    return;
                }
            },
        };

        match post {
            Some(post) => {
                tracing::info!("Opening article {}", post.id);
                self.notice = None;
                self.screen = Screen::Article(ArticleView::new(post, origin));
            }
            None => tracing::warn!("No article with id {}", id),
        }
    }

    /// Replace the current screen with a fresh home screen
    fn go_home(&mut self, focus: Option<CardRef>) {
        let navigator = Arc::new(self.actions.clone());
        match HomeView::enter(self.repository.as_ref(), &self.config.feed, navigator) {
            Ok(mut home) => {
                if let Some(card) = focus {
                    home.set_focus(card);
                }
                self.notice = None;
                self.screen = Screen::Home(home);
            }
            Err(e) => {
                tracing::error!("Failed to load home: {:#}", e);
                self.notice = Some(format!("Could not load feed: {e}"));
            }
        }
    }

    pub fn drawer_next(&mut self) {
        if let Some(drawer) = &mut self.drawer {
            drawer.selected = (drawer.selected + 1).min(DrawerItem::ALL.len() - 1);
        }
    }

    pub fn drawer_previous(&mut self) {
        if let Some(drawer) = &mut self.drawer {
            drawer.selected = drawer.selected.saturating_sub(1);
        }
    }

    /// Trigger the highlighted drawer destination
    pub fn drawer_select(&mut self) {
        if let Some(drawer) = self.drawer.take() {
            self.dispatch(drawer.selected_item().action());
        }
    }
}
