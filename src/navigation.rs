//! Navigation callbacks and the actions they produce.
//!
//! Screens never switch screens themselves. They call a [`HomeNavigator`],
//! which queues an [`Action`] for the application loop to apply.

use tokio::sync::mpsc::UnboundedSender;

/// Requests handled by the application loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Show the article with this post id
    OpenArticle(String),
    OpenDrawer,
    CloseDrawer,
    /// Re-enter the home screen
    GoHome,
    /// Leave the current screen
    Back,
    /// Re-fetch posts for the current screen
    Refresh,
    Quit,
}

/// Callbacks the home screen invokes
pub trait HomeNavigator: Send + Sync {
    fn navigate_to_article(&self, post_id: &str);
    fn open_drawer(&self);
}

/// Navigator that forwards callbacks into the action channel
#[derive(Debug, Clone)]
pub struct ActionSender {
    tx: UnboundedSender<Action>,
}

impl ActionSender {
    pub fn new(tx: UnboundedSender<Action>) -> Self {
        Self { tx }
    }

    pub fn send(&self, action: Action) {
        if let Err(e) = self.tx.send(action) {
            // Receiver is gone while shutting down
            tracing::debug!("Dropped action {:?}", e.0);
        }
    }
}

impl HomeNavigator for ActionSender {
    fn navigate_to_article(&self, post_id: &str) {
        self.send(Action::OpenArticle(post_id.to_string()));
    }

    fn open_drawer(&self) {
        self.send(Action::OpenDrawer);
    }
}
