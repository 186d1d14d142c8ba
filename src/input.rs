//! Keyboard handling.
//!
//! Keys are routed to the drawer when it is open, otherwise to the current
//! screen. Screen changes go through actions so they are applied in one
//! place by [`App::process_actions`].

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, Screen};
use crate::navigation::Action;

/// Lines scrolled per page in the article view
const ARTICLE_PAGE: u16 = 10;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.send(Action::Quit);
        return;
    }

    if app.drawer().is_some() {
        handle_drawer_key(app, key.code);
        return;
    }

    match app.screen() {
        Screen::Home(_) => handle_home_key(app, key.code),
        Screen::Article(_) => handle_article_key(app, key.code),
    }
}

fn handle_drawer_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc | KeyCode::Char('m') => app.send(Action::CloseDrawer),
        KeyCode::Up | KeyCode::Char('k') => app.drawer_previous(),
        KeyCode::Down | KeyCode::Char('j') => app.drawer_next(),
        KeyCode::Enter => app.drawer_select(),
        KeyCode::Char('q') => app.send(Action::Quit),
        _ => {}
    }
}

fn handle_home_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.send(Action::Quit);
            return;
        }
        KeyCode::Char('r') => {
            app.send(Action::Refresh);
            return;
        }
        _ => {}
    }

    let Some(home) = app.home_mut() else { return };
    match code {
        KeyCode::Up | KeyCode::Char('k') => home.focus_previous(),
        KeyCode::Down | KeyCode::Char('j') => home.focus_next(),
        KeyCode::Left | KeyCode::Char('h') => home.focus_left(),
        KeyCode::Right | KeyCode::Char('l') => home.focus_right(),
        KeyCode::Enter => home.activate(),
        KeyCode::Char('m') => home.open_drawer(),
        _ => {}
    }
}

fn handle_article_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('h') | KeyCode::Left => {
            app.send(Action::Back);
            return;
        }
        KeyCode::Char('q') => {
            app.send(Action::Quit);
            return;
        }
        _ => {}
    }

    let Some(article) = app.article_mut() else { return };
    match code {
        KeyCode::Down | KeyCode::Char('j') => article.scroll_down(1),
        KeyCode::Up | KeyCode::Char('k') => article.scroll_up(1),
        KeyCode::PageDown | KeyCode::Char(' ') => article.scroll_down(ARTICLE_PAGE),
        KeyCode::PageUp => article.scroll_up(ARTICLE_PAGE),
        KeyCode::Char('g') | KeyCode::Home => article.scroll_to_top(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::tests::app_with;
    use crate::home::CardRef;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::from(code));
        app.process_actions();
    }

    #[test]
    fn test_home_keys_open_article() {
        let (mut app, _) = app_with(5);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.home().unwrap().focus(), Some(CardRef::popular(1)));

        press(&mut app, KeyCode::Enter);
        match app.screen() {
            Screen::Article(article) => assert_eq!(article.post().id, "post-4"),
            Screen::Home(_) => panic!("expected article screen"),
        }

        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.article_mut().unwrap().scroll(), 1);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.home().unwrap().focus(), Some(CardRef::popular(1)));
    }

    #[test]
    fn test_quit_keys() {
        let (mut app, _) = app_with(5);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit());

        let (mut app, _) = app_with(5);
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        app.process_actions();
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn test_drawer_keys() {
        let (mut app, _) = app_with(5);
        press(&mut app, KeyCode::Char('m'));
        app.home_mut().unwrap().scope_mut().settle().await;
        app.process_actions();
        assert!(app.drawer().is_some());

        // Navigation keys go to the drawer, not the home list
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.home().unwrap().focus(), Some(CardRef::recent(0)));
        assert_eq!(app.drawer().unwrap().selected(), 1);

        press(&mut app, KeyCode::Esc);
        assert!(app.drawer().is_none());
        assert!(!app.should_quit());
    }
}
