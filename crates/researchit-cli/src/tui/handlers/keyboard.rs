//! Keyboard event handlers
//!
//! Arrow keys are explicit navigation controls: they bypass the gesture
//! interpreter and call paginate directly. The search view owns character
//! input while active.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyModifiers};

use crate::tui::app::{App, View};

impl App {
    /// Main keyboard event dispatcher
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        // Ctrl+Q always quits, even while typing
        if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('q') {
            self.should_quit = true;
            return;
        }

        if code == KeyCode::Tab {
            self.cycle_view();
            return;
        }

        match self.view {
            View::Home => self.handle_home_key(code),
            View::Browse => self.handle_browse_key(code),
            View::Search => self.handle_search_key(code),
        }
    }

    fn handle_home_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('/') | KeyCode::Char('s') => self.view = View::Search,
            KeyCode::Char('b') => self.view = View::Browse,
            // Explicit navigation: direct paginate, no threshold or filter.
            // The engine clamps at the edges; the view hides the hint there.
            KeyCode::Down | KeyCode::Char('j') | KeyCode::PageDown => {
                let _ = self.home.paginate(1, Instant::now());
            }
            KeyCode::Up | KeyCode::Char('k') | KeyCode::PageUp => {
                let _ = self.home.paginate(-1, Instant::now());
            }
            _ => {}
        }
    }

    fn handle_browse_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('/') | KeyCode::Char('s') => self.view = View::Search,
            KeyCode::Char('h') => self.view = View::Home,
            KeyCode::Down | KeyCode::Char('j') => self.scroll_browse(1.0),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_browse(-1.0),
            KeyCode::Home => {
                self.browse_scroll = 0.0;
                self.resync_browse();
            }
            _ => {}
        }
    }

    fn handle_search_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.view = View::Home,
            KeyCode::Enter => self.submit_search(),
            KeyCode::Backspace => {
                self.search.input.pop();
            }
            KeyCode::Down => {
                self.search.scroll = self
                    .search
                    .scroll
                    .saturating_add(1)
                    .min(self.search.max_scroll);
            }
            KeyCode::Up => {
                self.search.scroll = self.search.scroll.saturating_sub(1);
            }
            KeyCode::Char(c) => self.search.input.push(c),
            _ => {}
        }
    }
}
