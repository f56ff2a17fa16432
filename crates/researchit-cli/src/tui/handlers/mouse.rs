//! Mouse event handling
//!
//! Wheel input is the gesture source for the carousel: each notch carries a
//! conventional delta quantum, and the engine's interpreter decides whether
//! it becomes a transition. On the browse view the wheel scrolls the list
//! and the current index re-derives from marker positions instead.

use std::time::Instant;

use crossterm::event::{MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use researchit_core::constants::carousel::WHEEL_NOTCH_DELTA;

use crate::tui::app::{App, View};

/// Scroll direction for routing
#[derive(Clone, Copy)]
enum ScrollDirection {
    Up,
    Down,
}

impl ScrollDirection {
    /// Signed wheel delta: down is positive, matching the web convention
    /// the gesture thresholds were tuned for.
    fn wheel_delta(self) -> f32 {
        match self {
            ScrollDirection::Down => WHEEL_NOTCH_DELTA,
            ScrollDirection::Up => -WHEEL_NOTCH_DELTA,
        }
    }
}

impl App {
    /// Handle mouse events for scrolling
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::ScrollDown => {
                self.handle_scroll(mouse.column, mouse.row, ScrollDirection::Down);
            }
            MouseEventKind::ScrollUp => {
                self.handle_scroll(mouse.column, mouse.row, ScrollDirection::Up);
            }
            _ => {}
        }
    }

    /// Handle scroll in either direction. Events land only in the region
    /// cached for the active view at render time; the bars are inert.
    fn handle_scroll(&mut self, x: u16, y: u16, direction: ScrollDirection) {
        match self.view {
            View::Home => {
                // The interpreter applies threshold, cooldown, and boundary
                // checks; a dropped event is simply no transition.
                if hit(self.layout.home_area, x, y) {
                    self.home.wheel(direction.wheel_delta(), Instant::now());
                }
            }
            View::Browse => {
                // Scrolling the list column moves it; the side panels
                // re-key from the derived index.
                if hit(self.layout.browse_list_area, x, y) {
                    let step = match direction {
                        ScrollDirection::Down => 1.0,
                        ScrollDirection::Up => -1.0,
                    };
                    self.scroll_browse(step);
                }
            }
            View::Search => {
                if hit(self.layout.search_results_area, x, y) {
                    match direction {
                        ScrollDirection::Down => {
                            self.search.scroll = self
                                .search
                                .scroll
                                .saturating_add(2)
                                .min(self.search.max_scroll);
                        }
                        ScrollDirection::Up => {
                            self.search.scroll = self.search.scroll.saturating_sub(2);
                        }
                    }
                }
            }
        }
    }
}

/// Whether the event position falls inside a cached render area.
/// `None` (nothing rendered yet) swallows the event.
fn hit(area: Option<ratatui::layout::Rect>, x: u16, y: u16) -> bool {
    area.is_some_and(|a| a.contains(Position::new(x, y)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::layout::Rect;
    use researchit_core::Config;

    fn app() -> App {
        App::new(Config::default()).expect("app")
    }

    fn scroll_down(x: u16, y: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: x,
            row: y,
            modifiers: KeyModifiers::empty(),
        }
    }

    #[test]
    fn wheel_inside_the_carousel_area_advances() {
        let mut app = app();
        app.layout.home_area = Some(Rect::new(0, 2, 80, 20));

        app.handle_mouse_event(scroll_down(10, 10));
        assert_eq!(app.home.state().current_index(), 1);
    }

    #[test]
    fn wheel_on_the_bars_is_ignored() {
        let mut app = app();
        app.layout.home_area = Some(Rect::new(0, 2, 80, 20));

        // Row 0 is the top bar, outside the cached carousel area.
        app.handle_mouse_event(scroll_down(10, 0));
        assert_eq!(app.home.state().current_index(), 0);
    }

    #[test]
    fn wheel_on_the_browse_list_scrolls_it() {
        let mut app = app();
        app.view = View::Browse;
        app.layout.browse_list_area = Some(Rect::new(22, 2, 35, 20));

        app.handle_mouse_event(scroll_down(30, 10));
        assert!(app.browse_scroll > 0.0);

        // The side panels do not scroll the list.
        let before = app.browse_scroll;
        app.handle_mouse_event(scroll_down(5, 10));
        assert_eq!(app.browse_scroll, before);
    }
}
