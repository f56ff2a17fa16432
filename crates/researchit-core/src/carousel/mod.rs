//! Carousel navigation engine
//!
//! One configurable engine drives both carousel variants:
//! - `GestureMode::WheelThrottled` - fullscreen carousel where a wheel gesture
//!   produces exactly one animated transition, gated by a threshold and a
//!   cooldown matched to the transition duration.
//! - `GestureMode::ScrollSync` - list carousel where the current index is
//!   continuously re-derived from scroll position with no throttling.
//!
//! The engine is pure state: it never spawns timers or attaches listeners.
//! Callers feed it input events together with the current `Instant`, so
//! dropping the engine drops every pending cooldown with it.

pub mod gesture;
pub mod state;
pub mod transition;

use std::sync::Arc;
use std::time::Instant;

use thiserror::Error;

pub use gesture::{nearest_marker, GestureInterpreter, GestureMode};
pub use state::{CarouselState, Direction, Slide};
pub use transition::TransitionPresenter;

use crate::constants::carousel as defaults;

/// Carousel error type
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarouselError {
    /// Constructed with zero slides
    #[error("carousel requires at least one slide")]
    EmptyDeck,

    /// `paginate` called with a delta outside {-1, +1}
    #[error("invalid paginate delta: {0} (expected -1 or +1)")]
    InvalidDelta(i32),
}

/// Tuning knobs for the navigation engine
#[derive(Debug, Clone)]
pub struct CarouselConfig {
    /// Gesture interpretation strategy
    pub mode: GestureMode,
    /// Minimum absolute wheel delta for a gesture to register
    pub scroll_threshold: f32,
    /// Cooldown after an accepted gesture
    pub cooldown: std::time::Duration,
    /// Enter/exit animation duration
    pub transition: std::time::Duration,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            mode: GestureMode::WheelThrottled,
            scroll_threshold: defaults::SCROLL_THRESHOLD,
            cooldown: defaults::GESTURE_COOLDOWN,
            transition: defaults::TRANSITION_DURATION,
        }
    }
}

impl CarouselConfig {
    /// Config for the continuous scroll-sync variant
    pub fn scroll_sync() -> Self {
        Self {
            mode: GestureMode::ScrollSync,
            ..Self::default()
        }
    }
}

/// The assembled navigation engine: index state, gesture interpreter, and
/// transition presenter behind one interface.
#[derive(Debug)]
pub struct Carousel {
    state: CarouselState,
    interpreter: GestureInterpreter,
    presenter: TransitionPresenter,
}

impl Carousel {
    /// Create an engine over a fixed, non-empty slide deck
    pub fn new(slides: impl Into<Arc<[Slide]>>, config: CarouselConfig) -> Result<Self, CarouselError> {
        let state = CarouselState::new(slides)?;
        let presenter = TransitionPresenter::new(config.transition);
        let interpreter = GestureInterpreter::new(config);
        Ok(Self {
            state,
            interpreter,
            presenter,
        })
    }

    /// Feed a raw wheel event. Returns true if it produced a transition.
    pub fn wheel(&mut self, delta_y: f32, now: Instant) -> bool {
        let Some(delta) = self.interpreter.on_wheel(&self.state, delta_y, now) else {
            return false;
        };
        // The interpreter pre-checked the boundary, so this always moves.
        match self.state.paginate(delta) {
            Ok(true) => {
                self.presenter.begin(self.state.direction(), now);
                true
            }
            _ => false,
        }
    }

    /// Explicit navigation (buttons / arrow keys). Bypasses the gesture
    /// filter but still arms the cooldown so a wheel event cannot land
    /// mid-animation.
    pub fn paginate(&mut self, delta: i32, now: Instant) -> Result<bool, CarouselError> {
        let moved = self.state.paginate(delta)?;
        if moved {
            self.interpreter.arm_cooldown(now);
            self.presenter.begin(self.state.direction(), now);
        }
        Ok(moved)
    }

    /// Re-derive the current index from marker offsets (scroll-sync mode)
    pub fn sync_to_markers(&mut self, marker_tops: &[f32], container_top: f32) -> usize {
        self.interpreter
            .sync_to_markers(&mut self.state, marker_tops, container_top)
    }

    /// Advance animations. Returns true while a transition is running.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.presenter.tick(now)
    }

    /// Whether gesture input is currently being dropped
    pub fn is_throttled(&self, now: Instant) -> bool {
        self.interpreter.is_throttled(now)
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn presenter(&self) -> &TransitionPresenter {
        &self.presenter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn deck(n: usize) -> Vec<Slide> {
        (0..n)
            .map(|i| Slide::new(format!("Slide {i}"), "abstract", "summary"))
            .collect()
    }

    #[test]
    fn empty_deck_is_rejected() {
        let err = Carousel::new(Vec::<Slide>::new(), CarouselConfig::default()).unwrap_err();
        assert_eq!(err, CarouselError::EmptyDeck);
    }

    #[test]
    fn wheel_and_buttons_share_one_cooldown() {
        let mut carousel = Carousel::new(deck(5), CarouselConfig::default()).unwrap();
        let t0 = Instant::now();

        // Button press moves and arms the cooldown...
        assert!(carousel.paginate(1, t0).unwrap());
        // ...so a qualifying wheel right after is dropped.
        assert!(!carousel.wheel(100.0, t0 + Duration::from_millis(50)));
        assert_eq!(carousel.state().current_index(), 1);

        // After the cooldown the wheel is accepted again.
        assert!(carousel.wheel(100.0, t0 + Duration::from_millis(750)));
        assert_eq!(carousel.state().current_index(), 2);
    }

    #[test]
    fn remount_starts_fresh_mid_cooldown() {
        let mut first = Carousel::new(deck(5), CarouselConfig::default()).unwrap();
        let t0 = Instant::now();
        assert!(first.wheel(100.0, t0));
        assert!(first.is_throttled(t0 + Duration::from_millis(10)));
        drop(first);

        // A replacement engine inherits neither index nor cooldown.
        let second = Carousel::new(deck(5), CarouselConfig::default()).unwrap();
        assert_eq!(second.state().current_index(), 0);
        assert!(!second.is_throttled(t0 + Duration::from_millis(10)));
        assert_eq!(second.state().direction(), Direction::None);
    }
}
