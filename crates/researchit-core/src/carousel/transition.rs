//! Transition presentation - direction-aware enter/exit animation state
//!
//! Exactly one slide is visible at a time. The direction is captured when a
//! transition begins, so a quick advance-then-retreat pair (once the
//! cooldown permits) animates each leg with the direction that triggered it
//! rather than whatever the state holds by render time.

use std::time::{Duration, Instant};

use super::state::Direction;

/// A running enter/exit animation
#[derive(Debug, Clone, Copy)]
struct ActiveTransition {
    direction: Direction,
    started_at: Instant,
}

/// Drives the animated slide change for the fullscreen carousel
#[derive(Debug)]
pub struct TransitionPresenter {
    duration: Duration,
    active: Option<ActiveTransition>,
}

impl TransitionPresenter {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            active: None,
        }
    }

    /// Start a transition in the given direction. `Direction::None` (the
    /// initial mount) renders without an enter animation.
    pub fn begin(&mut self, direction: Direction, now: Instant) {
        if direction == Direction::None {
            self.active = None;
            return;
        }
        self.active = Some(ActiveTransition {
            direction,
            started_at: now,
        });
    }

    /// Advance the animation clock. Returns true while animating (the
    /// caller should keep redrawing). A finished transition clears itself.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.active {
            Some(t) if now.duration_since(t.started_at) >= self.duration => {
                self.active = None;
                false
            }
            Some(_) => true,
            None => false,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Direction captured when the current transition began
    pub fn direction(&self) -> Direction {
        self.active.map(|t| t.direction).unwrap_or(Direction::None)
    }

    /// Animation progress in [0, 1]; 1.0 when idle
    pub fn progress(&self, now: Instant) -> f32 {
        match self.active {
            Some(t) => {
                let elapsed = now.duration_since(t.started_at).as_secs_f32();
                (elapsed / self.duration.as_secs_f32()).min(1.0)
            }
            None => 1.0,
        }
    }

    /// Vertical offset of the incoming slide, in the caller's units.
    ///
    /// Forward enters from below (+travel -> 0), backward from above
    /// (-travel -> 0), eased out so the slide lands softly. Idle or
    /// freshly mounted carousels sit at 0.
    pub fn enter_offset(&self, now: Instant, travel: f32) -> f32 {
        let Some(t) = self.active else {
            return 0.0;
        };
        let eased = ease_out_cubic(self.progress(now));
        let from = match t.direction {
            Direction::Forward => travel,
            Direction::Backward => -travel,
            Direction::None => 0.0,
        };
        from * (1.0 - eased)
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn presenter() -> TransitionPresenter {
        TransitionPresenter::new(Duration::from_millis(600))
    }

    #[test]
    fn idle_presenter_renders_static() {
        let p = presenter();
        let now = Instant::now();
        assert!(!p.is_animating());
        assert_eq!(p.direction(), Direction::None);
        assert_eq!(p.enter_offset(now, 200.0), 0.0);
        assert_eq!(p.progress(now), 1.0);
    }

    #[test]
    fn initial_mount_has_no_enter_animation() {
        let mut p = presenter();
        p.begin(Direction::None, Instant::now());
        assert!(!p.is_animating());
    }

    #[test]
    fn forward_enters_from_below_and_settles() {
        let mut p = presenter();
        let t0 = Instant::now();
        p.begin(Direction::Forward, t0);

        let start = p.enter_offset(t0, 200.0);
        assert!((start - 200.0).abs() < f32::EPSILON);

        let mid = p.enter_offset(t0 + Duration::from_millis(300), 200.0);
        assert!(mid > 0.0 && mid < start);

        let end = p.enter_offset(t0 + Duration::from_millis(600), 200.0);
        assert_eq!(end, 0.0);
    }

    #[test]
    fn backward_is_the_mirror() {
        let mut p = presenter();
        let t0 = Instant::now();
        p.begin(Direction::Backward, t0);
        assert!((p.enter_offset(t0, 200.0) + 200.0).abs() < f32::EPSILON);
    }

    #[test]
    fn direction_is_captured_at_trigger_time() {
        let mut p = presenter();
        let t0 = Instant::now();
        p.begin(Direction::Forward, t0);
        assert_eq!(p.direction(), Direction::Forward);

        // Retriggering mid-flight replaces the captured direction cleanly.
        p.begin(Direction::Backward, t0 + Duration::from_millis(100));
        assert_eq!(p.direction(), Direction::Backward);
    }

    #[test]
    fn tick_clears_a_finished_transition() {
        let mut p = presenter();
        let t0 = Instant::now();
        p.begin(Direction::Forward, t0);

        assert!(p.tick(t0 + Duration::from_millis(300)));
        assert!(!p.tick(t0 + Duration::from_millis(601)));
        assert!(!p.is_animating());
        assert_eq!(p.direction(), Direction::None);
    }

    #[test]
    fn progress_is_monotonic_and_clamped() {
        let mut p = presenter();
        let t0 = Instant::now();
        p.begin(Direction::Forward, t0);

        let quarter = p.progress(t0 + Duration::from_millis(150));
        let half = p.progress(t0 + Duration::from_millis(300));
        assert!(quarter < half);
        assert_eq!(p.progress(t0 + Duration::from_secs(5)), 1.0);
    }
}
