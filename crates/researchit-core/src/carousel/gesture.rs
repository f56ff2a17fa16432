//! Gesture interpretation - raw input to discrete navigation commands
//!
//! Two strategies:
//! - Wheel-throttled: magnitude filter plus a cooldown window so one
//!   continuous wheel motion yields exactly one transition.
//! - Scroll-sync: no filtering at all; the index is whatever marker sits
//!   closest to the container top.
//!
//! The cooldown is a deadline checked against caller-supplied `Instant`s.
//! Nothing here schedules work, so dropping the interpreter cancels the
//! cooldown by construction.

use std::time::Instant;

use super::state::CarouselState;
use super::CarouselConfig;

/// Gesture interpretation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureMode {
    /// Discrete: threshold + cooldown, one transition per gesture
    WheelThrottled,
    /// Continuous: index tracks scroll position every tick
    ScrollSync,
}

/// Converts raw wheel/scroll input into index updates
#[derive(Debug)]
pub struct GestureInterpreter {
    config: CarouselConfig,
    cooldown_until: Option<Instant>,
}

impl GestureInterpreter {
    pub fn new(config: CarouselConfig) -> Self {
        Self {
            config,
            cooldown_until: None,
        }
    }

    pub fn mode(&self) -> GestureMode {
        self.config.mode
    }

    /// True while the post-gesture cooldown window is active
    pub fn is_throttled(&self, now: Instant) -> bool {
        self.cooldown_until.is_some_and(|until| now < until)
    }

    /// Start the cooldown window at `now`
    pub fn arm_cooldown(&mut self, now: Instant) {
        self.cooldown_until = Some(now + self.config.cooldown);
    }

    /// Interpret a wheel event. Returns the paginate delta to apply, or
    /// `None` if the event is filtered out.
    ///
    /// Events are dropped, never queued, when:
    /// - the mode is scroll-sync (wheel input scrolls the list instead),
    /// - the cooldown window is active,
    /// - the magnitude is below the threshold,
    /// - the move would cross a boundary (pre-check mirrors the state's
    ///   clamp so an edge gesture does not burn a cooldown for nothing).
    pub fn on_wheel(&mut self, state: &CarouselState, delta_y: f32, now: Instant) -> Option<i32> {
        if self.config.mode != GestureMode::WheelThrottled {
            return None;
        }
        if self.is_throttled(now) {
            return None;
        }
        if delta_y.abs() < self.config.scroll_threshold {
            return None;
        }

        let delta = if delta_y > 0.0 { 1 } else { -1 };
        let blocked = (delta > 0 && state.at_end()) || (delta < 0 && state.at_start());
        if blocked {
            return None;
        }

        self.arm_cooldown(now);
        tracing::debug!(delta, delta_y, "Wheel gesture accepted");
        Some(delta)
    }

    /// Re-derive the current index from marker positions (scroll-sync).
    /// Returns the derived index. In wheel mode this is ignored.
    pub fn sync_to_markers(
        &mut self,
        state: &mut CarouselState,
        marker_tops: &[f32],
        container_top: f32,
    ) -> usize {
        if self.config.mode != GestureMode::ScrollSync {
            return state.current_index();
        }
        if let Some(index) = nearest_marker(marker_tops, container_top) {
            state.set_index(index);
        }
        state.current_index()
    }
}

/// Index of the marker whose top edge is closest to the container top.
/// Exact ties go to the lowest index (first encountered).
pub fn nearest_marker(marker_tops: &[f32], container_top: f32) -> Option<usize> {
    let mut closest: Option<(usize, f32)> = None;
    for (i, top) in marker_tops.iter().enumerate() {
        let distance = (top - container_top).abs();
        match closest {
            Some((_, best)) if distance >= best => {}
            _ => closest = Some((i, distance)),
        }
    }
    closest.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::Slide;
    use std::time::Duration;

    fn deck(n: usize) -> CarouselState {
        let slides: Vec<Slide> = (0..n)
            .map(|i| Slide::new(format!("Slide {i}"), "abstract", "summary"))
            .collect();
        CarouselState::new(slides).expect("non-empty deck")
    }

    fn interpreter() -> GestureInterpreter {
        GestureInterpreter::new(CarouselConfig::default())
    }

    #[test]
    fn sub_threshold_deltas_are_ignored() {
        let state = deck(5);
        let mut interp = interpreter();
        let now = Instant::now();

        assert_eq!(interp.on_wheel(&state, 10.0, now), None);
        assert_eq!(interp.on_wheel(&state, -49.9, now), None);
        assert!(!interp.is_throttled(now));
    }

    #[test]
    fn threshold_delta_produces_one_command() {
        let state = deck(5);
        let mut interp = interpreter();
        let now = Instant::now();

        assert_eq!(interp.on_wheel(&state, 100.0, now), Some(1));
        assert!(interp.is_throttled(now));
    }

    #[test]
    fn scroll_up_retreats() {
        let mut state = deck(5);
        state.paginate(1).unwrap();
        let mut interp = interpreter();

        assert_eq!(interp.on_wheel(&state, -100.0, Instant::now()), Some(-1));
    }

    #[test]
    fn second_event_inside_cooldown_is_dropped() {
        let mut state = deck(5);
        let mut interp = interpreter();
        let t0 = Instant::now();

        let delta = interp.on_wheel(&state, 100.0, t0).expect("accepted");
        state.paginate(delta).unwrap();

        // 50ms later, same gesture still in flight: dropped, not queued.
        assert_eq!(interp.on_wheel(&state, 100.0, t0 + Duration::from_millis(50)), None);
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn event_after_cooldown_is_accepted() {
        let mut state = deck(5);
        let mut interp = interpreter();
        let t0 = Instant::now();

        let delta = interp.on_wheel(&state, 100.0, t0).expect("accepted");
        state.paginate(delta).unwrap();

        let later = t0 + Duration::from_millis(701);
        let delta = interp.on_wheel(&state, 100.0, later).expect("accepted after cooldown");
        state.paginate(delta).unwrap();
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn boundary_gesture_does_not_burn_a_cooldown() {
        let state = deck(3);
        let mut interp = interpreter();
        let now = Instant::now();

        // Retreat at the first slide: filtered before the cooldown arms.
        assert_eq!(interp.on_wheel(&state, -200.0, now), None);
        assert!(!interp.is_throttled(now));

        // An advance right after is still accepted.
        assert_eq!(interp.on_wheel(&state, 200.0, now), Some(1));
    }

    #[test]
    fn advance_at_last_slide_is_filtered() {
        let mut state = deck(2);
        state.paginate(1).unwrap();
        let mut interp = interpreter();

        assert_eq!(interp.on_wheel(&state, 300.0, Instant::now()), None);
    }

    #[test]
    fn wheel_is_inert_in_scroll_sync_mode() {
        let state = deck(5);
        let mut interp = GestureInterpreter::new(CarouselConfig::scroll_sync());

        assert_eq!(interp.on_wheel(&state, 500.0, Instant::now()), None);
    }

    #[test]
    fn nearest_marker_picks_minimum_distance() {
        // Marker 1 at 120 is 2 away from a container top of 118;
        // marker 2 at 240 is 122 away.
        let tops = [0.0, 120.0, 240.0, 360.0, 480.0];
        assert_eq!(nearest_marker(&tops, 118.0), Some(1));
    }

    #[test]
    fn nearest_marker_breaks_ties_low() {
        // 60 is equidistant from 0 and 120.
        let tops = [0.0, 120.0, 240.0];
        assert_eq!(nearest_marker(&tops, 60.0), Some(0));
        assert_eq!(nearest_marker(&[], 10.0), None);
    }

    #[test]
    fn scroll_sync_updates_index_every_call() {
        let mut state = deck(5);
        let mut interp = GestureInterpreter::new(CarouselConfig::scroll_sync());

        let tops = [0.0, 120.0, 240.0, 360.0, 480.0];
        assert_eq!(interp.sync_to_markers(&mut state, &tops, 118.0), 1);
        assert_eq!(interp.sync_to_markers(&mut state, &tops, 350.0), 3);
        assert_eq!(state.current_index(), 3);
        // No throttling: immediate re-derivation is fine.
        assert_eq!(interp.sync_to_markers(&mut state, &tops, 10.0), 0);
    }
}
