//! Index state for the carousel
//!
//! Owns the current position and the direction of the most recent move.
//! The slide deck is an explicit, immutable constructor input; the engine
//! carries no module-level data.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::CarouselError;

/// One navigable item in the carousel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Headline shown front and center
    pub title: String,
    /// Long-form abstract for the side panel
    pub abstract_text: String,
    /// Short summary for the side panel
    pub summary: String,
}

impl Slide {
    pub fn new(
        title: impl Into<String>,
        abstract_text: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            abstract_text: abstract_text.into(),
            summary: summary.into(),
        }
    }
}

/// Direction of the most recently applied transition
///
/// Used only to select the animation variant, never persisted beyond the
/// current transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Toward later items
    Forward,
    /// Toward earlier items
    Backward,
    /// No transition yet (initial mount)
    #[default]
    None,
}

/// Carousel index state
///
/// Invariant: `current_index` stays within `[0, slides.len() - 1]` under
/// every sequence of operations (saturating clamp, not wraparound).
#[derive(Debug, Clone)]
pub struct CarouselState {
    slides: Arc<[Slide]>,
    current_index: usize,
    direction: Direction,
}

impl CarouselState {
    /// Create state over a fixed slide deck. Empty decks are a
    /// configuration error.
    pub fn new(slides: impl Into<Arc<[Slide]>>) -> Result<Self, CarouselError> {
        let slides = slides.into();
        if slides.is_empty() {
            return Err(CarouselError::EmptyDeck);
        }
        Ok(Self {
            slides,
            current_index: 0,
            direction: Direction::None,
        })
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        false // guaranteed non-empty by construction
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// The slide at the current index
    pub fn current(&self) -> &Slide {
        &self.slides[self.current_index]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// At the first slide (retreat would be a no-op)
    pub fn at_start(&self) -> bool {
        self.current_index == 0
    }

    /// At the last slide (advance would be a no-op)
    pub fn at_end(&self) -> bool {
        self.current_index == self.slides.len() - 1
    }

    /// Move by exactly one position. Returns whether the index visibly
    /// changed; a boundary request clamps silently but still records the
    /// attempted direction.
    pub fn paginate(&mut self, delta: i32) -> Result<bool, CarouselError> {
        if delta != 1 && delta != -1 {
            return Err(CarouselError::InvalidDelta(delta));
        }

        self.direction = if delta > 0 {
            Direction::Forward
        } else {
            Direction::Backward
        };

        let next = self
            .current_index
            .saturating_add_signed(delta as isize)
            .min(self.slides.len() - 1);
        let moved = next != self.current_index;
        self.current_index = next;
        Ok(moved)
    }

    /// Jump directly to an index (scroll-sync derivation). Out-of-range
    /// values clamp to the last slide. Direction follows the movement so
    /// panel animations can key off it.
    pub(crate) fn set_index(&mut self, index: usize) -> bool {
        let next = index.min(self.slides.len() - 1);
        if next == self.current_index {
            return false;
        }
        self.direction = if next > self.current_index {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.current_index = next;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(n: usize) -> Vec<Slide> {
        (0..n)
            .map(|i| Slide::new(format!("Slide {i}"), "abstract", "summary"))
            .collect()
    }

    fn state(n: usize) -> CarouselState {
        CarouselState::new(deck(n)).expect("non-empty deck")
    }

    #[test]
    fn starts_at_zero_with_no_direction() {
        let state = state(5);
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.direction(), Direction::None);
        assert!(state.at_start());
    }

    #[test]
    fn empty_deck_is_a_config_error() {
        assert_eq!(
            CarouselState::new(Vec::<Slide>::new()).unwrap_err(),
            CarouselError::EmptyDeck
        );
    }

    #[test]
    fn saturates_at_the_last_index() {
        let mut state = state(5);
        for _ in 0..3 {
            state.paginate(1).unwrap();
        }
        assert_eq!(state.current_index(), 3);

        // Fourth and fifth advance saturate at 4, not 5 or 6.
        assert!(state.paginate(1).unwrap());
        assert_eq!(state.current_index(), 4);
        assert!(!state.paginate(1).unwrap());
        assert_eq!(state.current_index(), 4);
        assert!(state.at_end());
    }

    #[test]
    fn boundary_advance_is_a_silent_no_op() {
        let mut state = state(2);
        state.paginate(1).unwrap();
        let moved = state.paginate(1).unwrap();
        assert!(!moved);
        assert_eq!(state.current_index(), 1);
        // Direction still records the attempt.
        assert_eq!(state.direction(), Direction::Forward);
    }

    #[test]
    fn retreat_clamps_at_zero() {
        let mut state = state(3);
        assert!(!state.paginate(-1).unwrap());
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.direction(), Direction::Backward);
    }

    #[test]
    fn out_of_domain_delta_is_rejected() {
        let mut state = state(3);
        assert_eq!(state.paginate(0).unwrap_err(), CarouselError::InvalidDelta(0));
        assert_eq!(state.paginate(2).unwrap_err(), CarouselError::InvalidDelta(2));
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.direction(), Direction::None);
    }

    #[test]
    fn index_stays_in_bounds_under_arbitrary_sequences() {
        let mut state = state(4);
        let moves = [1, 1, 1, 1, 1, -1, -1, -1, -1, -1, 1, -1, 1, 1, -1];
        for delta in moves {
            state.paginate(delta).unwrap();
            assert!(state.current_index() < state.len());
        }
    }

    #[test]
    fn set_index_tracks_direction_and_clamps() {
        let mut state = state(5);
        assert!(state.set_index(3));
        assert_eq!(state.direction(), Direction::Forward);
        assert!(state.set_index(1));
        assert_eq!(state.direction(), Direction::Backward);
        assert!(!state.set_index(1));
        assert!(state.set_index(99));
        assert_eq!(state.current_index(), 4);
    }
}
