//! Application constants and configuration defaults
//!
//! Centralized location for magic numbers and default values

use std::time::Duration;

/// HTTP client configuration
pub mod http {
    use super::*;

    /// Connection timeout for HTTP requests
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Overall request timeout for search calls
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
}

/// Carousel navigation configuration
///
/// The cooldown and the transition duration live side by side on purpose:
/// the cooldown must cover the full transition so a new gesture can never
/// be accepted mid-animation.
pub mod carousel {
    use super::*;

    /// Minimum absolute wheel delta for a gesture to register
    pub const SCROLL_THRESHOLD: f32 = 50.0;

    /// Cooldown after an accepted gesture; further input is dropped
    pub const GESTURE_COOLDOWN: Duration = Duration::from_millis(700);

    /// Duration of the enter/exit slide animation
    pub const TRANSITION_DURATION: Duration = Duration::from_millis(600);

    /// Delta-units carried by one wheel notch (conventional wheel quantum)
    pub const WHEEL_NOTCH_DELTA: f32 = 120.0;
}

/// Search configuration
pub mod search {
    /// Default number of results to request
    pub const DEFAULT_TOP_K: usize = 10;

    /// Default lower bound of good results for smart search
    pub const DEFAULT_MIN_GOOD_RESULTS: usize = 3;

    /// Score above which a result counts as a strong match in the UI
    pub const STRONG_SCORE: f64 = 0.8;

    /// Score above which a result counts as a fair match in the UI
    pub const FAIR_SCORE: f64 = 0.7;
}

/// UI configuration
pub mod ui {
    use super::*;

    /// Config directory name
    pub const CONFIG_DIR_NAME: &str = ".researchit";

    /// Event loop tick interval (~60fps)
    pub const TICK_INTERVAL: Duration = Duration::from_millis(16);

    /// Default search service URL
    pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";
}
