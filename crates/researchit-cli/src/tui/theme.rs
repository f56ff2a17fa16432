//! Color theme for the TUI
//!
//! One built-in theme in the indigo/violet palette of the original site.

use ratatui::style::Color;

/// Colors used across views and components
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg_color: Color,
    pub panel_bg_color: Color,
    pub text_color: Color,
    pub dim_color: Color,
    /// Primary accent (titles, brand mark)
    pub accent_color: Color,
    /// Secondary accent (abstract panel, highlights)
    pub accent_alt_color: Color,
    pub border_color: Color,
    pub error_color: Color,
    pub success_color: Color,
    pub warning_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            bg_color: Color::Rgb(15, 17, 26),
            panel_bg_color: Color::Rgb(24, 27, 40),
            text_color: Color::Rgb(226, 232, 240),
            dim_color: Color::Rgb(100, 108, 128),
            accent_color: Color::Rgb(99, 102, 241),
            accent_alt_color: Color::Rgb(167, 139, 250),
            border_color: Color::Rgb(55, 60, 80),
            error_color: Color::Rgb(239, 68, 68),
            success_color: Color::Rgb(74, 222, 128),
            warning_color: Color::Rgb(250, 204, 21),
        }
    }
}
