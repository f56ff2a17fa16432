//! Reusable UI components

pub mod result_card;
pub mod status_bar;
pub mod top_bar;

pub use result_card::result_card_lines;
pub use status_bar::render_status_bar;
pub use top_bar::render_top_bar;
