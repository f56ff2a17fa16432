//! Event handlers split out of app.rs

pub mod keyboard;
pub mod mouse;
