//! Terminal User Interface for Researchit

pub mod app;
pub mod components;
pub mod handlers;
pub mod slides;
pub mod theme;
pub mod utils;
pub mod views;

// Re-exports
pub use app::App;
