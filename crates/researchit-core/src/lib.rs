//! Researchit Core - Shared library for the Researchit paper browser
//!
//! This crate provides the core functionality for the Researchit TUI:
//! - Carousel navigation engine (index state, gesture interpretation, transitions)
//! - Search client for the remote paper-search service
//! - Configuration and path helpers

pub mod carousel;
pub mod config;
pub mod constants;
pub mod paths;
pub mod search;

// Re-exports for convenience
pub use carousel::{Carousel, CarouselConfig, CarouselError, Direction, GestureMode, Slide};
pub use config::Config;
pub use search::{PaperMetadata, PaperResult, SearchClient, SearchError, SearchResponse};
