//! Main views: home carousel, browse list, search

pub mod browse;
pub mod home;
pub mod search;
