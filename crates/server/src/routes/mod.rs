mod ping;
pub use ping::*;

pub mod analytics;
pub mod catalog;
pub mod workouts;
