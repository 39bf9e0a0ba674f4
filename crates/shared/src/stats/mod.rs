//! Aggregation math over workout entries.
//!
//! Everything here is pure: callers load rows from the database and hand
//! them in, so the same formulas serve the day, month and analytics views.

mod day;
pub use day::*;

mod month;
pub use month::*;

mod analytics;
pub use analytics::*;

mod history;
pub use history::*;
