mod day;
pub use day::*;

mod month;
pub use month::*;

mod analytics;
pub use analytics::*;

mod catalog;
pub use catalog::*;
