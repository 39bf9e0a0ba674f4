//! Request level operations. Each function runs entirely on one pooled
//! connection inside `Object::interact` and returns a finished response
//! payload, so the HTTP handlers stay thin.

pub mod analytics;
pub mod catalog;
pub mod day;
pub mod history;
pub mod month;
