//! moodlog - Personal emotion journal
//!
//! Records mood entries in a CSV log, aggregates them into Monday-to-Sunday
//! weekly statistics and tracks a weekly positive-entry challenge.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MoodlogError;
