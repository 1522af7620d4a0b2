//! Utility functions and helpers

pub mod time;

pub use time::{current_timestamp, display_date, parse_instant};
