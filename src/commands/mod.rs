//! Command handlers for the `nfl-standings` binary.

pub mod standings;

pub use standings::{handle_parse, handle_sum};
