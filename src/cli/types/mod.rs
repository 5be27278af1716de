//! Type-safe wrappers for season identifiers.

pub mod time;

pub use time::{Season, SeasonRange};
