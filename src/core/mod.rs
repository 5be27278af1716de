//! Core utilities for the standings parser
//!
//! - `cache`: in-memory memo of fetched documents
//! - `retry`: bounded retry combinator
//! - `text`: team-name cleanup and lenient integer parsing

pub mod cache;
pub mod retry;
pub mod text;

// Re-export commonly used items for convenience
pub use cache::FetchCache;
pub use retry::{retry, RetryExhausted, RetryPolicy};
pub use text::{extract_team_name, parse_leading_integer};
