//! Text cleanup for scraped table cells.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::{Result, StandingsError};

/// Runs of word characters, dots, hyphens and spaces.
static TEAM_NAME_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w.\- ]+").expect("team name pattern is valid"));

/// Pull the team name out of a row's concatenated cell text.
///
/// The name is the first run of `[\w.\- ]` that is not only spaces, trimmed.
/// Tabs, newlines and stray punctuation around it are dropped.
pub fn extract_team_name(raw: &str) -> Result<String> {
    TEAM_NAME_RUN
        .find_iter(raw)
        .map(|m| m.as_str().trim())
        .find(|candidate| !candidate.is_empty())
        .map(str::to_string)
        .ok_or_else(|| StandingsError::malformed_row("no team name", raw))
}

/// Lenient integer parse: leading whitespace and an optional `+` are skipped,
/// then leading ASCII digits are read. Anything else yields 0.
///
/// `"12*"` is 12, `"N/A"` is 0, `"-3"` is 0. Overflow saturates.
pub fn parse_leading_integer(text: &str) -> u32 {
    let trimmed = text.trim_start();
    let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);

    digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0u32, |acc, b| {
            acc.saturating_mul(10).saturating_add(u32::from(b - b'0'))
        })
}
