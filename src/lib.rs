//! NFL Standings Library
//!
//! Fetches season-by-season league standings pages, extracts every team's
//! win/loss/tie record and aggregates those records across a range of seasons.
//!
//! ## Features
//!
//! - **Standings Extraction**: Locate the header row in a standings table and
//!   pull team names plus W/L/T columns out of noisy markup
//! - **Fetch Caching**: Each season's page is fetched at most once per parser
//! - **Bounded Retry**: Transient fetch failures are retried, then the season is skipped
//! - **Record Totals**: Sum records per team across every parsed season
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nfl_standings::{HttpConfig, HttpFetcher, ParserConfig, SeasonRange, StatParser};
//!
//! # async fn example() -> nfl_standings::Result<()> {
//! let fetcher = HttpFetcher::new(HttpConfig::default())?;
//! let range: SeasonRange = "2010..2011".parse()?;
//! let mut parser = StatParser::new(fetcher, range, ParserConfig::default())?;
//!
//! for (team, record) in parser.sum_wins_losses().await? {
//!     println!("{team}: {record}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod nfl;
pub mod parser;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use cli::types::{Season, SeasonRange};
pub use config::{HttpConfig, ParserConfig, RowMarkers};
pub use crate::core::retry::RetryPolicy;
pub use error::{Result, StandingsError};
pub use nfl::fetch::{DirectoryFetcher, Document, DocumentFetcher, HttpFetcher, StandingsSource};
pub use nfl::types::{SeasonStandings, StatsByYear, TeamRecord, TeamTotals};
pub use parser::StatParser;

/// Site serving the league standings pages.
pub const DEFAULT_BASE_URL: &str = "http://www.nfl.com";

/// Attempts made per season before it is skipped.
pub const MAX_FETCH_ATTEMPTS: u32 = 3;
