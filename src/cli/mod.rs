//! CLI argument definitions and parsing.

pub mod types;

use std::{path::PathBuf, time::Duration};

use clap::{Args, Parser, Subcommand};
use types::SeasonRange;

use crate::{config::HttpConfig, ParserConfig, RetryPolicy, DEFAULT_BASE_URL, MAX_FETCH_ATTEMPTS};

/// Where standings pages come from and how hard to try.
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Seasons to process: `2010`, `2010..2012` or `2010-2012` (inclusive).
    #[clap(long, short, default_value_t = SeasonRange::default())]
    pub seasons: SeasonRange,

    /// Base URL of the standings site.
    #[clap(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Read saved `{season}.html` pages from this directory instead of the network.
    #[clap(long)]
    pub offline_dir: Option<PathBuf>,

    /// Fail on malformed pages or rows instead of skipping them.
    #[clap(long)]
    pub strict: bool,

    /// Fetch attempts per season before it is skipped.
    #[clap(long, default_value_t = MAX_FETCH_ATTEMPTS)]
    pub attempts: u32,

    /// Delay before the first retry, doubling after each failure.
    #[clap(long, default_value_t = 0)]
    pub retry_delay_ms: u64,

    /// HTTP request timeout.
    #[clap(long, default_value_t = 30)]
    pub timeout_secs: u64,
}

impl SourceArgs {
    pub fn parser_config(&self) -> ParserConfig {
        ParserConfig {
            retry: RetryPolicy::with_backoff(
                self.attempts,
                Duration::from_millis(self.retry_delay_ms),
            ),
            strict: self.strict,
            ..ParserConfig::default()
        }
    }

    pub fn http_config(&self) -> HttpConfig {
        HttpConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            ..HttpConfig::default()
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print each season's standings.
    Parse {
        #[clap(flatten)]
        source: SourceArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Print win/loss/tie totals per team across the seasons, best record first.
    Sum {
        #[clap(flatten)]
        source: SourceArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "nfl-standings", about = "NFL standings aggregator")]
pub struct StandingsCli {
    /// Log fetch progress (overridden by `RUST_LOG`).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
