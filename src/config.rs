//! Parser and transport configuration.

use std::time::Duration;

use crate::core::retry::RetryPolicy;
use crate::DEFAULT_BASE_URL;

/// CSS selectors identifying the rows of a standings table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowMarkers {
    /// Secondary header row holding the column labels
    pub header_row: String,
    /// One team per body row
    pub body_row: String,
}

impl Default for RowMarkers {
    fn default() -> Self {
        Self {
            header_row: "tr.thd2".to_string(),
            body_row: "tr.tbdy1".to_string(),
        }
    }
}

/// Settings for one [`StatParser`](crate::StatParser) session.
#[derive(Debug, Clone, Default)]
pub struct ParserConfig {
    pub retry: RetryPolicy,
    /// Fail the call on malformed documents and rows instead of skipping them.
    pub strict: bool,
    pub markers: RowMarkers,
}

impl ParserConfig {
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }
}

/// Settings for [`HttpFetcher`](crate::HttpFetcher).
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: concat!("nfl-standings/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}
