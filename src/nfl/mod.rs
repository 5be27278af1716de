//! League standings: page retrieval, table extraction and record math.

pub mod compute;
pub mod extract;
pub mod fetch;
pub mod types;

pub use compute::{merge_totals, rank_by_wins, sum_records};
pub use extract::StandingsExtractor;
pub use fetch::RetryingFetch;
