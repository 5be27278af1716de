//! Season-range aggregation session.
//!
//! A [`StatParser`] owns the fetch cache and the season-indexed standings it
//! has built so far. Seasons are processed one at a time in range order.

use tracing::{info, warn};

use crate::config::ParserConfig;
use crate::nfl::{
    compute::sum_records,
    extract::StandingsExtractor,
    fetch::{DocumentFetcher, RetryingFetch},
    types::{StatsByYear, TeamTotals},
};
use crate::{Result, SeasonRange};


pub struct StatParser<F> {
    fetch: RetryingFetch<F>,
    extractor: StandingsExtractor,
    season_range: SeasonRange,
    stats_by_year: StatsByYear,
}

impl<F: DocumentFetcher> StatParser<F> {
    /// `range` is the default for [`parse_stats`](Self::parse_stats) and lazy summing.
    pub fn new(fetcher: F, range: impl Into<SeasonRange>, config: ParserConfig) -> Result<Self> {
        Ok(Self {
            fetch: RetryingFetch::new(fetcher, config.retry),
            extractor: StandingsExtractor::new(&config.markers, config.strict)?,
            season_range: range.into(),
            stats_by_year: StatsByYear::new(),
        })
    }

    pub fn season_range(&self) -> SeasonRange {
        self.season_range
    }

    pub fn stats_by_year(&self) -> &StatsByYear {
        &self.stats_by_year
    }

    pub fn fetcher(&self) -> &F {
        self.fetch.cache().fetcher()
    }

    /// Fetch and extract each season in `range` (default: the construction range).
    ///
    /// Seasons that cannot be fetched are skipped. Unparseable documents are
    /// skipped too, unless the parser is strict. Parsed seasons replace any
    /// earlier entry for the same season; other entries are kept.
    pub async fn parse_stats(&mut self, range: Option<SeasonRange>) -> Result<&StatsByYear> {
        let range = range.unwrap_or(self.season_range);
        let mut parsed = 0usize;

        for season in range.iter() {
            let document = match self.fetch.fetch(season).await {
                Ok(document) => document,
                Err(e) => {
                    warn!("Skipping season {}: {}", season, e);
                    continue;
                }
            };

            match self.extractor.extract(&document.html()) {
                Ok(standings) => {
                    self.stats_by_year.insert(season, standings);
                    parsed += 1;
                }
                Err(e) if self.extractor.is_strict() => return Err(e),
                Err(e) => warn!("Skipping season {}: {}", season, e),
            }
        }

        info!("Parsed {} of {} seasons in {}", parsed, range.len(), range);
        Ok(&self.stats_by_year)
    }

    /// Wins, losses and ties per team over every parsed season.
    ///
    /// Parses the construction range first when nothing has been parsed yet.
    pub async fn sum_wins_losses(&mut self) -> Result<TeamTotals> {
        if self.stats_by_year.is_empty() {
            self.parse_stats(None).await?;
        }

        Ok(sum_records(self.stats_by_year.values()))
    }
}
