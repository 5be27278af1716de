//! Season identifiers and inclusive season ranges.

use crate::error::{Result, StandingsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Type-safe wrapper for Season years
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(2010)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = StandingsError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

impl From<u16> for Season {
    fn from(year: u16) -> Self {
        Self(year)
    }
}

/// Inclusive range of seasons. `start > end` is an empty range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonRange {
    pub start: Season,
    pub end: Season,
}

impl SeasonRange {
    pub fn new(start: impl Into<Season>, end: impl Into<Season>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn single(season: impl Into<Season>) -> Self {
        let season = season.into();
        Self::new(season, season)
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            usize::from(self.end.0 - self.start.0) + 1
        }
    }

    pub fn contains(&self, season: Season) -> bool {
        self.start <= season && season <= self.end
    }

    /// Seasons in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Season> {
        (self.start.0..=self.end.0).map(Season)
    }
}

impl Default for SeasonRange {
    fn default() -> Self {
        Self::single(Season::default())
    }
}

impl From<Season> for SeasonRange {
    fn from(season: Season) -> Self {
        Self::single(season)
    }
}

impl fmt::Display for SeasonRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}..{}", self.start, self.end)
        }
    }
}

/// Accepts `2010`, `2010..2011`, `2010..=2011` and `2010-2011`; all bounds inclusive.
impl FromStr for SeasonRange {
    type Err = StandingsError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let invalid = || StandingsError::InvalidSeasonRange {
            input: s.to_string(),
        };

        let bounds = s
            .split_once("..=")
            .or_else(|| s.split_once(".."))
            .or_else(|| s.split_once('-'));

        match bounds {
            Some((start, end)) => {
                if start.trim().is_empty() || end.trim().is_empty() {
                    return Err(invalid());
                }
                Ok(Self::new(start.parse::<Season>()?, end.parse::<Season>()?))
            }
            None if s.is_empty() => Err(invalid()),
            None => Ok(Self::single(s.parse::<Season>()?)),
        }
    }
}
