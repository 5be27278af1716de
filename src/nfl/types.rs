use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, AddAssign};

use crate::cli::types::Season;

/// Wins, losses and ties for one team.
///
/// Addition saturates, so summing records can never fail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamRecord {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl TeamRecord {
    pub fn new(wins: u32, losses: u32, ties: u32) -> Self {
        Self { wins, losses, ties }
    }

    pub fn games(&self) -> u32 {
        self.wins
            .saturating_add(self.losses)
            .saturating_add(self.ties)
    }

    /// League winning percentage: a tie counts as half a win.
    pub fn win_pct(&self) -> f64 {
        let games = self.games();
        if games == 0 {
            return 0.0;
        }
        (f64::from(self.wins) + 0.5 * f64::from(self.ties)) / f64::from(games)
    }
}

impl Add for TeamRecord {
    type Output = TeamRecord;

    fn add(self, rhs: TeamRecord) -> TeamRecord {
        TeamRecord {
            wins: self.wins.saturating_add(rhs.wins),
            losses: self.losses.saturating_add(rhs.losses),
            ties: self.ties.saturating_add(rhs.ties),
        }
    }
}

impl AddAssign for TeamRecord {
    fn add_assign(&mut self, rhs: TeamRecord) {
        *self = *self + rhs;
    }
}

impl fmt::Display for TeamRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.wins, self.losses, self.ties)
    }
}

/// Team name to record for a single season.
pub type SeasonStandings = BTreeMap<String, TeamRecord>;

/// Every parsed season's standings, keyed by season.
pub type StatsByYear = BTreeMap<Season, SeasonStandings>;

/// Team name to record summed over several seasons.
pub type TeamTotals = BTreeMap<String, TeamRecord>;
