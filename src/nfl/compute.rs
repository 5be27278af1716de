use std::cmp::Reverse;

use crate::nfl::types::{SeasonStandings, TeamRecord, TeamTotals};


/// Sum records per team across seasons. Teams start at 0-0-0 on first sight.
pub fn sum_records<'a, I>(seasons: I) -> TeamTotals
where
    I: IntoIterator<Item = &'a SeasonStandings>,
{
    let mut totals = TeamTotals::new();
    for standings in seasons {
        for (team, record) in standings {
            *totals.entry(team.clone()).or_default() += *record;
        }
    }
    totals
}

/// Combine two partial totals into one.
pub fn merge_totals(mut left: TeamTotals, right: &TeamTotals) -> TeamTotals {
    for (team, record) in right {
        *left.entry(team.clone()).or_default() += *record;
    }
    left
}

/// Totals ordered by wins (desc), then losses (asc), then team name.
pub fn rank_by_wins(totals: &TeamTotals) -> Vec<(String, TeamRecord)> {
    let mut ranked: Vec<(String, TeamRecord)> = totals
        .iter()
        .map(|(team, record)| (team.clone(), *record))
        .collect();
    ranked.sort_by(|(a_team, a), (b_team, b)| {
        (Reverse(a.wins), a.losses, a_team).cmp(&(Reverse(b.wins), b.losses, b_team))
    });
    ranked
}
