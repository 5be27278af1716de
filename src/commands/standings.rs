//! `parse` and `sum` command implementations

use serde::Serialize;

use crate::{
    cli::SourceArgs,
    nfl::{
        compute::rank_by_wins,
        fetch::{DirectoryFetcher, HttpFetcher, StandingsSource},
        types::{StatsByYear, TeamRecord},
    },
    Result, StatParser,
};

/// Offline directory when given, live HTTP otherwise.
pub fn build_source(source: &SourceArgs) -> Result<StandingsSource> {
    match &source.offline_dir {
        Some(dir) => Ok(StandingsSource::Directory(DirectoryFetcher::new(dir))),
        None => Ok(StandingsSource::Http(HttpFetcher::new(source.http_config())?)),
    }
}

fn build_parser(source: &SourceArgs) -> Result<StatParser<StandingsSource>> {
    StatParser::new(build_source(source)?, source.seasons, source.parser_config())
}

/// One ranked row of `sum` JSON output.
#[derive(Debug, Serialize)]
pub struct TeamTotalRow {
    pub team: String,
    #[serde(flatten)]
    pub record: TeamRecord,
    pub win_pct: f64,
}

pub fn season_lines(stats: &StatsByYear) -> Vec<String> {
    let mut lines = Vec::new();
    for (season, standings) in stats {
        lines.push(format!("{} ({} teams)", season, standings.len()));
        for (team, record) in standings {
            lines.push(format!("  {:<28} {}", team, record));
        }
    }
    lines
}

pub fn total_rows(ranked: Vec<(String, TeamRecord)>) -> Vec<TeamTotalRow> {
    ranked
        .into_iter()
        .map(|(team, record)| TeamTotalRow {
            win_pct: record.win_pct(),
            team,
            record,
        })
        .collect()
}

pub fn total_lines(rows: &[TeamTotalRow]) -> Vec<String> {
    rows.iter()
        .map(|row| format!("{:<28} {:<10} {:.3}", row.team, row.record.to_string(), row.win_pct))
        .collect()
}

/// Handle the parse command
pub async fn handle_parse(source: SourceArgs, as_json: bool) -> Result<()> {
    let mut parser = build_parser(&source)?;
    let stats = parser.parse_stats(None).await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(stats)?);
    } else if stats.is_empty() {
        println!("No standings found for {}", source.seasons);
    } else {
        for line in season_lines(stats) {
            println!("{}", line);
        }
    }

    Ok(())
}

/// Handle the sum command
pub async fn handle_sum(source: SourceArgs, as_json: bool) -> Result<()> {
    let mut parser = build_parser(&source)?;
    let totals = parser.sum_wins_losses().await?;
    let rows = total_rows(rank_by_wins(&totals));

    if as_json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else if rows.is_empty() {
        println!("No standings found for {}", source.seasons);
    } else {
        println!(
            "Totals over {} parsed season(s) in {}",
            parser.stats_by_year().len(),
            source.seasons
        );
        for line in total_lines(&rows) {
            println!("{}", line);
        }
    }

    Ok(())
}
