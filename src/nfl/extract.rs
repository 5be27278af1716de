//! Standings table extraction.
//!
//! The header row labels only the sortable columns, so data rows carry one
//! extra leading cell (the team) and every data column sits one position to
//! the right of its label.

use scraper::{ElementRef, Html, Selector};
use tracing::warn;

use crate::config::RowMarkers;
use crate::core::text::{extract_team_name, parse_leading_integer};
use crate::nfl::types::{SeasonStandings, TeamRecord};
use crate::{Result, StandingsError};


/// Label of the wins column in the header row.
pub const WINS_LABEL: &str = "W";

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| StandingsError::Selector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

fn cell_text(cell: &ElementRef<'_>) -> String {
    cell.text().collect()
}

pub struct StandingsExtractor {
    header_row: Selector,
    header_label: Selector,
    body_row: Selector,
    cell: Selector,
    strict: bool,
}

impl StandingsExtractor {
    pub fn new(markers: &RowMarkers, strict: bool) -> Result<Self> {
        Ok(Self {
            header_row: parse_selector(&markers.header_row)?,
            header_label: parse_selector("td a")?,
            body_row: parse_selector(&markers.body_row)?,
            cell: parse_selector("td")?,
            strict,
        })
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Column labels from every header row, in document order.
    pub fn header_labels(&self, document: &Html) -> Result<Vec<String>> {
        let mut rows = document.select(&self.header_row).peekable();
        if rows.peek().is_none() {
            return Err(StandingsError::malformed_document("no header row"));
        }

        Ok(rows
            .flat_map(|row| row.select(&self.header_label))
            .map(|label| cell_text(&label).trim().to_string())
            .collect())
    }

    /// Position of the wins value among a body row's cells.
    pub fn wins_index(&self, document: &Html) -> Result<usize> {
        self.header_labels(document)?
            .iter()
            .position(|label| label == WINS_LABEL)
            .map(|label_index| label_index + 1)
            .ok_or_else(|| {
                StandingsError::malformed_document(format!(
                    "no `{}` column label in header row",
                    WINS_LABEL
                ))
            })
    }

    /// Team name and record from one body row.
    pub fn extract_row(&self, row: &ElementRef<'_>, wins_index: usize) -> Result<(String, TeamRecord)> {
        let cells: Vec<String> = row.select(&self.cell).map(|c| cell_text(&c)).collect();
        let joined = cells.join("\t");

        let team = extract_team_name(&joined)?;

        let values = cells
            .get(wins_index..wins_index + 3)
            .ok_or_else(|| {
                StandingsError::malformed_row(
                    format!(
                        "expected W/L/T in cells {}..{}, row has {} cells",
                        wins_index,
                        wins_index + 3,
                        cells.len()
                    ),
                    joined.as_str(),
                )
            })?;

        let record = TeamRecord::new(
            parse_leading_integer(&values[0]),
            parse_leading_integer(&values[1]),
            parse_leading_integer(&values[2]),
        );

        Ok((team, record))
    }

    /// Every team's record in a standings document.
    ///
    /// Malformed rows are skipped with a warning unless the extractor is strict.
    /// A team listed twice keeps its last row.
    pub fn extract(&self, document: &Html) -> Result<SeasonStandings> {
        let wins_index = self.wins_index(document)?;
        let mut standings = SeasonStandings::new();

        for row in document.select(&self.body_row) {
            match self.extract_row(&row, wins_index) {
                Ok((team, record)) => {
                    standings.insert(team, record);
                }
                Err(e) if !self.strict => warn!("Skipping standings row: {}", e),
                Err(e) => return Err(e),
            }
        }

        Ok(standings)
    }
}
