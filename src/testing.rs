//! Fixtures shared by unit tests.

use std::{cell::RefCell, collections::HashMap, io};

use crate::nfl::fetch::{Document, DocumentFetcher};
use crate::{Result, Season, StandingsError};

/// Fetcher serving canned pages, with scripted transient failures per season.
#[derive(Default)]
pub struct ScriptedFetcher {
    pages: HashMap<Season, String>,
    failures_left: RefCell<HashMap<Season, u32>>,
    calls: RefCell<HashMap<Season, u32>>,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, season: u16, page: impl Into<String>) -> Self {
        self.pages.insert(Season::new(season), page.into());
        self
    }

    /// Fail the first `failures` fetches of `season`.
    pub fn failing_first(self, season: u16, failures: u32) -> Self {
        self.failures_left
            .borrow_mut()
            .insert(Season::new(season), failures);
        self
    }

    pub fn calls(&self, season: Season) -> u32 {
        self.calls.borrow().get(&season).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> u32 {
        self.calls.borrow().values().sum()
    }
}

impl DocumentFetcher for ScriptedFetcher {
    async fn fetch(&self, season: Season) -> Result<Document> {
        *self.calls.borrow_mut().entry(season).or_insert(0) += 1;

        if let Some(left) = self.failures_left.borrow_mut().get_mut(&season) {
            if *left > 0 {
                *left -= 1;
                return Err(StandingsError::Io(io::Error::new(
                    io::ErrorKind::ConnectionReset,
                    format!("scripted failure for {}", season),
                )));
            }
        }

        self.pages
            .get(&season)
            .map(|page| Document::from(page.as_str()))
            .ok_or_else(|| {
                StandingsError::Io(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("no page for {}", season),
                ))
            })
    }
}

/// A league standings page in the markup the extractor expects.
///
/// Each row is `(team, wins, losses, ties)` as raw cell text.
pub fn standings_page(rows: &[(&str, &str, &str, &str)]) -> String {
    let body: String = rows
        .iter()
        .map(|(team, wins, losses, ties)| {
            format!(
                "<tr class=\"tbdy1\">\n\t<td>\n\t\t<a href=\"/teams/profile\">{team}</a>\n\t</td>\
                 <td>{wins}</td><td>{losses}</td><td>{ties}</td><td>.500</td><td>300</td>\n</tr>\n"
            )
        })
        .collect();

    format!(
        "<html><body><table class=\"data-table1\">\n\
         <tr class=\"thd1\"><td colspan=\"6\">League Standings</td></tr>\n\
         <tr class=\"thd2\"><td>NFL Team</td><td><a href=\"#\">W</a></td><td><a href=\"#\">L</a></td>\
         <td><a href=\"#\">T</a></td><td><a href=\"#\">Pct</a></td><td><a href=\"#\">PF</a></td></tr>\n\
         {body}</table></body></html>"
    )
}
