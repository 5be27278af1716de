//! Integration tests for season aggregation through the public API

use std::{cell::Cell, collections::HashMap, fs, io, time::Duration};

use nfl_standings::{
    nfl::compute::{merge_totals, rank_by_wins, sum_records},
    DirectoryFetcher, Document, DocumentFetcher, HttpConfig, HttpFetcher, ParserConfig, Season,
    SeasonRange, StandingsError, StatParser, TeamRecord,
};
use tempfile::TempDir;
use wiremock::{
    matchers::{method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

fn page(rows: &[(&str, u32, u32, u32)]) -> String {
    let body: String = rows
        .iter()
        .map(|(team, w, l, t)| {
            format!(
                "<tr class=\"tbdy1\"><td>\n\t\t{team}\t\t\n</td><td>{w}</td><td>{l}</td><td>{t}</td><td>0</td></tr>\n"
            )
        })
        .collect();
    format!(
        "<html><body><table>\
         <tr class=\"thd2\"><td>Team</td><td><a href=\"#\">W</a></td><td><a href=\"#\">L</a></td>\
         <td><a href=\"#\">T</a></td><td><a href=\"#\">Pct</a></td></tr>\n{body}</table></body></html>"
    )
}

/// Serves fixed pages and counts every fetch.
struct CountingFetcher {
    pages: HashMap<Season, String>,
    calls: Cell<u32>,
}

impl CountingFetcher {
    fn new(pages: &[(u16, String)]) -> Self {
        Self {
            pages: pages
                .iter()
                .map(|(season, page)| (Season::new(*season), page.clone()))
                .collect(),
            calls: Cell::new(0),
        }
    }
}

impl DocumentFetcher for CountingFetcher {
    async fn fetch(&self, season: Season) -> nfl_standings::Result<Document> {
        self.calls.set(self.calls.get() + 1);
        self.pages
            .get(&season)
            .map(|p| Document::from(p.as_str()))
            .ok_or_else(|| {
                StandingsError::Io(io::Error::new(io::ErrorKind::TimedOut, "timed out"))
            })
    }
}

fn afc_east_fetcher() -> CountingFetcher {
    CountingFetcher::new(&[
        (
            2010,
            page(&[
                ("New England Patriots", 10, 6, 0),
                ("New York Jets", 11, 5, 0),
            ]),
        ),
        (
            2011,
            page(&[
                ("New England Patriots", 12, 4, 0),
                ("New York Jets", 8, 8, 0),
            ]),
        ),
        (2013, page(&[("New England Patriots", 12, 4, 0)])),
    ])
}

#[tokio::test]
async fn test_patriots_two_season_total() {
    let fetcher = afc_east_fetcher();
    let mut parser =
        StatParser::new(&fetcher, SeasonRange::new(2010, 2011), ParserConfig::default()).unwrap();

    let totals = parser.sum_wins_losses().await.unwrap();

    assert_eq!(totals["New England Patriots"], TeamRecord::new(22, 10, 0));
    assert_eq!(totals["New York Jets"], TeamRecord::new(19, 13, 0));
    assert_eq!(fetcher.calls.get(), 2);
}

#[tokio::test]
async fn test_unreachable_season_does_not_stop_the_range() {
    let fetcher = afc_east_fetcher();
    let mut parser =
        StatParser::new(&fetcher, SeasonRange::new(2010, 2013), ParserConfig::default()).unwrap();

    let stats = parser.parse_stats(None).await.unwrap();

    let seasons: Vec<u16> = stats.keys().map(|s| s.as_u16()).collect();
    assert_eq!(seasons, vec![2010, 2011, 2013]);
    // 2010, 2011 and 2013 once each, 2012 three times
    assert_eq!(fetcher.calls.get(), 6);
}

#[tokio::test]
async fn test_partitioned_parsing_matches_full_range() {
    let fetcher = afc_east_fetcher();
    let mut whole =
        StatParser::new(&fetcher, SeasonRange::new(2010, 2013), ParserConfig::default()).unwrap();
    let whole_totals = whole.sum_wins_losses().await.unwrap();

    let mut first =
        StatParser::new(&fetcher, SeasonRange::new(2010, 2011), ParserConfig::default()).unwrap();
    let mut second =
        StatParser::new(&fetcher, SeasonRange::new(2012, 2013), ParserConfig::default()).unwrap();
    let merged = merge_totals(
        first.sum_wins_losses().await.unwrap(),
        &second.sum_wins_losses().await.unwrap(),
    );

    assert_eq!(merged, whole_totals);
    assert_eq!(sum_records(whole.stats_by_year().values()), whole_totals);
}

#[tokio::test]
async fn test_ranked_totals() {
    let fetcher = afc_east_fetcher();
    let mut parser =
        StatParser::new(&fetcher, SeasonRange::new(2010, 2013), ParserConfig::default()).unwrap();

    let totals = parser.sum_wins_losses().await.unwrap();
    let ranked = rank_by_wins(&totals);

    assert_eq!(ranked[0], ("New England Patriots".to_string(), TeamRecord::new(34, 14, 0)));
    assert_eq!(ranked[1].0, "New York Jets");
}

#[tokio::test]
async fn test_http_source_end_to_end() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/standings"))
        .and(query_param("season", "2010-REG"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(page(&[("Chicago Bears", 11, 5, 0)])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/standings"))
        .and(query_param("season", "2011-REG"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/standings"))
        .and(query_param("season", "2012-REG"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(page(&[("Chicago Bears", 10, 6, 0)])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = HttpFetcher::new(HttpConfig {
        base_url: mock_server.uri(),
        timeout: Duration::from_secs(5),
        ..HttpConfig::default()
    })
    .unwrap();
    let mut parser =
        StatParser::new(fetcher, SeasonRange::new(2010, 2012), ParserConfig::default()).unwrap();

    let totals = parser.sum_wins_losses().await.unwrap();

    assert_eq!(totals["Chicago Bears"], TeamRecord::new(21, 11, 0));
    assert!(!parser.stats_by_year().contains_key(&Season::new(2011)));
}

#[tokio::test]
async fn test_offline_directory_source() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("2010.html"),
        page(&[("Green Bay Packers", 10, 6, 0)]),
    )
    .unwrap();
    fs::write(
        temp_dir.path().join("2011.html"),
        page(&[("Green Bay Packers", 15, 1, 0)]),
    )
    .unwrap();

    let mut parser = StatParser::new(
        DirectoryFetcher::new(temp_dir.path()),
        "2010..2011".parse::<SeasonRange>().unwrap(),
        ParserConfig::default(),
    )
    .unwrap();

    let totals = parser.sum_wins_losses().await.unwrap();

    assert_eq!(totals["Green Bay Packers"], TeamRecord::new(25, 7, 0));
}

#[tokio::test]
async fn test_every_season_failing_is_not_an_error() {
    let fetcher = CountingFetcher::new(&[]);
    let mut parser =
        StatParser::new(&fetcher, SeasonRange::new(1993, 1995), ParserConfig::strict()).unwrap();

    let totals = parser.sum_wins_losses().await.unwrap();

    assert!(totals.is_empty());
    assert_eq!(fetcher.calls.get(), 9);
}
