//! Standings page retrieval: the fetcher seam, its HTTP and on-disk
//! implementations, and the retrying wrapper used by the parser.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use reqwest::Client;
use scraper::Html;

use crate::config::HttpConfig;
use crate::core::{cache::FetchCache, retry::retry, RetryPolicy};
use crate::{Result, Season, StandingsError};


/// Raw body of a fetched standings page. Cheap to clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document(Arc<str>);

impl Document {
    pub fn new(body: impl Into<Arc<str>>) -> Self {
        Self(body.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parse into a queryable HTML tree.
    pub fn html(&self) -> Html {
        Html::parse_document(&self.0)
    }
}

impl From<String> for Document {
    fn from(body: String) -> Self {
        Self::new(body)
    }
}

impl From<&str> for Document {
    fn from(body: &str) -> Self {
        Self::new(body)
    }
}

/// Source of one standings page per season.
#[allow(async_fn_in_trait)]
pub trait DocumentFetcher {
    async fn fetch(&self, season: Season) -> Result<Document>;
}

impl<T: DocumentFetcher + ?Sized> DocumentFetcher for &T {
    async fn fetch(&self, season: Season) -> Result<Document> {
        (**self).fetch(season).await
    }
}

/// Query parameters selecting the regular-season league table.
pub fn standings_query(season: Season) -> [(&'static str, String); 3] {
    [
        ("category", "league".to_string()),
        ("season", format!("{}-REG", season)),
        ("split", "Overall".to_string()),
    ]
}

/// Fetches standings pages over HTTP.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    base_url: String,
}

impl HttpFetcher {
    pub fn new(config: HttpConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn standings_url(&self) -> String {
        format!("{}/standings", self.base_url)
    }
}

impl DocumentFetcher for HttpFetcher {
    async fn fetch(&self, season: Season) -> Result<Document> {
        let body = self
            .client
            .get(self.standings_url())
            .query(&standings_query(season))
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(Document::from(body))
    }
}

/// Reads saved standings pages named `{season}.html` from a directory.
#[derive(Debug, Clone)]
pub struct DirectoryFetcher {
    dir: PathBuf,
}

impl DirectoryFetcher {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn page_path(&self, season: Season) -> PathBuf {
        self.dir.join(format!("{}.html", season))
    }
}

impl DocumentFetcher for DirectoryFetcher {
    async fn fetch(&self, season: Season) -> Result<Document> {
        let body = tokio::fs::read_to_string(self.page_path(season)).await?;
        Ok(Document::from(body))
    }
}

/// Either live HTTP or a directory of saved pages.
#[derive(Debug, Clone)]
pub enum StandingsSource {
    Http(HttpFetcher),
    Directory(DirectoryFetcher),
}

impl DocumentFetcher for StandingsSource {
    async fn fetch(&self, season: Season) -> Result<Document> {
        match self {
            StandingsSource::Http(fetcher) => fetcher.fetch(season).await,
            StandingsSource::Directory(fetcher) => fetcher.fetch(season).await,
        }
    }
}

/// [`FetchCache`] lookups retried under a [`RetryPolicy`].
pub struct RetryingFetch<F> {
    cache: FetchCache<F>,
    policy: RetryPolicy,
}

impl<F: DocumentFetcher> RetryingFetch<F> {
    pub fn new(fetcher: F, policy: RetryPolicy) -> Self {
        Self {
            cache: FetchCache::new(fetcher),
            policy,
        }
    }

    /// Document for `season`, or `TransportFailure` once every attempt failed.
    pub async fn fetch(&self, season: Season) -> Result<Document> {
        let cache = &self.cache;
        let operation_name = format!("Fetch season {}", season);

        retry(&self.policy, &operation_name, move || cache.get(season))
            .await
            .map_err(|exhausted| StandingsError::TransportFailure {
                season,
                attempts: exhausted.attempts,
                message: exhausted
                    .last_error
                    .map(|e| e.to_string())
                    .unwrap_or_else(|| "no attempts were made".to_string()),
            })
    }

    pub fn cache(&self) -> &FetchCache<F> {
        &self.cache
    }
}
