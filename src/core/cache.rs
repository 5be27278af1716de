//! Per-session memo of fetched standings documents.
//!
//! Only successful fetches are stored, so a season that failed can be
//! attempted again. Entries live as long as the cache and are never evicted.

use std::{cell::RefCell, collections::HashMap};

use tracing::{debug, info, warn};

use crate::nfl::fetch::{Document, DocumentFetcher};
use crate::{Result, Season};

/// Memoizes [`DocumentFetcher`] results by season.
///
/// Uses interior mutability so lookups take `&self`; not meant to be shared
/// between concurrent callers.
pub struct FetchCache<F> {
    fetcher: F,
    documents: RefCell<HashMap<Season, Document>>,
}

impl<F: DocumentFetcher> FetchCache<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            documents: RefCell::new(HashMap::new()),
        }
    }

    /// Cached document for `season`, fetching it on a miss.
    ///
    /// Failures are logged and returned without touching the cache.
    pub async fn get(&self, season: Season) -> Result<Document> {
        if let Some(document) = self.documents.borrow().get(&season) {
            debug!("Cache hit for season {}", season);
            return Ok(document.clone());
        }

        match self.fetcher.fetch(season).await {
            Ok(document) => {
                info!("Read stats for {}", season);
                self.documents
                    .borrow_mut()
                    .insert(season, document.clone());
                Ok(document)
            }
            Err(e) => {
                warn!("Couldn't read {}: {}", season, e);
                Err(e)
            }
        }
    }

    pub fn contains(&self, season: Season) -> bool {
        self.documents.borrow().contains_key(&season)
    }

    pub fn len(&self) -> usize {
        self.documents.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.borrow().is_empty()
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }
}
