use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::feeds::{fetch_feeds, FeedUrls, RefreshError, Snapshot};
use crate::geocode::Geocoder;

/// Shared application state: the latest snapshot of all three feeds plus
/// the clients used to produce the next one. Components read through
/// [`AppState::snapshot`] and never hold their own copy of the data.
pub struct AppState {
    http: reqwest::Client,
    feeds: FeedUrls,
    snapshot: RwLock<Option<Arc<Snapshot>>>,
    refresh_guard: Mutex<()>,
    pub geocoder: Option<Geocoder>,
}

impl AppState {
    pub fn new(feeds: FeedUrls, geocoder_token: Option<String>) -> Self {
        let http = reqwest::Client::new();

        Self {
            geocoder: geocoder_token.map(|token| Geocoder::new(http.clone(), token)),
            http,
            feeds,
            snapshot: RwLock::new(None),
            refresh_guard: Mutex::new(()),
        }
    }

    /// The latest complete snapshot, if any refresh has succeeded yet.
    pub async fn snapshot(&self) -> Option<Arc<Snapshot>> {
        self.snapshot.read().await.clone()
    }

    /// Fetch and parse all three feeds, then replace the whole snapshot in
    /// one write. Fails as a unit: any feed error leaves the previous
    /// snapshot untouched. A second invocation while one is running is
    /// rejected instead of racing it.
    pub async fn refresh(&self) -> Result<Arc<Snapshot>, RefreshError> {
        let _guard = self
            .refresh_guard
            .try_lock()
            .map_err(|_| RefreshError::InFlight)?;

        let snapshot = Arc::new(fetch_feeds(&self.http, &self.feeds).await?);
        *self.snapshot.write().await = Some(Arc::clone(&snapshot));

        Ok(snapshot)
    }
}
