use chrono::{DateTime, Utc};
use rinkside_parser::{parse_schedule, Schedule};
use thiserror::Error;

/// Published spreadsheet exports, one per schedule track.
const MAIN_FEED: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vSqRHc06sDjAFqbu41pzeJK0QHB9YSovLUaRhBu7tbsMcpiZJgH-JAOuJUi-Omy8-6TUdDeGNp0-RXg/pub?output=csv";
const PATH1_FEED: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vSqRHc06sDjAFqbu41pzeJK0QHB9YSovLUaRhBu7tbsMcpiZJgH-JAOuJUi-Omy8-6TUdDeGNp0-RXg/pub?gid=122183591&single=true&output=csv";
const PATH2_FEED: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vSqRHc06sDjAFqbu41pzeJK0QHB9YSovLUaRhBu7tbsMcpiZJgH-JAOuJUi-Omy8-6TUdDeGNp0-RXg/pub?gid=1377983576&single=true&output=csv";

#[derive(Debug, Clone)]
pub struct FeedUrls {
    pub main: String,
    pub path1: String,
    pub path2: String,
}

impl Default for FeedUrls {
    fn default() -> Self {
        Self {
            main: MAIN_FEED.to_string(),
            path1: PATH1_FEED.to_string(),
            path2: PATH2_FEED.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum RefreshError {
    #[error("a refresh is already in flight")]
    InFlight,
    #[error("fetching the {feed} feed failed: {source}")]
    Fetch {
        feed: &'static str,
        source: reqwest::Error,
    },
}

/// One complete, consistent result of a refresh cycle. Replaced wholesale,
/// never mutated.
#[derive(Debug)]
pub struct Snapshot {
    pub main: Schedule,
    pub path1: Schedule,
    pub path2: Schedule,
    pub updated_at: DateTime<Utc>,
}

/// Fetch all three feeds concurrently and parse each body. Any single
/// failure fails the whole cycle.
pub async fn fetch_feeds(http: &reqwest::Client, urls: &FeedUrls) -> Result<Snapshot, RefreshError> {
    let (main, path1, path2) = tokio::try_join!(
        fetch_feed(http, &urls.main, "main"),
        fetch_feed(http, &urls.path1, "path1"),
        fetch_feed(http, &urls.path2, "path2"),
    )?;

    Ok(Snapshot {
        main: parse_schedule(main),
        path1: parse_schedule(path1),
        path2: parse_schedule(path2),
        updated_at: Utc::now(),
    })
}

async fn fetch_feed(
    http: &reqwest::Client,
    url: &str,
    feed: &'static str,
) -> Result<String, RefreshError> {
    let wrap = |source| RefreshError::Fetch { feed, source };

    let response = http.get(cache_busted(url)).send().await.map_err(wrap)?;
    let response = response.error_for_status().map_err(wrap)?;

    response.text().await.map_err(wrap)
}

/// A throwaway `timestamp` query parameter bypasses the export CDN cache.
fn cache_busted(url: &str) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{url}{separator}timestamp={}", Utc::now().timestamp_millis())
}
