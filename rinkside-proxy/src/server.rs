use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use log::{error, info};
use serde::{Deserialize, Serialize};

use rinkside_parser::{compare_dates, display_date, Category, Schedule, Session};

use crate::feeds::{RefreshError, Snapshot};
use crate::geocode::{self, Coordinates};
use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/schedule", get(schedule))
        .route("/api/schedule/grouped", get(grouped))
        .route("/api/dates", get(dates))
        .route("/api/sessions", get(sessions))
        .route("/api/refresh", post(refresh))
        .route("/api/map/embed", get(map_embed))
        .route("/api/map/locate", get(map_locate))
        .route("/calendar.ics", get(calendar))
        .with_state(state)
}

/// The three schedule tracks a client can ask for. Defaults to the main
/// track when the query parameter is absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Feed {
    #[default]
    Main,
    Path1,
    Path2,
}

impl Feed {
    fn name(self) -> &'static str {
        match self {
            Feed::Main => "main",
            Feed::Path1 => "path1",
            Feed::Path2 => "path2",
        }
    }

    fn schedule(self, snapshot: &Snapshot) -> &Schedule {
        match self {
            Feed::Main => &snapshot.main,
            Feed::Path1 => &snapshot.path1,
            Feed::Path2 => &snapshot.path2,
        }
    }
}

#[derive(Deserialize)]
struct FeedQuery {
    #[serde(default)]
    feed: Feed,
}

#[derive(Deserialize)]
struct GroupedQuery {
    #[serde(default)]
    feed: Feed,
    #[serde(default)]
    chronological: bool,
}

#[derive(Deserialize)]
struct LocationQuery {
    location: String,
}

/// All data endpoints serve from the last good snapshot. Until the first
/// refresh succeeds there is nothing to serve.
async fn require_snapshot(state: &AppState) -> Result<Arc<Snapshot>, Response> {
    state.snapshot().await.ok_or_else(|| {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            "No schedule data has been loaded yet",
        )
            .into_response()
    })
}

#[derive(Serialize)]
struct ScheduleResponse<'a> {
    feed: &'static str,
    updated_at: String,
    sessions: &'a [Session],
}

async fn schedule(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FeedQuery>,
) -> Response {
    let snapshot = match require_snapshot(&state).await {
        Ok(snapshot) => snapshot,
        Err(response) => return response,
    };

    Json(ScheduleResponse {
        feed: query.feed.name(),
        updated_at: snapshot.updated_at.to_rfc3339(),
        sessions: &query.feed.schedule(&snapshot).sessions,
    })
    .into_response()
}

#[derive(Serialize)]
struct GroupView {
    date: String,
    display_date: String,
    sessions: Vec<Session>,
}

#[derive(Serialize)]
struct GroupedResponse {
    feed: &'static str,
    updated_at: String,
    groups: Vec<GroupView>,
}

async fn grouped(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GroupedQuery>,
) -> Response {
    let snapshot = match require_snapshot(&state).await {
        Ok(snapshot) => snapshot,
        Err(response) => return response,
    };

    let mut groups = query.feed.schedule(&snapshot).by_date();

    if query.chronological {
        groups.sort_by(|a, b| compare_dates(&a.date, &b.date));
    }

    let groups = groups
        .into_iter()
        .map(|group| GroupView {
            display_date: display_date(&group.date),
            date: group.date,
            sessions: group.sessions,
        })
        .collect();

    Json(GroupedResponse {
        feed: query.feed.name(),
        updated_at: snapshot.updated_at.to_rfc3339(),
        groups,
    })
    .into_response()
}

#[derive(Serialize)]
struct DateView {
    value: String,
    display: String,
}

async fn dates(State(state): State<Arc<AppState>>, Query(query): Query<FeedQuery>) -> Response {
    let snapshot = match require_snapshot(&state).await {
        Ok(snapshot) => snapshot,
        Err(response) => return response,
    };

    let dates: Vec<DateView> = query
        .feed
        .schedule(&snapshot)
        .unique_dates()
        .into_iter()
        .map(|value| DateView {
            display: display_date(&value),
            value,
        })
        .collect();

    Json(dates).into_response()
}

#[derive(Serialize)]
struct LabelView {
    label: String,
    category: Category,
}

async fn sessions(State(state): State<Arc<AppState>>, Query(query): Query<FeedQuery>) -> Response {
    let snapshot = match require_snapshot(&state).await {
        Ok(snapshot) => snapshot,
        Err(response) => return response,
    };

    let labels: Vec<LabelView> = query
        .feed
        .schedule(&snapshot)
        .session_labels()
        .into_iter()
        .map(|label| LabelView {
            category: Category::of(&label),
            label,
        })
        .collect();

    Json(labels).into_response()
}

#[derive(Serialize)]
struct RefreshResponse {
    updated_at: String,
}

async fn refresh(State(state): State<Arc<AppState>>) -> Response {
    match state.refresh().await {
        Ok(snapshot) => {
            let total = snapshot.main.sessions.len()
                + snapshot.path1.sessions.len()
                + snapshot.path2.sessions.len();
            info!("Refreshed all feeds, {total} sessions in total");

            Json(RefreshResponse {
                updated_at: snapshot.updated_at.to_rfc3339(),
            })
            .into_response()
        }
        Err(RefreshError::InFlight) => {
            (StatusCode::CONFLICT, "A refresh is already in flight").into_response()
        }
        Err(err) => {
            error!("Refresh failed, keeping previous data: {err}");
            (StatusCode::BAD_GATEWAY, format!("Refresh failed: {err}")).into_response()
        }
    }
}

async fn calendar(State(state): State<Arc<AppState>>, Query(query): Query<FeedQuery>) -> Response {
    let snapshot = match require_snapshot(&state).await {
        Ok(snapshot) => snapshot,
        Err(response) => return response,
    };

    let calendar = query.feed.schedule(&snapshot).to_ics(query.feed.name());

    (
        [("content-type", "text/calendar")],
        calendar.to_string(),
    )
        .into_response()
}

#[derive(Serialize)]
struct EmbedResponse<'a> {
    location: &'a str,
    url: String,
}

async fn map_embed(Query(query): Query<LocationQuery>) -> Response {
    Json(EmbedResponse {
        url: geocode::embed_url(&query.location),
        location: &query.location,
    })
    .into_response()
}

#[derive(Serialize)]
struct LocateResponse<'a> {
    location: &'a str,
    coordinates: Coordinates,
}

async fn map_locate(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LocationQuery>,
) -> Response {
    let Some(geocoder) = &state.geocoder else {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            "No geocoding token is configured",
        )
            .into_response();
    };

    match geocoder.locate(&query.location).await {
        Ok(Some(coordinates)) => Json(LocateResponse {
            location: &query.location,
            coordinates,
        })
        .into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "Location not found").into_response(),
        Err(err) => {
            error!("Geocoding lookup failed: {err}");
            (StatusCode::BAD_GATEWAY, "Geocoding lookup failed").into_response()
        }
    }
}
