use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use shared::{
    error::{ApiError, ErrorCode},
    protocol::TalkListing,
};
use speaking::{parse_instant, partition};

use crate::app_state::AppState;

pub(crate) type ApiResult<T> = Result<T, (StatusCode, Json<ApiError>)>;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ListingQuery {
    pub(crate) now: Option<String>,
    pub(crate) width: Option<String>,
}

pub(crate) async fn http_list_talks(
    State(state): State<Arc<AppState>>,
    Query(q): Query<ListingQuery>,
) -> ApiResult<Json<TalkListing>> {
    let now = parse_now(q.now.as_deref())?;
    let listing = partition(state.talks.entries(), now).to_listing();
    Ok(Json(listing))
}

/// The reference instant for a request: an explicit `now` query value, or the
/// wall clock read once.
pub(crate) fn parse_now(raw: Option<&str>) -> ApiResult<DateTime<Utc>> {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(Utc::now());
    };

    parse_instant(raw)
        .map_err(|_| validation(format!("now '{raw}' must be YYYY-MM-DD or RFC 3339")))
}

pub(crate) fn parse_width(raw: Option<&str>) -> ApiResult<Option<u32>> {
    let Some(raw) = raw.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return Ok(None);
    };
    raw.parse::<u32>()
        .map(Some)
        .map_err(|_| validation(format!("width '{raw}' must be a whole number of pixels")))
}

pub(crate) fn validation(message: impl Into<String>) -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiError::new(ErrorCode::Validation, message)),
    )
}

#[cfg(test)]
#[path = "tests/mod_tests.rs"]
mod tests;
