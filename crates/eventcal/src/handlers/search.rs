//! Event search handlers.

use uuid::Uuid;

use eventcal_core::calendar::{Event, SearchRangeRequest, SearchTitleRequest};

use super::error::Result;
use crate::state::AppState;

/// The user's events starting inside the inclusive window.
pub async fn search_by_range(
    state: &AppState,
    user_id: Uuid,
    request: SearchRangeRequest,
) -> Result<Vec<Event>> {
    let range = request.range()?;
    let events = state.event_repo.list_events_in_range(user_id, range).await?;

    tracing::debug!(%user_id, from = %range.start, to = %range.end, found = events.len(), "Range search");
    Ok(events)
}

/// All events whose title contains the requested text (case-sensitive).
pub async fn search_by_title(state: &AppState, request: SearchTitleRequest) -> Result<Vec<Event>> {
    let events = state
        .event_repo
        .filter_by_title_substring(&request.title)
        .await?;

    tracing::debug!(title = %request.title, found = events.len(), "Title search");
    Ok(events)
}
