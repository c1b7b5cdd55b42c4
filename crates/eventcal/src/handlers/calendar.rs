//! Calendar view handlers: month grid, feed and status listing.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use uuid::Uuid;

use eventcal_core::calendar::{
    build_event_feed, filter_events_by_status, next_month_token, previous_month_token,
    resolve_month, sort_events_by_start, Event, EventFeedItem, EventStatus, MonthKey,
    MonthLayout,
};
use eventcal_core::storage::DateTimeRange;

use super::error::Result;
use crate::state::AppState;

/// A month grid with links to the adjacent months.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthView {
    pub layout: MonthLayout,
    pub previous: MonthKey,
    pub next: MonthKey,
}

/// Render the month named by `month` (`YYYY-M`), or the month of `today`.
///
/// Only the user's own events are placed on the grid, padding days included.
pub async fn month_view(
    state: &AppState,
    user_id: Uuid,
    month: Option<&str>,
    today: NaiveDate,
) -> Result<MonthView> {
    let first = resolve_month(month, today)?;
    let key = MonthKey::of(first);

    let (grid_start, grid_end) = state.calendar.grid_bounds(key.year(), key.month())?;
    let range = DateTimeRange::days(grid_start, grid_end)?;
    let events = state
        .event_repo
        .list_events_in_range(user_id, range)
        .await?;

    let layout = state.calendar.build(key.year(), key.month(), &events)?;
    tracing::debug!(
        %user_id,
        month = %key,
        weeks = layout.week_count(),
        events = layout.event_count(),
        "Built month view"
    );

    Ok(MonthView {
        layout,
        previous: previous_month_token(first)?,
        next: next_month_token(first)?,
    })
}

/// Events the user owns or was invited to, as feed items.
pub async fn calendar_feed(state: &AppState, user_id: Uuid) -> Result<Vec<EventFeedItem>> {
    let owned = state.event_repo.list_events(user_id).await?;

    let mut member_of = Vec::new();
    for membership in state.member_repo.list_memberships_for_user(user_id).await? {
        if let Some(event) = state.event_repo.get_event(membership.event_id).await? {
            member_of.push(event);
        }
    }
    sort_events_by_start(&mut member_of);

    Ok(build_event_feed(&owned, &member_of))
}

/// The user's events, optionally narrowed to running or completed ones.
pub async fn list_events(
    state: &AppState,
    user_id: Uuid,
    status: Option<EventStatus>,
    now: NaiveDateTime,
) -> Result<Vec<Event>> {
    let events = state.event_repo.list_events(user_id).await?;

    Ok(match status {
        Some(status) => filter_events_by_status(&events, status, now)
            .into_iter()
            .cloned()
            .collect(),
        None => events,
    })
}
