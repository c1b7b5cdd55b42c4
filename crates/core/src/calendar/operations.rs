use std::borrow::Borrow;
use std::collections::HashSet;

use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::storage::{DateTimeRange, RepositoryError};

use super::error::EventError;
use super::types::{Event, EventFeedItem, EventStatus};

/// Maximum title length accepted for an event.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Validates an event before creation or update.
pub fn validate_event(event: &Event) -> Result<(), EventError> {
    if event.title.trim().is_empty() {
        return Err(EventError::EmptyTitle);
    }
    if event.title.chars().count() > MAX_TITLE_LENGTH {
        return Err(EventError::TitleTooLong);
    }
    if event.end_time < event.start_time {
        return Err(EventError::EndBeforeStart);
    }
    Ok(())
}

/// Sorts events by start time. Events starting together keep their order.
pub fn sort_events_by_start<E: Borrow<Event>>(events: &mut [E]) {
    events.sort_by_key(|event| Borrow::<Event>::borrow(event).start_time);
}

/// Events whose start time lies within the inclusive range.
pub fn filter_events_by_range<'a, I>(events: I, range: &DateTimeRange) -> Vec<&'a Event>
where
    I: IntoIterator<Item = &'a Event>,
{
    events
        .into_iter()
        .filter(|event| range.contains(event.start_time))
        .collect()
}

/// Events whose title contains `text`. Matching is case-sensitive.
pub fn filter_events_by_title<'a, I>(events: I, text: &str) -> Vec<&'a Event>
where
    I: IntoIterator<Item = &'a Event>,
{
    events
        .into_iter()
        .filter(|event| event.title.contains(text))
        .collect()
}

/// Classifies an event relative to `now`.
pub fn event_status(event: &Event, now: NaiveDateTime) -> EventStatus {
    if event.end_time >= now {
        EventStatus::Running
    } else {
        EventStatus::Completed
    }
}

pub fn filter_events_by_status(
    events: &[Event],
    status: EventStatus,
    now: NaiveDateTime,
) -> Vec<&Event> {
    events
        .iter()
        .filter(|event| event_status(event, now) == status)
        .collect()
}

/// Builds the calendar feed: events the user was invited to, then the
/// user's own events. Each event appears once.
pub fn build_event_feed(owned: &[Event], member_of: &[Event]) -> Vec<EventFeedItem> {
    let mut seen: HashSet<Uuid> = HashSet::new();
    member_of
        .iter()
        .chain(owned.iter())
        .filter(|event| seen.insert(event.id))
        .map(EventFeedItem::from)
        .collect()
}

/// Checks that one more member fits on an event that already has `existing`.
pub fn check_member_capacity(
    event_id: Uuid,
    existing: usize,
    limit: usize,
) -> Result<(), RepositoryError> {
    if existing >= limit {
        return Err(RepositoryError::MembershipLimitExceeded { event_id, limit });
    }
    Ok(())
}
