//! Event CRUD handlers.

use serde::Serialize;
use uuid::Uuid;

use eventcal_core::calendar::{
    validate_event, CreateEventRequest, Event, EventMember, UpdateEventRequest,
};

use super::error::{HandlerError, Result};
use crate::state::AppState;

/// An event together with its members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventDetails {
    pub event: Event,
    pub members: Vec<EventMember>,
}

/// Validates the request and stores it, reusing an identical existing event.
///
/// Returns the event and whether it was newly created.
pub(crate) async fn create_or_get(
    state: &AppState,
    user_id: Uuid,
    request: CreateEventRequest,
) -> Result<(Event, bool)> {
    let candidate = request.into_event(user_id);
    validate_event(&candidate)?;

    let (event, created) = state
        .event_repo
        .create_or_get_event(
            user_id,
            &candidate.title,
            &candidate.description,
            candidate.start_time,
            candidate.end_time,
        )
        .await?;

    if created {
        tracing::info!(event_id = %event.id, %user_id, title = %event.title, "Created event");
    } else {
        tracing::debug!(event_id = %event.id, %user_id, "Event already exists");
    }
    Ok((event, created))
}

/// Create an event owned by `user_id`.
pub async fn create_event(
    state: &AppState,
    user_id: Uuid,
    request: CreateEventRequest,
) -> Result<Event> {
    let (event, _) = create_or_get(state, user_id, request).await?;
    Ok(event)
}

async fn owned_event(state: &AppState, user_id: Uuid, id: Uuid) -> Result<Event> {
    let event = state
        .event_repo
        .get_event(id)
        .await?
        .ok_or_else(|| HandlerError::not_found("Event", id))?;

    if event.owner_id != user_id {
        tracing::warn!(event_id = %id, %user_id, "Rejected change by non-owner");
        return Err(HandlerError::Forbidden { id });
    }
    Ok(event)
}

/// Apply a partial update to an event. Only the owner may edit.
pub async fn edit_event(
    state: &AppState,
    user_id: Uuid,
    id: Uuid,
    request: UpdateEventRequest,
) -> Result<Event> {
    let mut event = owned_event(state, user_id, id).await?;

    request.apply_to(&mut event);
    validate_event(&event)?;
    state.event_repo.update_event(&event).await?;

    tracing::info!(event_id = %id, "Updated event");
    Ok(event)
}

/// Delete an event and its memberships. Only the owner may delete.
pub async fn delete_event(state: &AppState, user_id: Uuid, id: Uuid) -> Result<()> {
    owned_event(state, user_id, id).await?;
    state.event_repo.delete_event(id).await?;

    tracing::info!(event_id = %id, "Deleted event");
    Ok(())
}

/// Fetch an event with its member list.
pub async fn event_details(state: &AppState, id: Uuid) -> Result<EventDetails> {
    let event = state
        .event_repo
        .get_event(id)
        .await?
        .ok_or_else(|| HandlerError::not_found("Event", id))?;
    let members = state.member_repo.list_members(id).await?;

    Ok(EventDetails { event, members })
}
