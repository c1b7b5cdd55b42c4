//! Event membership handlers.

use uuid::Uuid;

use eventcal_core::calendar::{AddMemberRequest, EventMember};
use eventcal_core::storage::RepositoryError;

use super::error::Result;
use crate::state::AppState;

/// Invite a user to an event.
///
/// Fails with `MembershipLimitExceeded` once the event is full; the rejection
/// is logged and returned to the caller.
pub async fn add_event_member(
    state: &AppState,
    event_id: Uuid,
    request: AddMemberRequest,
) -> Result<EventMember> {
    let user_id = request.user_id;
    match state.member_repo.add_member(event_id, user_id).await {
        Ok(member) => {
            tracing::info!(%event_id, %user_id, member_id = %member.id, "Added event member");
            Ok(member)
        }
        Err(err @ RepositoryError::MembershipLimitExceeded { .. }) => {
            tracing::warn!(%event_id, %user_id, error = %err, "Event member limit reached");
            Err(err.into())
        }
        Err(err) => Err(err.into()),
    }
}

/// Remove a membership.
pub async fn delete_event_member(state: &AppState, member_id: Uuid) -> Result<()> {
    state.member_repo.delete_member(member_id).await?;
    tracing::info!(%member_id, "Removed event member");
    Ok(())
}
