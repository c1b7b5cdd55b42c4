use async_trait::async_trait;
use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::calendar::{Event, EventMember, User};

use super::{DateTimeRange, Result};

/// Repository for event operations.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Gets an event by its ID.
    async fn get_event(&self, id: Uuid) -> Result<Option<Event>>;

    /// Returns the event with exactly these fields, creating it if needed.
    ///
    /// The boolean is true when a new event was created.
    async fn create_or_get_event(
        &self,
        owner_id: Uuid,
        title: &str,
        description: &str,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
    ) -> Result<(Event, bool)>;

    /// Lists all events owned by a user, ordered by start time.
    async fn list_events(&self, owner_id: Uuid) -> Result<Vec<Event>>;

    /// Lists a user's events starting within the range, ordered by start time.
    async fn list_events_in_range(
        &self,
        owner_id: Uuid,
        range: DateTimeRange,
    ) -> Result<Vec<Event>>;

    /// Lists events of any owner whose title contains `text`.
    async fn filter_by_title_substring(&self, text: &str) -> Result<Vec<Event>>;

    /// Updates an existing event.
    async fn update_event(&self, event: &Event) -> Result<()>;

    /// Deletes an event and its memberships.
    async fn delete_event(&self, id: Uuid) -> Result<()>;
}

/// Repository for event membership operations.
#[async_trait]
pub trait MemberRepository: Send + Sync {
    /// Gets a membership by its ID.
    async fn get_member(&self, id: Uuid) -> Result<Option<EventMember>>;

    /// Lists the memberships of an event.
    async fn list_members(&self, event_id: Uuid) -> Result<Vec<EventMember>>;

    /// Lists the memberships held by a user.
    async fn list_memberships_for_user(&self, user_id: Uuid) -> Result<Vec<EventMember>>;

    /// Adds a user to an event.
    ///
    /// Fails with `MembershipLimitExceeded` when the event is full and with
    /// `AlreadyExists` when the user is already a member. No membership is
    /// created on failure.
    async fn add_member(&self, event_id: Uuid, user_id: Uuid) -> Result<EventMember>;

    /// Deletes a membership by its ID.
    async fn delete_member(&self, id: Uuid) -> Result<()>;
}

/// Repository for user operations.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Gets a user by their ID.
    async fn get_user(&self, id: Uuid) -> Result<Option<User>>;

    /// Creates a new user.
    async fn create_user(&self, user: &User) -> Result<()>;

    /// Deletes a user with their events and memberships.
    async fn delete_user(&self, id: Uuid) -> Result<()>;
}
