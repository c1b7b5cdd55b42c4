//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use eventcal_core::calendar::{
    check_member_capacity, filter_events_by_range, filter_events_by_title, Event, EventMember,
    User,
};
use eventcal_core::storage::{
    DateTimeRange, EventRepository, MemberRepository, RepositoryError, Result, UserRepository,
    DEFAULT_MEMBER_LIMIT,
};

/// In-memory storage backend.
///
/// Uses collections wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the repository is dropped.
///
/// Locks are always taken in the order users, events, members.
/// Memberships are kept in join order.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
    events: Arc<RwLock<HashMap<Uuid, Event>>>,
    members: Arc<RwLock<Vec<EventMember>>>,
    member_limit: usize,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
            events: Arc::new(RwLock::new(HashMap::new())),
            members: Arc::new(RwLock::new(Vec::new())),
            member_limit: DEFAULT_MEMBER_LIMIT,
        }
    }

    /// Sets the maximum number of members per event.
    pub fn with_member_limit(mut self, limit: usize) -> Self {
        self.member_limit = limit;
        self
    }
}

fn sorted_by_start<'a>(events: impl IntoIterator<Item = &'a Event>) -> Vec<Event> {
    let mut events: Vec<Event> = events.into_iter().cloned().collect();
    events.sort_by(|a, b| {
        a.start_time
            .cmp(&b.start_time)
            .then_with(|| a.title.cmp(&b.title))
    });
    events
}

#[async_trait]
impl EventRepository for InMemoryRepository {
    async fn get_event(&self, id: Uuid) -> Result<Option<Event>> {
        let events = self.events.read().await;
        Ok(events.get(&id).cloned())
    }

    async fn create_or_get_event(
        &self,
        owner_id: Uuid,
        title: &str,
        description: &str,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
    ) -> Result<(Event, bool)> {
        let users = self.users.read().await;
        if !users.contains_key(&owner_id) {
            return Err(RepositoryError::not_found("User", owner_id));
        }

        let mut events = self.events.write().await;
        if let Some(existing) = events
            .values()
            .find(|e| e.same_fields(owner_id, title, description, start_time, end_time))
        {
            return Ok((existing.clone(), false));
        }

        let event =
            Event::new(owner_id, title, start_time, end_time).with_description(description);
        events.insert(event.id, event.clone());
        Ok((event, true))
    }

    async fn list_events(&self, owner_id: Uuid) -> Result<Vec<Event>> {
        let events = self.events.read().await;
        Ok(sorted_by_start(events.values().filter(|e| e.owner_id == owner_id)))
    }

    async fn list_events_in_range(
        &self,
        owner_id: Uuid,
        range: DateTimeRange,
    ) -> Result<Vec<Event>> {
        let events = self.events.read().await;
        let owned = events.values().filter(|e| e.owner_id == owner_id);
        Ok(sorted_by_start(filter_events_by_range(owned, &range)))
    }

    async fn filter_by_title_substring(&self, text: &str) -> Result<Vec<Event>> {
        let events = self.events.read().await;
        Ok(sorted_by_start(filter_events_by_title(events.values(), text)))
    }

    async fn update_event(&self, event: &Event) -> Result<()> {
        let mut events = self.events.write().await;
        if !events.contains_key(&event.id) {
            return Err(RepositoryError::not_found("Event", event.id));
        }
        events.insert(event.id, event.clone());
        Ok(())
    }

    async fn delete_event(&self, id: Uuid) -> Result<()> {
        let mut events = self.events.write().await;
        let mut members = self.members.write().await;
        if events.remove(&id).is_none() {
            return Err(RepositoryError::not_found("Event", id));
        }
        members.retain(|m| m.event_id != id);
        Ok(())
    }
}

#[async_trait]
impl MemberRepository for InMemoryRepository {
    async fn get_member(&self, id: Uuid) -> Result<Option<EventMember>> {
        let members = self.members.read().await;
        Ok(members.iter().find(|m| m.id == id).cloned())
    }

    async fn list_members(&self, event_id: Uuid) -> Result<Vec<EventMember>> {
        let members = self.members.read().await;
        Ok(members
            .iter()
            .filter(|m| m.event_id == event_id)
            .cloned()
            .collect())
    }

    async fn list_memberships_for_user(&self, user_id: Uuid) -> Result<Vec<EventMember>> {
        let members = self.members.read().await;
        Ok(members
            .iter()
            .filter(|m| m.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn add_member(&self, event_id: Uuid, user_id: Uuid) -> Result<EventMember> {
        let users = self.users.read().await;
        let events = self.events.read().await;
        let mut members = self.members.write().await;

        if !events.contains_key(&event_id) {
            return Err(RepositoryError::not_found("Event", event_id));
        }
        if !users.contains_key(&user_id) {
            return Err(RepositoryError::not_found("User", user_id));
        }
        if members
            .iter()
            .any(|m| m.event_id == event_id && m.user_id == user_id)
        {
            return Err(RepositoryError::already_exists(
                "EventMember",
                format!("{event_id}:{user_id}"),
            ));
        }

        let existing = members.iter().filter(|m| m.event_id == event_id).count();
        check_member_capacity(event_id, existing, self.member_limit)?;

        let member = EventMember::new(event_id, user_id);
        members.push(member.clone());
        Ok(member)
    }

    async fn delete_member(&self, id: Uuid) -> Result<()> {
        let mut members = self.members.write().await;
        let position = members
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| RepositoryError::not_found("EventMember", id))?;
        members.remove(position);
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryRepository {
    async fn get_user(&self, id: Uuid) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn create_user(&self, user: &User) -> Result<()> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.id) {
            return Err(RepositoryError::already_exists("User", user.id));
        }
        users.insert(user.id, user.clone());
        Ok(())
    }

    async fn delete_user(&self, id: Uuid) -> Result<()> {
        let mut users = self.users.write().await;
        let mut events = self.events.write().await;
        let mut members = self.members.write().await;

        if users.remove(&id).is_none() {
            return Err(RepositoryError::not_found("User", id));
        }
        events.retain(|_, e| e.owner_id != id);
        members.retain(|m| m.user_id != id && events.contains_key(&m.event_id));
        Ok(())
    }
}
