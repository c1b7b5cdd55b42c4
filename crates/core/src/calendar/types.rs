use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Timestamp format used by the calendar feed.
pub const FEED_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// A user that can own events and be invited to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl User {
    /// Creates a new user with a random ID.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
        }
    }
}

/// A scheduled item owned by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub description: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}

impl Event {
    /// Creates a new event with a random ID.
    pub fn new(
        owner_id: Uuid,
        title: impl Into<String>,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            title: title.into(),
            description: String::new(),
            start_time,
            end_time,
        }
    }

    /// Sets the description for this event.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// The calendar day this event is displayed on.
    pub fn start_date(&self) -> NaiveDate {
        self.start_time.date()
    }

    /// Returns true when every user-supplied field matches.
    ///
    /// Used for get-or-create semantics: two events with identical owner,
    /// title, description and times are the same event.
    pub fn same_fields(
        &self,
        owner_id: Uuid,
        title: &str,
        description: &str,
        start_time: NaiveDateTime,
        end_time: NaiveDateTime,
    ) -> bool {
        self.owner_id == owner_id
            && self.title == title
            && self.description == description
            && self.start_time == start_time
            && self.end_time == end_time
    }
}

/// Association recording that a user takes part in an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMember {
    pub id: Uuid,
    pub event_id: Uuid,
    pub user_id: Uuid,
}

impl EventMember {
    pub fn new(event_id: Uuid, user_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            event_id,
            user_id,
        }
    }
}

/// Whether an event is still running or already over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    /// The event has not ended yet.
    Running,
    /// The event ended before the reference time.
    Completed,
}

/// Flat event representation consumed by calendar widgets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFeedItem {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub start: String,
    pub end: String,
}

impl From<&Event> for EventFeedItem {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id,
            title: event.title.clone(),
            description: event.description.clone(),
            start: event.start_time.format(FEED_DATETIME_FORMAT).to_string(),
            end: event.end_time.format(FEED_DATETIME_FORMAT).to_string(),
        }
    }
}
