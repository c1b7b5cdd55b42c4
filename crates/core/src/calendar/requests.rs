//! Request types for event operations.
//!
//! Pure data types with no I/O. Timestamps accept the `datetime-local` form
//! format (`2024-03-15T10:30`) as well as spreadsheet-style values.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::serde::{
    deserialize_datetime, deserialize_optional_datetime, deserialize_optional_string,
    deserialize_text_cell,
};
use crate::storage::{DateRangeError, DateTimeRange};

use super::types::Event;

/// Request payload for creating a new event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(deserialize_with = "deserialize_datetime")]
    pub start_time: NaiveDateTime,
    #[serde(deserialize_with = "deserialize_datetime")]
    pub end_time: NaiveDateTime,
}

impl CreateEventRequest {
    pub fn new(title: impl Into<String>, start_time: NaiveDateTime, end_time: NaiveDateTime) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            start_time,
            end_time,
        }
    }

    /// Set the event description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Convert into an Event owned by `owner_id`.
    pub fn into_event(self, owner_id: Uuid) -> Event {
        Event::new(owner_id, self.title, self.start_time, self.end_time)
            .with_description(self.description)
    }
}

/// Request payload for editing an event. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateEventRequest {
    #[serde(
        default,
        deserialize_with = "deserialize_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_time: Option<NaiveDateTime>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_datetime",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_time: Option<NaiveDateTime>,
}

impl UpdateEventRequest {
    /// Create an empty update request.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_start_time(mut self, start_time: NaiveDateTime) -> Self {
        self.start_time = Some(start_time);
        self
    }

    pub fn with_end_time(mut self, end_time: NaiveDateTime) -> Self {
        self.end_time = Some(end_time);
        self
    }

    /// Apply updates to an existing event.
    pub fn apply_to(self, event: &mut Event) {
        if let Some(title) = self.title {
            event.title = title;
        }
        if let Some(description) = self.description {
            event.description = description;
        }
        if let Some(start_time) = self.start_time {
            event.start_time = start_time;
        }
        if let Some(end_time) = self.end_time {
            event.end_time = end_time;
        }
    }
}

/// Request payload for inviting a user to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddMemberRequest {
    pub user_id: Uuid,
}

/// Search for events starting within an inclusive window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRangeRequest {
    #[serde(rename = "fromDate", deserialize_with = "deserialize_datetime")]
    pub from_date: NaiveDateTime,
    #[serde(rename = "toDate", deserialize_with = "deserialize_datetime")]
    pub to_date: NaiveDateTime,
}

impl SearchRangeRequest {
    pub fn new(from_date: NaiveDateTime, to_date: NaiveDateTime) -> Self {
        Self { from_date, to_date }
    }

    pub fn range(&self) -> Result<DateTimeRange, DateRangeError> {
        DateTimeRange::new(self.from_date, self.to_date)
    }
}

/// Search for events whose title contains a fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchTitleRequest {
    pub title: String,
}

impl SearchTitleRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// One row of an event import sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRow {
    #[serde(deserialize_with = "deserialize_text_cell")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "deserialize_datetime")]
    pub start_time: NaiveDateTime,
    #[serde(deserialize_with = "deserialize_datetime")]
    pub end_time: NaiveDateTime,
}

impl From<ImportRow> for CreateEventRequest {
    fn from(row: ImportRow) -> Self {
        Self {
            title: row.title,
            description: row.description.unwrap_or_default(),
            start_time: row.start_time,
            end_time: row.end_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn datetime(day: u32, hour: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_opt(hour, min, 0)
            .unwrap()
    }

    #[test]
    fn test_create_request_into_event() {
        let owner = Uuid::new_v4();
        let event = CreateEventRequest::new("Retro", datetime(15, 10, 0), datetime(15, 11, 0))
            .with_description("Sprint 12")
            .into_event(owner);

        assert_eq!(event.owner_id, owner);
        assert_eq!(event.title, "Retro");
        assert_eq!(event.description, "Sprint 12");
        assert_eq!(event.start_time, datetime(15, 10, 0));
    }

    #[test]
    fn test_create_request_from_form_json() {
        let json = r#"{"title": "Retro", "start_time": "2024-03-15T10:00", "end_time": "2024-03-15T11:00"}"#;
        let request: CreateEventRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.description, "");
        assert_eq!(request.end_time, datetime(15, 11, 0));
    }

    #[test]
    fn test_update_request_applies_only_present_fields() {
        let mut event = CreateEventRequest::new("Retro", datetime(15, 10, 0), datetime(15, 11, 0))
            .with_description("Sprint 12")
            .into_event(Uuid::new_v4());

        UpdateEventRequest::new()
            .with_title("Retrospective")
            .with_end_time(datetime(15, 12, 0))
            .apply_to(&mut event);

        assert_eq!(event.title, "Retrospective");
        assert_eq!(event.description, "Sprint 12");
        assert_eq!(event.start_time, datetime(15, 10, 0));
        assert_eq!(event.end_time, datetime(15, 12, 0));
    }

    #[test]
    fn test_update_request_blank_title_is_ignored() {
        let json = r#"{"title": "", "start_time": ""}"#;
        let request: UpdateEventRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request, UpdateEventRequest::new());
    }

    #[test]
    fn test_search_range_request_uses_form_field_names() {
        let json = r#"{"fromDate": "2024-03-01T00:00", "toDate": "2024-03-31T23:59"}"#;
        let request: SearchRangeRequest = serde_json::from_str(json).unwrap();

        let range = request.range().unwrap();
        assert_eq!(range.start, datetime(1, 0, 0));
        assert_eq!(range.end, datetime(31, 23, 59));
    }

    #[test]
    fn test_search_range_request_rejects_reversed_window() {
        let request = SearchRangeRequest::new(datetime(31, 0, 0), datetime(1, 0, 0));
        assert_eq!(request.range(), Err(DateRangeError::InvalidRange));
    }

    #[test]
    fn test_import_row_into_create_request() {
        let json = r#"{"title": 42, "description": null, "start_time": "2024-03-15 10:00:00", "end_time": "2024-03-15 11:00:00"}"#;
        let row: ImportRow = serde_json::from_str(json).unwrap();

        let request = CreateEventRequest::from(row);

        assert_eq!(request.title, "42");
        assert_eq!(request.description, "");
        assert_eq!(request.start_time, datetime(15, 10, 0));
    }
}
