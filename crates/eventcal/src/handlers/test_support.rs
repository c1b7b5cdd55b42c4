//! Shared fixtures for handler tests.

use chrono::{NaiveDate, NaiveDateTime};

use eventcal_core::calendar::{CreateEventRequest, Event, User};

use crate::state::AppState;

use super::events::create_event;

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Timestamp in March 2024.
pub fn datetime(day: u32, hour: u32, min: u32) -> NaiveDateTime {
    date(2024, 3, day).and_hms_opt(hour, min, 0).unwrap()
}

pub async fn add_user(state: &AppState, name: &str) -> User {
    state
        .register_user(User::new(name, format!("{}@example.com", name.to_lowercase())))
        .await
        .unwrap()
}

pub async fn state_with_user(name: &str) -> (AppState, User) {
    let state = AppState::default();
    let user = add_user(&state, name).await;
    (state, user)
}

/// One-hour event on a March 2024 day.
pub async fn add_event(state: &AppState, owner: &User, title: &str, day: u32, hour: u32) -> Event {
    let request = CreateEventRequest::new(title, datetime(day, hour, 0), datetime(day, hour + 1, 0));
    create_event(state, owner.id, request).await.unwrap()
}
