//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! handlers. It uses repository trait objects for storage abstraction so the
//! handlers never see the concrete backend.

use std::sync::Arc;

use eventcal_core::calendar::{MonthCalendarBuilder, User};
use eventcal_core::storage::{EventRepository, MemberRepository, UserRepository};

use crate::config::Config;
use crate::storage::InMemoryRepository;

/// Shared application state.
///
/// Cheap to clone: every repository is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Event repository.
    pub event_repo: Arc<dyn EventRepository>,
    /// Event membership repository.
    pub member_repo: Arc<dyn MemberRepository>,
    /// User repository.
    pub user_repo: Arc<dyn UserRepository>,
    /// Month grid builder used by calendar views.
    pub calendar: MonthCalendarBuilder,
}

impl AppState {
    /// Creates an AppState backed by a single in-memory repository.
    pub fn new(config: &Config) -> Self {
        let repo = Arc::new(InMemoryRepository::new().with_member_limit(config.member_limit));
        Self::build(repo.clone(), repo.clone(), repo, config.calendar_builder())
    }

    /// Creates an AppState from explicit repositories.
    pub fn build(
        event_repo: Arc<dyn EventRepository>,
        member_repo: Arc<dyn MemberRepository>,
        user_repo: Arc<dyn UserRepository>,
        calendar: MonthCalendarBuilder,
    ) -> Self {
        Self {
            event_repo,
            member_repo,
            user_repo,
            calendar,
        }
    }

    /// Registers the user the CLI acts on behalf of.
    pub async fn register_user(&self, user: User) -> eventcal_core::storage::Result<User> {
        self.user_repo.create_user(&user).await?;
        tracing::debug!(user_id = %user.id, name = %user.name, "Registered user");
        Ok(user)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    #[tokio::test]
    async fn test_new_uses_config() {
        let config = Config {
            member_limit: 2,
            first_weekday: Weekday::Sun,
        };
        let state = AppState::new(&config);

        assert_eq!(
            state.calendar,
            MonthCalendarBuilder::new().first_weekday(Weekday::Sun)
        );

        let owner = state
            .register_user(User::new("Owner", "owner@example.com"))
            .await
            .unwrap();
        let start = chrono::NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let (event, _) = state
            .event_repo
            .create_or_get_event(owner.id, "Lunch", "", start, start)
            .await
            .unwrap();

        for i in 0..2 {
            let guest = state
                .register_user(User::new(format!("Guest {i}"), format!("g{i}@example.com")))
                .await
                .unwrap();
            state.member_repo.add_member(event.id, guest.id).await.unwrap();
        }
        let late = state
            .register_user(User::new("Late", "late@example.com"))
            .await
            .unwrap();
        assert!(state.member_repo.add_member(event.id, late.id).await.is_err());
    }

    #[tokio::test]
    async fn test_repositories_share_storage() {
        let state = AppState::default();
        let user = state
            .register_user(User::new("Alice", "alice@example.com"))
            .await
            .unwrap();

        assert_eq!(state.user_repo.get_user(user.id).await.unwrap(), Some(user));
    }
}
