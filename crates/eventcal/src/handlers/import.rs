//! Bulk event import.

use serde::Serialize;
use uuid::Uuid;

use eventcal_core::calendar::{CreateEventRequest, Event, ImportRow};

use super::error::{HandlerError, Result};
use super::events::create_or_get;
use crate::state::AppState;

/// Outcome of an import run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportReport {
    /// Events created by this import.
    pub created: Vec<Event>,
    /// Rows that matched an event the user already had.
    pub existing: Vec<Event>,
}

impl ImportReport {
    pub fn total(&self) -> usize {
        self.created.len() + self.existing.len()
    }
}

/// Import rows as events owned by `user_id`.
///
/// Rows are processed in order. The first invalid row stops the import with
/// its zero-based index; rows before it stay imported.
pub async fn import_events(
    state: &AppState,
    user_id: Uuid,
    rows: Vec<ImportRow>,
) -> Result<ImportReport> {
    let mut report = ImportReport::default();

    for (row, data) in rows.into_iter().enumerate() {
        let request = CreateEventRequest::from(data);
        let (event, created) = create_or_get(state, user_id, request)
            .await
            .map_err(|source| HandlerError::ImportRow {
                row,
                source: Box::new(source),
            })?;

        if created {
            report.created.push(event);
        } else {
            report.existing.push(event);
        }
    }

    tracing::info!(
        %user_id,
        created = report.created.len(),
        existing = report.existing.len(),
        "Imported events"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{add_event, datetime, state_with_user};
    use eventcal_core::calendar::EventError;

    fn row(title: &str, day: u32) -> ImportRow {
        ImportRow {
            title: title.to_string(),
            description: None,
            start_time: datetime(day, 9, 0),
            end_time: datetime(day, 10, 0),
        }
    }

    #[tokio::test]
    async fn test_import_creates_events() {
        let (state, alice) = state_with_user("Alice").await;

        let report = import_events(&state, alice.id, vec![row("One", 1), row("Two", 2)])
            .await
            .unwrap();

        assert_eq!(report.created.len(), 2);
        assert!(report.existing.is_empty());
        assert_eq!(state.event_repo.list_events(alice.id).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_import_reuses_existing_events() {
        let (state, alice) = state_with_user("Alice").await;
        let existing = add_event(&state, &alice, "One", 1, 9).await;

        let report = import_events(&state, alice.id, vec![row("One", 1), row("One", 1)])
            .await
            .unwrap();

        assert!(report.created.is_empty());
        assert_eq!(report.existing, vec![existing.clone(), existing]);
        assert_eq!(report.total(), 2);
    }

    #[tokio::test]
    async fn test_import_parses_json_rows() {
        let (state, alice) = state_with_user("Alice").await;
        let rows: Vec<ImportRow> = serde_json::from_str(
            r#"[
                {"title": "Kickoff", "description": "Q2", "start_time": "2024-04-01 09:00:00", "end_time": "2024-04-01 10:00:00"},
                {"title": 2024, "description": null, "start_time": "2024-04-02T09:00", "end_time": "2024-04-02T09:30"}
            ]"#,
        )
        .unwrap();

        let report = import_events(&state, alice.id, rows).await.unwrap();

        assert_eq!(report.created[0].description, "Q2");
        assert_eq!(report.created[1].title, "2024");
        assert_eq!(report.created[1].description, "");
    }

    #[tokio::test]
    async fn test_import_stops_at_first_invalid_row() {
        let (state, alice) = state_with_user("Alice").await;
        let mut backwards = row("Backwards", 3);
        backwards.end_time = datetime(2, 9, 0);

        let result = import_events(
            &state,
            alice.id,
            vec![row("One", 1), backwards, row("Three", 4)],
        )
        .await;

        match result {
            Err(HandlerError::ImportRow { row, source }) => {
                assert_eq!(row, 1);
                assert!(matches!(
                    *source,
                    HandlerError::Event(EventError::EndBeforeStart)
                ));
            }
            other => panic!("expected import row error, got {other:?}"),
        }

        let titles: Vec<String> = state
            .event_repo
            .list_events(alice.id)
            .await
            .unwrap()
            .into_iter()
            .map(|e| e.title)
            .collect();
        assert_eq!(titles, vec!["One"]);
    }
}
