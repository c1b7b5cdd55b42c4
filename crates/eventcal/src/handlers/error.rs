use thiserror::Error;
use uuid::Uuid;

use eventcal_core::calendar::{EventError, LayoutError, MonthKeyError};
use eventcal_core::storage::{DateRangeError, RepositoryError};

/// Errors returned by handlers.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Event(#[from] EventError),
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error(transparent)]
    MonthKey(#[from] MonthKeyError),
    #[error(transparent)]
    DateRange(#[from] DateRangeError),
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: &'static str, id: Uuid },
    #[error("Only the owner may change event {id}")]
    Forbidden { id: Uuid },
    #[error("Import row {row} rejected: {source}")]
    ImportRow {
        row: usize,
        source: Box<HandlerError>,
    },
}

impl HandlerError {
    pub fn not_found(entity_type: &'static str, id: Uuid) -> Self {
        Self::NotFound { entity_type, id }
    }

    /// True when the error comes from the event membership cap.
    pub fn is_membership_limit(&self) -> bool {
        matches!(
            self,
            Self::Repository(RepositoryError::MembershipLimitExceeded { .. })
        )
    }
}

pub type Result<T> = std::result::Result<T, HandlerError>;
