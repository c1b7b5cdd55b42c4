use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur when constructing a date range.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateRangeError {
    #[error("Invalid date range: start must be before or equal to end")]
    InvalidRange,
}

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },
    #[error("{entity_type} already exists: {id}")]
    AlreadyExists {
        entity_type: &'static str,
        id: String,
    },
    #[error("Event {event_id} already has the maximum of {limit} members")]
    MembershipLimitExceeded { event_id: Uuid, limit: usize },
}

impl RepositoryError {
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    pub fn already_exists(entity_type: &'static str, id: impl ToString) -> Self {
        Self::AlreadyExists {
            entity_type,
            id: id.to_string(),
        }
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_range_error_display() {
        assert_eq!(
            DateRangeError::InvalidRange.to_string(),
            "Invalid date range: start must be before or equal to end"
        );
    }

    #[test]
    fn test_repository_error_not_found_display() {
        let error = RepositoryError::not_found("Event", "abc-123");
        assert_eq!(error.to_string(), "Event not found: abc-123");
    }

    #[test]
    fn test_repository_error_already_exists_display() {
        let error = RepositoryError::already_exists("EventMember", "e:u");
        assert_eq!(error.to_string(), "EventMember already exists: e:u");
    }

    #[test]
    fn test_membership_limit_display() {
        let event_id = Uuid::nil();
        let error = RepositoryError::MembershipLimitExceeded { event_id, limit: 9 };
        assert_eq!(
            error.to_string(),
            "Event 00000000-0000-0000-0000-000000000000 already has the maximum of 9 members"
        );
    }
}
