use thiserror::Error;

/// Errors that can occur when building a month layout or navigating months.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Invalid month: {0} (expected 1-12)")]
    InvalidMonth(u32),
    #[error("Year out of supported range: {0}")]
    YearOutOfRange(i32),
}

/// Errors that can occur when parsing a month navigation key.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MonthKeyError {
    #[error("Malformed month key: {0} (expected YYYY-M)")]
    Malformed(String),
    #[error(transparent)]
    Layout(#[from] LayoutError),
}

/// Errors that can occur when validating an event.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error("Event title cannot be empty")]
    EmptyTitle,
    #[error("Event title too long (max 200 characters)")]
    TitleTooLong,
    #[error("End time must be after or equal to start time")]
    EndBeforeStart,
}
