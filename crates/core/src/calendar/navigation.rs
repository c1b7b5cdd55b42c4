//! Month navigation keys.
//!
//! A [`MonthKey`] identifies a month and doubles as the opaque token used to
//! page the calendar backward and forward (`month=2024-3`).

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::{LayoutError, MonthKeyError};
use super::layout::{days_in_month, first_of_month};

/// A (year, month) pair, always backed by a valid first day of month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct MonthKey(NaiveDate);

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Result<Self, LayoutError> {
        first_of_month(year, month).map(Self)
    }

    /// The month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self(date.with_day(1).unwrap_or(date))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.0
    }

    pub fn last_day(&self) -> NaiveDate {
        let length = days_in_month(self.year(), self.month()).unwrap_or(28);
        self.0 + Days::new(u64::from(length) - 1)
    }

    /// The month before this one: first day minus one day.
    pub fn previous(&self) -> Result<Self, LayoutError> {
        self.0
            .pred_opt()
            .map(Self::of)
            .ok_or(LayoutError::YearOutOfRange(self.year()))
    }

    /// The month after this one: last day plus one day.
    pub fn next(&self) -> Result<Self, LayoutError> {
        self.last_day()
            .succ_opt()
            .map(Self::of)
            .ok_or(LayoutError::YearOutOfRange(self.year()))
    }

    /// Query-string form used by calendar navigation links.
    pub fn to_query(&self) -> String {
        format!("month={self}")
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.year(), self.month())
    }
}

impl FromStr for MonthKey {
    type Err = MonthKeyError;

    /// Parses `YYYY-M` or `YYYY-MM`. Negative years are accepted (`-44-3`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || MonthKeyError::Malformed(s.to_string());
        let (year, month) = s.trim().rsplit_once('-').ok_or_else(malformed)?;
        let year: i32 = year.parse().map_err(|_| malformed())?;
        let month: u32 = month.parse().map_err(|_| malformed())?;
        Ok(Self::new(year, month)?)
    }
}

impl From<MonthKey> for String {
    fn from(key: MonthKey) -> Self {
        key.to_string()
    }
}

impl TryFrom<String> for MonthKey {
    type Error = MonthKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Key of the month preceding the one that contains `date`.
pub fn previous_month_token(date: NaiveDate) -> Result<MonthKey, LayoutError> {
    MonthKey::of(date).previous()
}

/// Key of the month following the one that contains `date`.
pub fn next_month_token(date: NaiveDate) -> Result<MonthKey, LayoutError> {
    MonthKey::of(date).next()
}

/// Resolves an optional `YYYY-M` parameter to a date.
///
/// Without a parameter the calendar shows `today`; otherwise the first day of
/// the requested month.
pub fn resolve_month(param: Option<&str>, today: NaiveDate) -> Result<NaiveDate, MonthKeyError> {
    match param.map(str::trim).filter(|p| !p.is_empty()) {
        None => Ok(today),
        Some(param) => Ok(param.parse::<MonthKey>()?.first_day()),
    }
}
