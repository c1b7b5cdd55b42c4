//! Month-grid layout with event overlay.
//!
//! A [`MonthLayout`] covers a month with complete weeks: the first and last
//! weeks are padded with days from the adjacent months, the way wall
//! calendars and `HTMLCalendar`-style tables are drawn. Every day cell carries
//! the events that start on it.

use std::collections::HashMap;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::error::LayoutError;
use super::operations::sort_events_by_start;
use super::types::Event;

/// Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in the given month.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, LayoutError> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
        4 | 6 | 9 | 11 => Ok(30),
        2 if is_leap_year(year) => Ok(29),
        2 => Ok(28),
        _ => Err(LayoutError::InvalidMonth(month)),
    }
}

/// First day of the given month.
pub fn first_of_month(year: i32, month: u32) -> Result<NaiveDate, LayoutError> {
    if !(1..=12).contains(&month) {
        return Err(LayoutError::InvalidMonth(month));
    }
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(LayoutError::YearOutOfRange(year))
}

/// A single day in the month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    pub date: NaiveDate,
    /// False for padding days borrowed from the previous or next month.
    pub in_month: bool,
    /// Events starting on this date, ordered by start time.
    pub events: Vec<Event>,
}

impl DayCell {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Seven consecutive day cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    pub days: Vec<DayCell>,
}

/// A month rendered as complete weeks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthLayout {
    pub year: i32,
    pub month: u32,
    pub first_weekday: Weekday,
    pub weeks: Vec<Week>,
}

impl MonthLayout {
    /// Iterates over every cell in display order.
    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flat_map(|week| week.days.iter())
    }

    /// Returns the cell for `date`, if the grid covers it.
    pub fn day(&self, date: NaiveDate) -> Option<&DayCell> {
        self.days().find(|cell| cell.date == date)
    }

    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    /// Total number of events placed on the grid.
    pub fn event_count(&self) -> usize {
        self.days().map(|cell| cell.events.len()).sum()
    }

    /// Weekday headers in display order.
    pub fn weekday_headers(&self) -> [Weekday; 7] {
        let mut weekday = self.first_weekday;
        std::array::from_fn(|_| {
            let current = weekday;
            weekday = weekday.succ();
            current
        })
    }
}

/// Builds [`MonthLayout`]s for a configurable first day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCalendarBuilder {
    first_weekday: Weekday,
}

impl Default for MonthCalendarBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MonthCalendarBuilder {
    /// Creates a builder whose weeks start on Monday.
    pub fn new() -> Self {
        Self {
            first_weekday: Weekday::Mon,
        }
    }

    /// Sets the weekday that opens each row.
    pub fn first_weekday(mut self, weekday: Weekday) -> Self {
        self.first_weekday = weekday;
        self
    }

    /// First and last dates shown when laying out `year`/`month`.
    pub fn grid_bounds(
        &self,
        year: i32,
        month: u32,
    ) -> Result<(NaiveDate, NaiveDate), LayoutError> {
        let first = first_of_month(year, month)?;
        let length = days_in_month(year, month)?;
        let last = first + Days::new(u64::from(length) - 1);

        let leading = days_between(self.first_weekday, first.weekday());
        let trailing = days_between(last.weekday(), self.first_weekday.pred());

        let grid_start = first
            .checked_sub_days(Days::new(leading))
            .ok_or(LayoutError::YearOutOfRange(year))?;
        let grid_end = last
            .checked_add_days(Days::new(trailing))
            .ok_or(LayoutError::YearOutOfRange(year))?;
        Ok((grid_start, grid_end))
    }

    /// Lays out `year`/`month` and places each event on its start date.
    ///
    /// Events whose start date falls outside the grid are ignored. Events on
    /// padding days are attached to those cells as well.
    pub fn build(
        &self,
        year: i32,
        month: u32,
        events: &[Event],
    ) -> Result<MonthLayout, LayoutError> {
        let (grid_start, grid_end) = self.grid_bounds(year, month)?;

        let mut ordered: Vec<&Event> = events.iter().collect();
        sort_events_by_start(&mut ordered);
        let mut by_date: HashMap<NaiveDate, Vec<Event>> = HashMap::new();
        for event in ordered {
            by_date
                .entry(event.start_date())
                .or_default()
                .push(event.clone());
        }

        let mut weeks = Vec::with_capacity(6);
        let mut days = Vec::with_capacity(7);
        for date in grid_start.iter_days().take_while(|date| *date <= grid_end) {
            days.push(DayCell {
                date,
                in_month: date.month() == month && date.year() == year,
                events: by_date.remove(&date).unwrap_or_default(),
            });
            if days.len() == 7 {
                weeks.push(Week {
                    days: std::mem::replace(&mut days, Vec::with_capacity(7)),
                });
            }
        }

        Ok(MonthLayout {
            year,
            month,
            first_weekday: self.first_weekday,
            weeks,
        })
    }
}

/// Builds a Monday-first layout.
pub fn build_month_layout(
    year: i32,
    month: u32,
    events: &[Event],
) -> Result<MonthLayout, LayoutError> {
    MonthCalendarBuilder::new().build(year, month, events)
}

/// Days to walk forward from `from` to reach `to`, in `0..7`.
fn days_between(from: Weekday, to: Weekday) -> u64 {
    ((to.num_days_from_monday() + 7 - from.num_days_from_monday()) % 7) as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;
    use uuid::Uuid;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn datetime(year: i32, month: u32, day: u32, hour: u32, min: u32) -> NaiveDateTime {
        date(year, month, day).and_hms_opt(hour, min, 0).unwrap()
    }

    fn event(title: &str, start: NaiveDateTime, end: NaiveDateTime) -> Event {
        Event::new(Uuid::new_v4(), title, start, end)
    }

    #[test]
    fn test_leap_years() {
        assert_eq!(days_in_month(2000, 2), Ok(29));
        assert_eq!(days_in_month(1900, 2), Ok(28));
        assert_eq!(days_in_month(2024, 2), Ok(29));
        assert_eq!(days_in_month(2023, 2), Ok(28));
        assert!(is_leap_year(-4));
        assert!(!is_leap_year(2100));
    }

    #[test]
    fn test_days_in_month_rejects_invalid_month() {
        assert_eq!(days_in_month(2024, 0), Err(LayoutError::InvalidMonth(0)));
        assert_eq!(days_in_month(2024, 13), Err(LayoutError::InvalidMonth(13)));
    }

    #[test]
    fn test_build_rejects_invalid_month() {
        assert_eq!(
            build_month_layout(2024, 0, &[]),
            Err(LayoutError::InvalidMonth(0))
        );
        assert_eq!(
            build_month_layout(2024, 13, &[]),
            Err(LayoutError::InvalidMonth(13))
        );
    }

    #[test]
    fn test_build_rejects_unrepresentable_year() {
        assert_eq!(
            build_month_layout(i32::MAX, 1, &[]),
            Err(LayoutError::YearOutOfRange(i32::MAX))
        );
    }

    #[test]
    fn test_march_2024_monday_first() {
        let layout = build_month_layout(2024, 3, &[]).unwrap();

        assert_eq!(layout.week_count(), 5);
        let first_week: Vec<NaiveDate> = layout.weeks[0].days.iter().map(|d| d.date).collect();
        assert_eq!(
            first_week,
            vec![
                date(2024, 2, 26),
                date(2024, 2, 27),
                date(2024, 2, 28),
                date(2024, 2, 29),
                date(2024, 3, 1),
                date(2024, 3, 2),
                date(2024, 3, 3),
            ]
        );
        assert!(!layout.weeks[0].days[3].in_month);
        assert!(layout.weeks[0].days[4].in_month);
        assert_eq!(layout.weeks[4].days[6].date, date(2024, 3, 31));
    }

    #[test]
    fn test_march_2024_sunday_first() {
        let layout = MonthCalendarBuilder::new()
            .first_weekday(Weekday::Sun)
            .build(2024, 3, &[])
            .unwrap();

        assert_eq!(layout.week_count(), 6);
        assert_eq!(layout.weeks[0].days[0].date, date(2024, 2, 25));
        assert_eq!(layout.weeks[0].days[6].date, date(2024, 3, 2));
        assert_eq!(layout.weeks[5].days[0].date, date(2024, 3, 31));
        assert_eq!(layout.weeks[5].days[6].date, date(2024, 4, 6));
        assert_eq!(layout.weekday_headers()[0], Weekday::Sun);
        assert_eq!(layout.weekday_headers()[6], Weekday::Sat);
    }

    #[test]
    fn test_grid_bounds_match_layout() {
        let builder = MonthCalendarBuilder::new();
        let (start, end) = builder.grid_bounds(2024, 3).unwrap();
        let layout = builder.build(2024, 3, &[]).unwrap();

        assert_eq!(start, date(2024, 2, 26));
        assert_eq!(end, date(2024, 3, 31));
        assert_eq!(layout.days().next().unwrap().date, start);
        assert_eq!(layout.days().last().unwrap().date, end);
    }

    #[test]
    fn test_four_week_month() {
        // February 2021 starts on a Monday and has 28 days.
        let layout = build_month_layout(2021, 2, &[]).unwrap();

        assert_eq!(layout.week_count(), 4);
        assert!(layout.days().all(|cell| cell.in_month));
    }

    #[test]
    fn test_grid_shape_for_two_centuries() {
        for first_weekday in [Weekday::Mon, Weekday::Sun, Weekday::Wed] {
            let builder = MonthCalendarBuilder::new().first_weekday(first_weekday);
            for year in 1900..=2100 {
                for month in 1..=12 {
                    let layout = builder.build(year, month, &[]).unwrap();

                    assert!((4..=6).contains(&layout.week_count()));
                    assert!(layout.weeks.iter().all(|week| week.days.len() == 7));
                    assert!(layout
                        .weeks
                        .iter()
                        .all(|week| week.days[0].date.weekday() == first_weekday));

                    let dates: Vec<NaiveDate> = layout.days().map(|cell| cell.date).collect();
                    assert!(dates.windows(2).all(|pair| pair[0].succ_opt() == Some(pair[1])));

                    let in_month = layout.days().filter(|cell| cell.in_month).count() as u32;
                    assert_eq!(in_month, days_in_month(year, month).unwrap());
                }
            }
        }
    }

    #[test]
    fn test_event_placed_on_start_date_only() {
        let conference = event(
            "Conference",
            datetime(2024, 3, 15, 10, 0),
            datetime(2024, 3, 18, 17, 0),
        );

        let layout = build_month_layout(2024, 3, &[conference.clone()]).unwrap();

        assert_eq!(layout.event_count(), 1);
        let cell = layout.day(date(2024, 3, 15)).unwrap();
        assert_eq!(cell.events, vec![conference]);
        assert!(layout.day(date(2024, 3, 16)).unwrap().is_empty());
    }

    #[test]
    fn test_events_sorted_by_start_time_within_day() {
        let late = event("Late", datetime(2024, 3, 5, 18, 0), datetime(2024, 3, 5, 19, 0));
        let early = event("Early", datetime(2024, 3, 5, 8, 0), datetime(2024, 3, 5, 9, 0));
        let tie_a = event("Tie A", datetime(2024, 3, 5, 12, 0), datetime(2024, 3, 5, 13, 0));
        let tie_b = event("Tie B", datetime(2024, 3, 5, 12, 0), datetime(2024, 3, 5, 12, 30));

        let layout = build_month_layout(2024, 3, &[late, tie_a, early, tie_b]).unwrap();

        let titles: Vec<&str> = layout
            .day(date(2024, 3, 5))
            .unwrap()
            .events
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Early", "Tie A", "Tie B", "Late"]);
    }

    #[test]
    fn test_events_on_padding_days_and_outside_grid() {
        let padding = event("Leap day", datetime(2024, 2, 29, 9, 0), datetime(2024, 2, 29, 10, 0));
        let outside = event("Far away", datetime(2024, 6, 1, 9, 0), datetime(2024, 6, 1, 10, 0));

        let layout = build_month_layout(2024, 3, &[padding, outside]).unwrap();

        assert_eq!(layout.event_count(), 1);
        let cell = layout.day(date(2024, 2, 29)).unwrap();
        assert!(!cell.in_month);
        assert_eq!(cell.events[0].title, "Leap day");
    }
}
