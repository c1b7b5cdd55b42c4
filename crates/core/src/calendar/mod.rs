mod error;
mod layout;
mod navigation;
mod operations;
mod requests;
mod types;

pub use error::{EventError, LayoutError, MonthKeyError};
pub use layout::{
    build_month_layout, days_in_month, first_of_month, is_leap_year, DayCell,
    MonthCalendarBuilder, MonthLayout, Week,
};
pub use navigation::{next_month_token, previous_month_token, resolve_month, MonthKey};
pub use operations::{
    build_event_feed, check_member_capacity, event_status, filter_events_by_range,
    filter_events_by_status, filter_events_by_title, sort_events_by_start, validate_event,
    MAX_TITLE_LENGTH,
};
pub use requests::{
    AddMemberRequest, CreateEventRequest, ImportRow, SearchRangeRequest, SearchTitleRequest,
    UpdateEventRequest,
};
pub use types::{Event, EventFeedItem, EventMember, EventStatus, User, FEED_DATETIME_FORMAT};
