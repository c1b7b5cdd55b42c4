use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use eventcal_core::calendar::{AddMemberRequest, CreateEventRequest, User};

use crate::handlers::{events::create_event, members::add_event_member, HandlerError};
use crate::state::AppState;

/// Timestamp `hour:min` on `date`.
fn at(date: NaiveDate, hour: i64, min: i64) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN) + Duration::minutes(hour * 60 + min)
}

/// Generates demo events spread around `today`.
pub fn generate_mock_events(today: NaiveDate) -> Vec<CreateEventRequest> {
    let day = |offset: i64| today + Duration::days(offset);

    vec![
        CreateEventRequest::new("Team Retreat", at(day(-1), 9, 0), at(day(1), 17, 0))
            .with_description("Annual team building event"),
        CreateEventRequest::new("Standup Meeting", at(today, 9, 0), at(today, 9, 30)),
        CreateEventRequest::new("Lunch with Alex", at(today, 12, 30), at(today, 13, 30))
            .with_description("Cafe Bistro"),
        CreateEventRequest::new("Product Review", at(day(1), 15, 0), at(day(1), 16, 0))
            .with_description("Q4 roadmap discussion"),
        CreateEventRequest::new("Sarah's Birthday", at(day(2), 19, 0), at(day(2), 23, 0))
            .with_description("Don't forget the cake!"),
        CreateEventRequest::new("Quarterly Planning", at(day(-12), 10, 0), at(day(-12), 12, 0)),
        CreateEventRequest::new("Dentist", at(day(9), 8, 30), at(day(9), 9, 15)),
    ]
}

/// Seeds `owner`'s calendar with demo events, guests and one invitation from
/// a guest. Returns the number of events created.
pub async fn seed_demo_data(
    state: &AppState,
    owner: &User,
    today: NaiveDate,
) -> Result<usize, HandlerError> {
    let mut count = 0;
    let mut owned = Vec::new();
    for request in generate_mock_events(today) {
        owned.push(create_event(state, owner.id, request).await?);
        count += 1;
    }

    let mut guests = Vec::new();
    for (name, email) in [
        ("Alex", "alex@example.com"),
        ("Sarah", "sarah@example.com"),
        ("Sam", "sam@example.com"),
    ] {
        guests.push(state.register_user(User::new(name, email)).await?);
    }

    // Everyone joins the retreat
    if let Some(retreat) = owned.first() {
        for guest in &guests {
            add_event_member(state, retreat.id, AddMemberRequest { user_id: guest.id }).await?;
        }
    }

    if let Some(host) = guests.first() {
        let club_day = today + Duration::days(3);
        let request = CreateEventRequest::new("Book Club", at(club_day, 18, 0), at(club_day, 20, 0))
            .with_description("Hosted by Alex");
        let book_club = create_event(state, host.id, request).await?;
        count += 1;
        add_event_member(state, book_club.id, AddMemberRequest { user_id: owner.id }).await?;
    }

    Ok(count)
}
