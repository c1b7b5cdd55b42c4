//! Handlers for the calendar, event, membership, search and import flows.
//!
//! Every handler takes the shared [`AppState`](crate::state::AppState) and,
//! where ownership matters, the id of the already authenticated user.

pub mod calendar;
pub mod error;
pub mod events;
pub mod import;
pub mod members;
pub mod search;

#[cfg(test)]
pub(crate) mod test_support;

pub use error::HandlerError;
