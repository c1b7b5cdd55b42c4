//! eventcal - Plan events, invite members and browse them on a month calendar.

pub mod cli;
pub mod config;
pub mod handlers;
pub mod mock_data;
pub mod output;
pub mod state;
pub mod storage;

pub use handlers::HandlerError;
pub use state::AppState;
