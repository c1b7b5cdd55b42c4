//! Functional core for eventcal.
//!
//! Pure data types and functions: the month-grid layout engine, month
//! navigation, event validation and filtering, and the repository traits the
//! application shell implements. Nothing in this crate performs I/O.

pub mod calendar;
pub mod serde;
pub mod storage;
