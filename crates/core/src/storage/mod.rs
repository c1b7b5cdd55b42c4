mod error;
mod traits;
mod types;

pub use error::{DateRangeError, RepositoryError, Result};
pub use traits::{EventRepository, MemberRepository, UserRepository};
pub use types::{DateTimeRange, DEFAULT_MEMBER_LIMIT};
