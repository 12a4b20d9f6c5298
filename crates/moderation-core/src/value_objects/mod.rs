//! Value objects - immutable types that represent domain concepts

mod duration;
mod user_id;

pub use duration::{BanDuration, DEFAULT_TIMED_BAN_SECS};
pub use user_id::UserId;
