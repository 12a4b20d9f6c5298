//! Domain entities - core business objects

mod ban;
mod command;
mod status;

pub use ban::{BanRecord, TimedBanRecord, DEFAULT_ADMIN, DEFAULT_REASON};
pub use command::ModerationCommand;
pub use status::{BanStatus, CombinedStatus, TimedBanStatus};
