//! Traits (ports) - interfaces the domain needs from the outside world

mod clock;
mod repositories;

pub use clock::{Clock, ManualClock, SharedClock, SystemClock};
pub use repositories::{BanRepository, RepoResult, TimedBanRepository};
