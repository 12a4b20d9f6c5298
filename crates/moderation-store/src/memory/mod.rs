//! In-memory repository implementations

mod ban;
mod timed_ban;

pub use ban::InMemoryBanRepository;
pub use timed_ban::InMemoryTimedBanRepository;
