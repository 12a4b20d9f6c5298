//! # moderation-core
//!
//! Domain layer containing ban records, moderation commands, value objects, and
//! the store/clock traits. This crate has zero dependencies on infrastructure
//! (storage backends, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    BanRecord, BanStatus, CombinedStatus, ModerationCommand, TimedBanRecord, TimedBanStatus,
    DEFAULT_ADMIN, DEFAULT_REASON,
};
pub use error::DomainError;
pub use traits::{
    BanRepository, Clock, ManualClock, RepoResult, SharedClock, SystemClock, TimedBanRepository,
};
pub use value_objects::{BanDuration, UserId, DEFAULT_TIMED_BAN_SECS};
