//! Ban status views returned by lookups

use chrono::TimeDelta;

use super::ban::{BanRecord, TimedBanRecord};

/// Result of a permanent-ban lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BanStatus {
    Banned(BanRecord),
    NotBanned,
}

/// Result of a timed-ban lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimedBanStatus {
    Active {
        record: TimedBanRecord,
        remaining: TimeDelta,
    },
    NotBanned,
}

/// Result of the combined lookup: permanent bans win over timed bans
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombinedStatus {
    Permanent(BanRecord),
    Timed {
        record: TimedBanRecord,
        remaining: TimeDelta,
    },
    NotBanned,
}

impl From<TimedBanStatus> for CombinedStatus {
    fn from(status: TimedBanStatus) -> Self {
        match status {
            TimedBanStatus::Active { record, remaining } => Self::Timed { record, remaining },
            TimedBanStatus::NotBanned => Self::NotBanned,
        }
    }
}
