//! Mappers from domain statuses to response DTOs

use chrono::{DateTime, TimeDelta, Utc};
use moderation_core::{BanRecord, BanStatus, CombinedStatus, TimedBanRecord, TimedBanStatus};

use super::responses::{BanEntry, BanStatusResponse, TimedBanEntry};

/// Unix epoch seconds with microsecond precision
pub fn epoch_secs(instant: DateTime<Utc>) -> f64 {
    instant.timestamp_micros() as f64 / 1_000_000.0
}

/// Fractional seconds of a time delta
pub fn delta_secs(delta: TimeDelta) -> f64 {
    delta
        .num_microseconds()
        .map_or_else(|| delta.num_milliseconds() as f64 / 1_000.0, |us| us as f64 / 1_000_000.0)
}

impl BanStatusResponse {
    /// Permanent ban view: carries `timestamp`, never `remaining`
    pub fn permanent(ban: &BanRecord) -> Self {
        Self {
            banned: true,
            reason: Some(ban.reason.clone()),
            admin: Some(ban.admin.clone()),
            timestamp: Some(epoch_secs(ban.created_at)),
            remaining: None,
        }
    }

    /// Timed ban view: carries `remaining`, never `timestamp`
    pub fn timed(ban: &TimedBanRecord, remaining: TimeDelta) -> Self {
        Self {
            banned: true,
            reason: Some(ban.reason.clone()),
            admin: Some(ban.admin.clone()),
            timestamp: None,
            remaining: Some(delta_secs(remaining)),
        }
    }
}

impl From<BanStatus> for BanStatusResponse {
    fn from(status: BanStatus) -> Self {
        match status {
            BanStatus::Banned(ban) => Self::permanent(&ban),
            BanStatus::NotBanned => Self::not_banned(),
        }
    }
}

impl From<TimedBanStatus> for BanStatusResponse {
    fn from(status: TimedBanStatus) -> Self {
        match status {
            TimedBanStatus::Active { record, remaining } => Self::timed(&record, remaining),
            TimedBanStatus::NotBanned => Self::not_banned(),
        }
    }
}

impl From<CombinedStatus> for BanStatusResponse {
    fn from(status: CombinedStatus) -> Self {
        match status {
            CombinedStatus::Permanent(ban) => Self::permanent(&ban),
            CombinedStatus::Timed { record, remaining } => Self::timed(&record, remaining),
            CombinedStatus::NotBanned => Self::not_banned(),
        }
    }
}

impl From<BanRecord> for BanEntry {
    fn from(ban: BanRecord) -> Self {
        Self {
            timestamp: epoch_secs(ban.created_at),
            reason: ban.reason,
            admin: ban.admin,
        }
    }
}

impl TimedBanEntry {
    pub fn from_record(ban: TimedBanRecord, now: DateTime<Utc>) -> Self {
        Self {
            remaining: delta_secs(ban.remaining_at(now)),
            reason: ban.reason,
            admin: ban.admin,
        }
    }
}
