//! Ban entities - permanent and timed bans

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::UserId;

/// Reason recorded when the moderator gives none
pub const DEFAULT_REASON: &str = "No reason provided.";

/// Moderator name recorded when none is given
pub const DEFAULT_ADMIN: &str = "Unknown";

/// Permanent ban, removed only by an explicit unban
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BanRecord {
    pub user_id: UserId,
    pub reason: String,
    pub admin: String,
    pub created_at: DateTime<Utc>,
}

impl BanRecord {
    /// Create a new ban, falling back to the default reason and admin
    pub fn new(
        user_id: UserId,
        reason: Option<String>,
        admin: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            reason: reason.unwrap_or_else(|| DEFAULT_REASON.to_string()),
            admin: admin.unwrap_or_else(|| DEFAULT_ADMIN.to_string()),
            created_at,
        }
    }
}

/// Timed ban, inactive once the clock reaches `expire_at`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimedBanRecord {
    pub user_id: UserId,
    pub reason: String,
    pub admin: String,
    pub expire_at: DateTime<Utc>,
}

impl TimedBanRecord {
    /// Create a new timed ban, falling back to the default reason and admin
    pub fn new(
        user_id: UserId,
        reason: Option<String>,
        admin: Option<String>,
        expire_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            reason: reason.unwrap_or_else(|| DEFAULT_REASON.to_string()),
            admin: admin.unwrap_or_else(|| DEFAULT_ADMIN.to_string()),
            expire_at,
        }
    }

    /// A ban is expired from the instant `now` reaches `expire_at`
    #[inline]
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expire_at
    }

    /// Time left until expiry (negative once expired)
    #[inline]
    pub fn remaining_at(&self, now: DateTime<Utc>) -> TimeDelta {
        self.expire_at - now
    }
}
