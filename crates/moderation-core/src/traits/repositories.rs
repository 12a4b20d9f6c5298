//! Repository traits (ports) - define the interface for ban storage
//!
//! The two ban namespaces are independent stores. The in-memory
//! implementations live in `moderation-store`; a persistent backend only has
//! to implement these traits.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::entities::{BanRecord, TimedBanRecord};
use crate::error::DomainError;
use crate::value_objects::UserId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Permanent Ban Repository
// ============================================================================

#[async_trait]
pub trait BanRepository: Send + Sync {
    /// Get the ban record for a user
    async fn find(&self, user_id: &UserId) -> RepoResult<Option<BanRecord>>;

    /// Insert a ban, replacing any existing record for the same user
    async fn upsert(&self, ban: BanRecord) -> RepoResult<()>;

    /// Remove a ban, returning the removed record if there was one
    async fn delete(&self, user_id: &UserId) -> RepoResult<Option<BanRecord>>;

    /// List every ban
    async fn list(&self) -> RepoResult<Vec<BanRecord>>;
}

// ============================================================================
// Timed Ban Repository
// ============================================================================

#[async_trait]
pub trait TimedBanRepository: Send + Sync {
    /// Get the timed ban record for a user, expired or not
    async fn find(&self, user_id: &UserId) -> RepoResult<Option<TimedBanRecord>>;

    /// Insert a timed ban, replacing any existing record for the same user
    async fn upsert(&self, ban: TimedBanRecord) -> RepoResult<()>;

    /// Remove the user's timed ban only if it is expired at `now`
    ///
    /// Returns `true` when a record was removed. A record that was replaced
    /// by a fresh, still active ban in the meantime is left alone.
    async fn remove_if_expired(&self, user_id: &UserId, now: DateTime<Utc>) -> RepoResult<bool>;

    /// List timed bans still active at `now` without removing expired ones
    async fn list_active(&self, now: DateTime<Utc>) -> RepoResult<Vec<TimedBanRecord>>;
}
