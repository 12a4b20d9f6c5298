//! In-memory implementation of TimedBanRepository

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use tracing::{debug, instrument};

use moderation_core::traits::{RepoResult, TimedBanRepository};
use moderation_core::{TimedBanRecord, UserId};

/// Timed bans keyed by user id
///
/// Expired records stay in the map until a point lookup removes them via
/// [`TimedBanRepository::remove_if_expired`]; listing only filters them out.
#[derive(Debug, Default)]
pub struct InMemoryTimedBanRepository {
    bans: RwLock<HashMap<UserId, TimedBanRecord>>,
}

impl InMemoryTimedBanRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records, including expired ones not yet collected
    pub fn len(&self) -> usize {
        self.bans.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bans.read().is_empty()
    }
}

#[async_trait]
impl TimedBanRepository for InMemoryTimedBanRepository {
    #[instrument(skip(self))]
    async fn find(&self, user_id: &UserId) -> RepoResult<Option<TimedBanRecord>> {
        Ok(self.bans.read().get(user_id).cloned())
    }

    #[instrument(skip(self, ban), fields(user_id = %ban.user_id))]
    async fn upsert(&self, ban: TimedBanRecord) -> RepoResult<()> {
        self.bans.write().insert(ban.user_id.clone(), ban);
        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove_if_expired(&self, user_id: &UserId, now: DateTime<Utc>) -> RepoResult<bool> {
        let mut bans = self.bans.write();
        let expired = bans.get(user_id).is_some_and(|ban| ban.is_expired_at(now));
        if expired {
            bans.remove(user_id);
            debug!(user_id = %user_id, "Expired timed ban collected");
        }
        Ok(expired)
    }

    #[instrument(skip(self))]
    async fn list_active(&self, now: DateTime<Utc>) -> RepoResult<Vec<TimedBanRecord>> {
        let mut bans: Vec<TimedBanRecord> = self
            .bans
            .read()
            .values()
            .filter(|ban| !ban.is_expired_at(now))
            .cloned()
            .collect();
        bans.sort_by(|a, b| a.expire_at.cmp(&b.expire_at));
        Ok(bans)
    }
}
