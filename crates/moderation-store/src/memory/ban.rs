//! In-memory implementation of BanRepository

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::instrument;

use moderation_core::traits::{BanRepository, RepoResult};
use moderation_core::{BanRecord, UserId};

/// Permanent bans keyed by user id
#[derive(Debug, Default)]
pub struct InMemoryBanRepository {
    bans: RwLock<HashMap<UserId, BanRecord>>,
}

impl InMemoryBanRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored bans
    pub fn len(&self) -> usize {
        self.bans.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bans.read().is_empty()
    }
}

#[async_trait]
impl BanRepository for InMemoryBanRepository {
    #[instrument(skip(self))]
    async fn find(&self, user_id: &UserId) -> RepoResult<Option<BanRecord>> {
        Ok(self.bans.read().get(user_id).cloned())
    }

    #[instrument(skip(self, ban), fields(user_id = %ban.user_id))]
    async fn upsert(&self, ban: BanRecord) -> RepoResult<()> {
        self.bans.write().insert(ban.user_id.clone(), ban);
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, user_id: &UserId) -> RepoResult<Option<BanRecord>> {
        Ok(self.bans.write().remove(user_id))
    }

    #[instrument(skip(self))]
    async fn list(&self) -> RepoResult<Vec<BanRecord>> {
        let mut bans: Vec<BanRecord> = self.bans.read().values().cloned().collect();
        bans.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(bans)
    }
}
