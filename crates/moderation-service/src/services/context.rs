//! Service context - dependency container for services
//!
//! Holds the ban repositories and the clock used for expiry checks.

use std::sync::Arc;

use moderation_core::traits::{BanRepository, Clock, SystemClock, TimedBanRepository};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
///
/// Owned by the application state and shared with every request, so tests
/// can build a fresh one instead of relying on process-wide globals.
#[derive(Clone)]
pub struct ServiceContext {
    // Repositories
    ban_repo: Arc<dyn BanRepository>,
    timed_ban_repo: Arc<dyn TimedBanRepository>,

    // Time source
    clock: Arc<dyn Clock>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        ban_repo: Arc<dyn BanRepository>,
        timed_ban_repo: Arc<dyn TimedBanRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            ban_repo,
            timed_ban_repo,
            clock,
        }
    }

    // === Repositories ===

    /// Get the permanent ban repository
    pub fn ban_repo(&self) -> &dyn BanRepository {
        self.ban_repo.as_ref()
    }

    /// Get the timed ban repository
    pub fn timed_ban_repo(&self) -> &dyn TimedBanRepository {
        self.timed_ban_repo.as_ref()
    }

    // === Time ===

    /// Get the clock
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("ban_repo", &"BanRepository")
            .field("timed_ban_repo", &"TimedBanRepository")
            .field("clock", &"Clock")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    ban_repo: Option<Arc<dyn BanRepository>>,
    timed_ban_repo: Option<Arc<dyn TimedBanRepository>>,
    clock: Option<Arc<dyn Clock>>,
}

impl ServiceContextBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the permanent ban repository
    pub fn ban_repo(mut self, repo: Arc<dyn BanRepository>) -> Self {
        self.ban_repo = Some(repo);
        self
    }

    /// Set the timed ban repository
    pub fn timed_ban_repo(mut self, repo: Arc<dyn TimedBanRepository>) -> Self {
        self.timed_ban_repo = Some(repo);
        self
    }

    /// Set the clock (defaults to the system clock)
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if a repository is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.ban_repo
                .ok_or_else(|| ServiceError::validation("ban_repo is required"))?,
            self.timed_ban_repo
                .ok_or_else(|| ServiceError::validation("timed_ban_repo is required"))?,
            self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
        ))
    }
}
