//! Moderation service
//!
//! Bans, timed bans, kick notifications, and the lookups game servers use to
//! decide whether a player may join.
//!
//! Timed bans expire lazily: a point lookup that finds an expired record
//! deletes it, while [`ModerationService::list_actions`] only hides expired
//! records and leaves them stored.

use moderation_core::{
    BanDuration, BanRecord, BanStatus, CombinedStatus, DomainError, ModerationCommand,
    TimedBanRecord, TimedBanStatus, UserId, DEFAULT_ADMIN, DEFAULT_REASON,
};
use tracing::{debug, info, instrument};

use crate::dto::mappers::epoch_secs;
use crate::dto::{
    ActionsResponse, BanEntry, BanRequest, BanStatusResponse, CommandResponse, KickRequest,
    ModerateRequest, TimedBanEntry, TimedBanRequest, UnbanRequest, UserIdQuery,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Moderation service
pub struct ModerationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ModerationService<'a> {
    /// Create a new ModerationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    // =========================================================================
    // Request-level operations
    // =========================================================================

    /// Permanently ban a user
    #[instrument(skip(self, request))]
    pub async fn ban(&self, request: BanRequest) -> ServiceResult<CommandResponse> {
        let user_id = request.user_id()?;
        self.ban_user(user_id, request.reason, request.admin).await
    }

    /// Echo a kick notification; nothing is stored
    #[instrument(skip(self, request))]
    pub async fn kick(&self, request: KickRequest) -> ServiceResult<CommandResponse> {
        let user_id = request.user_id()?;
        Ok(self.kick_user(user_id, request.reason, request.admin))
    }

    /// Lift a permanent ban
    ///
    /// A missing user id can never be banned, so it is reported as not banned.
    #[instrument(skip(self, request))]
    pub async fn unban(&self, request: UnbanRequest) -> ServiceResult<CommandResponse> {
        let raw = request.user_id.unwrap_or_default();
        let user_id = UserId::parse(&raw).map_err(|_| DomainError::UserNotBanned(raw))?;
        self.unban_user(user_id).await
    }

    /// Ban a user for `duration` seconds (default 60)
    #[instrument(skip(self, request))]
    pub async fn timed_ban(&self, request: TimedBanRequest) -> ServiceResult<CommandResponse> {
        let user_id = request.user_id()?;
        self.timed_ban_user(
            user_id,
            request.duration.unwrap_or_default(),
            request.reason,
            request.admin,
        )
        .await
    }

    /// Permanent ban lookup; timed bans are not consulted
    #[instrument(skip(self))]
    pub async fn check_ban(&self, query: &UserIdQuery) -> ServiceResult<BanStatusResponse> {
        match query.user_id() {
            Some(user_id) => Ok(self.ban_status(&user_id).await?.into()),
            None => Ok(BanStatusResponse::not_banned()),
        }
    }

    /// Timed ban lookup with lazy expiry
    #[instrument(skip(self))]
    pub async fn check_timed_ban(&self, query: &UserIdQuery) -> ServiceResult<BanStatusResponse> {
        match query.user_id() {
            Some(user_id) => Ok(self.timed_ban_status(&user_id).await?.into()),
            None => Ok(BanStatusResponse::not_banned()),
        }
    }

    /// Combined lookup used by game servers
    #[instrument(skip(self))]
    pub async fn is_banned(&self, raw_user_id: &str) -> ServiceResult<BanStatusResponse> {
        match UserId::parse(raw_user_id) {
            Ok(user_id) => Ok(self.combined_status(&user_id).await?.into()),
            Err(_) => Ok(BanStatusResponse::not_banned()),
        }
    }

    /// Dispatch a moderation command by name (case-insensitive)
    #[instrument(
        skip(self, request),
        fields(command = request.command.as_deref().unwrap_or_default())
    )]
    pub async fn moderate(&self, request: ModerateRequest) -> ServiceResult<CommandResponse> {
        let command = request.command.as_deref().unwrap_or_default();
        let raw_user_id = request.user_id.as_deref().unwrap_or_default();
        if command.is_empty() || raw_user_id.is_empty() {
            return Err(DomainError::MissingCommandFields.into());
        }

        let command: ModerationCommand = command.parse()?;
        let user_id = UserId::parse(raw_user_id)?;

        match command {
            ModerationCommand::Ban => self.ban_user(user_id, request.reason, request.admin).await,
            ModerationCommand::Kick => Ok(self.kick_user(user_id, request.reason, request.admin)),
            ModerationCommand::Unban => self.unban_user(user_id).await,
            ModerationCommand::TimedBan => {
                let duration = request.timed_ban_duration()?;
                self.timed_ban_user(user_id, duration, request.reason, request.admin)
                    .await
            }
        }
    }

    /// Every permanent ban and every timed ban still active right now
    ///
    /// Read-only: expired timed bans are filtered out but not collected.
    #[instrument(skip(self))]
    pub async fn list_actions(&self) -> ServiceResult<ActionsResponse> {
        let now = self.ctx.clock().now();

        let bans = self
            .ctx
            .ban_repo()
            .list()
            .await?
            .into_iter()
            .map(|ban| (ban.user_id.to_string(), BanEntry::from(ban)))
            .collect();

        let timed_bans = self
            .ctx
            .timed_ban_repo()
            .list_active(now)
            .await?
            .into_iter()
            .map(|ban| (ban.user_id.to_string(), TimedBanEntry::from_record(ban, now)))
            .collect();

        Ok(ActionsResponse { bans, timed_bans })
    }

    // =========================================================================
    // Domain-level operations
    // =========================================================================

    /// Insert or overwrite the user's permanent ban
    pub async fn ban_user(
        &self,
        user_id: UserId,
        reason: Option<String>,
        admin: Option<String>,
    ) -> ServiceResult<CommandResponse> {
        let ban = BanRecord::new(user_id.clone(), reason, admin, self.ctx.clock().now());
        info!(
            user_id = %ban.user_id,
            admin = %ban.admin,
            reason = %ban.reason,
            created_at = epoch_secs(ban.created_at),
            "User banned"
        );
        self.ctx.ban_repo().upsert(ban).await?;

        Ok(CommandResponse::Banned { user_id })
    }

    /// Build a kick acknowledgement
    pub fn kick_user(
        &self,
        user_id: UserId,
        reason: Option<String>,
        admin: Option<String>,
    ) -> CommandResponse {
        let reason = reason.unwrap_or_else(|| DEFAULT_REASON.to_string());
        let admin = admin.unwrap_or_else(|| DEFAULT_ADMIN.to_string());
        info!(user_id = %user_id, admin = %admin, reason = %reason, "Kick requested");

        CommandResponse::Kick {
            user_id,
            reason,
            admin,
        }
    }

    /// Remove the user's permanent ban; timed bans are untouched
    pub async fn unban_user(&self, user_id: UserId) -> ServiceResult<CommandResponse> {
        if self.ctx.ban_repo().delete(&user_id).await?.is_none() {
            return Err(DomainError::UserNotBanned(user_id.into_inner()).into());
        }
        info!(user_id = %user_id, "User unbanned");

        Ok(CommandResponse::Unbanned { user_id })
    }

    /// Insert or overwrite the user's timed ban
    pub async fn timed_ban_user(
        &self,
        user_id: UserId,
        duration: BanDuration,
        reason: Option<String>,
        admin: Option<String>,
    ) -> ServiceResult<CommandResponse> {
        let now = self.ctx.clock().now();
        let expire_at = now
            .checked_add_signed(duration.to_time_delta()?)
            .ok_or_else(|| DomainError::InvalidDuration(duration.as_number().to_string()))?;

        let ban = TimedBanRecord::new(user_id.clone(), reason, admin, expire_at);
        info!(
            user_id = %ban.user_id,
            admin = %ban.admin,
            reason = %ban.reason,
            duration = %duration,
            "User timed banned"
        );
        self.ctx.timed_ban_repo().upsert(ban).await?;

        Ok(CommandResponse::TimedBanned {
            user_id,
            expires_in: duration,
        })
    }

    /// Permanent ban status
    pub async fn ban_status(&self, user_id: &UserId) -> ServiceResult<BanStatus> {
        Ok(match self.ctx.ban_repo().find(user_id).await? {
            Some(ban) => BanStatus::Banned(ban),
            None => BanStatus::NotBanned,
        })
    }

    /// Timed ban status, collecting the record if it has expired
    pub async fn timed_ban_status(&self, user_id: &UserId) -> ServiceResult<TimedBanStatus> {
        let Some(ban) = self.ctx.timed_ban_repo().find(user_id).await? else {
            return Ok(TimedBanStatus::NotBanned);
        };

        let now = self.ctx.clock().now();
        if ban.is_expired_at(now) {
            if self.ctx.timed_ban_repo().remove_if_expired(user_id, now).await? {
                debug!(user_id = %user_id, "Timed ban expired");
            }
            return Ok(TimedBanStatus::NotBanned);
        }

        Ok(TimedBanStatus::Active {
            remaining: ban.remaining_at(now),
            record: ban,
        })
    }

    /// Combined status: a permanent ban wins, then an active timed ban
    pub async fn combined_status(&self, user_id: &UserId) -> ServiceResult<CombinedStatus> {
        if let BanStatus::Banned(ban) = self.ban_status(user_id).await? {
            return Ok(CombinedStatus::Permanent(ban));
        }
        Ok(self.timed_ban_status(user_id).await?.into())
    }
}
