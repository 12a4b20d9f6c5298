//! Request DTOs for API endpoints
//!
//! Every field is optional on the wire. Presence of `user_id` (and `command`)
//! is checked by the service, so a missing field turns into the documented
//! error message instead of a generic deserialization failure.

use moderation_core::{BanDuration, DomainError, UserId};
use serde::Deserialize;
use serde_json::Value;

use super::lenient;

/// Resolve an optional raw user id, treating empty strings as missing
fn require_user_id(raw: Option<&str>) -> Result<UserId, DomainError> {
    UserId::parse(raw.unwrap_or_default())
}

// ============================================================================
// Ban Requests
// ============================================================================

/// Permanent ban request
///
/// `reason` defaults to "No reason provided." and `admin` to "Unknown".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BanRequest {
    #[serde(default, deserialize_with = "lenient::user_id")]
    pub user_id: Option<String>,
    pub reason: Option<String>,
    pub admin: Option<String>,
}

impl BanRequest {
    pub fn user_id(&self) -> Result<UserId, DomainError> {
        require_user_id(self.user_id.as_deref())
    }
}

/// Kick notification request (same shape as a ban)
pub type KickRequest = BanRequest;

/// Unban request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UnbanRequest {
    #[serde(default, deserialize_with = "lenient::user_id")]
    pub user_id: Option<String>,
}

/// Timed ban request
///
/// `duration` is in seconds and defaults to 60.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimedBanRequest {
    #[serde(default, deserialize_with = "lenient::user_id")]
    pub user_id: Option<String>,
    pub duration: Option<BanDuration>,
    pub reason: Option<String>,
    pub admin: Option<String>,
}

impl TimedBanRequest {
    pub fn user_id(&self) -> Result<UserId, DomainError> {
        require_user_id(self.user_id.as_deref())
    }
}

// ============================================================================
// Command Requests
// ============================================================================

/// Combined moderation command request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModerateRequest {
    pub command: Option<String>,
    #[serde(default, deserialize_with = "lenient::user_id")]
    pub user_id: Option<String>,
    pub reason: Option<String>,
    pub admin: Option<String>,
    /// Left raw so commands other than `timedban` never fail on it
    pub duration: Option<Value>,
}

impl ModerateRequest {
    /// Seconds for a `timedban`, defaulting to 60 when absent
    pub fn timed_ban_duration(&self) -> Result<BanDuration, DomainError> {
        match &self.duration {
            None => Ok(BanDuration::default()),
            Some(value) => serde_json::from_value(value.clone())
                .map_err(|_| DomainError::InvalidDuration(value.to_string())),
        }
    }
}

// ============================================================================
// Lookup Requests
// ============================================================================

/// `?user_id=` query string of the check endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserIdQuery {
    pub user_id: Option<String>,
}

impl UserIdQuery {
    /// The user id if one was supplied and non-empty
    pub fn user_id(&self) -> Option<UserId> {
        self.user_id.as_deref().and_then(|raw| UserId::parse(raw).ok())
    }
}
