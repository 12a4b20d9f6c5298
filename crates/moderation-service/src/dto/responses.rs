//! Response DTOs for API endpoints
//!
//! Field names and shapes follow the contract the bot and game clients were
//! written against: epoch-second timestamps, fractional `remaining` seconds,
//! and optional fields omitted rather than null.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use moderation_core::{BanDuration, UserId};
use serde::Serialize;

// ============================================================================
// Command Responses
// ============================================================================

/// Acknowledgement of a moderation command
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status")]
pub enum CommandResponse {
    #[serde(rename = "banned")]
    Banned { user_id: UserId },

    #[serde(rename = "kick")]
    Kick {
        user_id: UserId,
        reason: String,
        admin: String,
    },

    #[serde(rename = "unbanned")]
    Unbanned { user_id: UserId },

    #[serde(rename = "timed_banned")]
    TimedBanned {
        user_id: UserId,
        expires_in: BanDuration,
    },
}

impl CommandResponse {
    /// User the command applied to
    pub fn user_id(&self) -> &UserId {
        match self {
            Self::Banned { user_id }
            | Self::Kick { user_id, .. }
            | Self::Unbanned { user_id }
            | Self::TimedBanned { user_id, .. } => user_id,
        }
    }
}

// ============================================================================
// Status Responses
// ============================================================================

/// Ban status of a single user
///
/// `timestamp` is present for permanent bans, `remaining` for timed bans.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BanStatusResponse {
    pub banned: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining: Option<f64>,
}

impl BanStatusResponse {
    pub fn not_banned() -> Self {
        Self {
            banned: false,
            reason: None,
            admin: None,
            timestamp: None,
            remaining: None,
        }
    }
}

// ============================================================================
// Action Listing
// ============================================================================

/// Permanent ban as listed by `/api/getActions`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BanEntry {
    pub reason: String,
    pub admin: String,
    pub timestamp: f64,
}

/// Active timed ban as listed by `/api/getActions`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimedBanEntry {
    pub reason: String,
    pub admin: String,
    pub remaining: f64,
}

/// Every permanent ban and every active timed ban, keyed by user id
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ActionsResponse {
    pub bans: BTreeMap<String, BanEntry>,
    pub timed_bans: BTreeMap<String, TimedBanEntry>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}
