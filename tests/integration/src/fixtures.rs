//! Test fixtures and data generators
//!
//! Request bodies and typed views of the responses.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique user id
pub fn unique_user_id() -> String {
    format!("user{}", COUNTER.fetch_add(1, Ordering::SeqCst))
}

/// Body of /ban and /kick
#[derive(Debug, Default, Serialize)]
pub struct BanBody {
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<String>,
}

impl BanBody {
    pub fn new(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            ..Self::default()
        }
    }

    pub fn with_reason(mut self, reason: &str) -> Self {
        self.reason = Some(reason.to_string());
        self
    }

    pub fn with_admin(mut self, admin: &str) -> Self {
        self.admin = Some(admin.to_string());
        self
    }
}

/// Body of /timed-ban
#[derive(Debug, Default, Serialize)]
pub struct TimedBanBody {
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<String>,
}

impl TimedBanBody {
    pub fn new(user_id: &str, duration: f64) -> Self {
        Self {
            user_id: user_id.to_string(),
            duration: Some(duration),
            ..Self::default()
        }
    }
}

/// Body of /api/moderate
#[derive(Debug, Default, Serialize)]
pub struct ModerateBody {
    pub command: String,
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

impl ModerateBody {
    pub fn new(command: &str, user_id: &str) -> Self {
        Self {
            command: command.to_string(),
            user_id: user_id.to_string(),
            ..Self::default()
        }
    }
}

/// Ban lookup response
#[derive(Debug, Deserialize)]
pub struct BanStatus {
    pub banned: bool,
    pub reason: Option<String>,
    pub admin: Option<String>,
    pub timestamp: Option<f64>,
    pub remaining: Option<f64>,
}

/// Permanent ban entry of /api/getActions
#[derive(Debug, Deserialize)]
pub struct BanEntry {
    pub reason: String,
    pub admin: String,
    pub timestamp: f64,
}

/// Timed ban entry of /api/getActions
#[derive(Debug, Deserialize)]
pub struct TimedBanEntry {
    pub reason: String,
    pub admin: String,
    pub remaining: f64,
}

/// /api/getActions response
#[derive(Debug, Deserialize)]
pub struct Actions {
    pub bans: BTreeMap<String, BanEntry>,
    pub timed_bans: BTreeMap<String, TimedBanEntry>,
}
