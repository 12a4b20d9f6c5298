//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
///
/// The `Display` output of the caller-facing variants is the exact message
/// returned to HTTP clients, so it must stay stable.
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Missing user_id")]
    MissingUserId,

    #[error("Missing user_id or command")]
    MissingCommandFields,

    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not banned")]
    UserNotBanned(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingUserId => "MISSING_USER_ID",
            Self::MissingCommandFields => "MISSING_COMMAND_FIELDS",
            Self::UnknownCommand(_) => "UNKNOWN_COMMAND",
            Self::InvalidDuration(_) => "INVALID_DURATION",
            Self::UserNotBanned(_) => "USER_NOT_BANNED",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotBanned(_))
    }
}
