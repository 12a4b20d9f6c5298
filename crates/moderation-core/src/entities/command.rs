//! Moderation commands accepted by the combined command endpoint

use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// A moderation command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModerationCommand {
    /// Permanently ban the user
    Ban,
    /// Ask the game runtime to kick the user; nothing is stored
    Kick,
    /// Lift a permanent ban
    Unban,
    /// Ban the user for a limited time
    TimedBan,
}

impl ModerationCommand {
    /// All commands, in dispatch order
    pub const ALL: [Self; 4] = [Self::Ban, Self::Kick, Self::Unban, Self::TimedBan];

    /// Wire name of the command
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ban => "ban",
            Self::Kick => "kick",
            Self::Unban => "unban",
            Self::TimedBan => "timedban",
        }
    }
}

impl fmt::Display for ModerationCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModerationCommand {
    type Err = DomainError;

    /// Case-insensitive parse; unknown commands are reported lowercased
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|command| command.as_str() == lowered)
            .ok_or(DomainError::UnknownCommand(lowered))
    }
}
