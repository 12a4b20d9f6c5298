//! # moderation-service
//!
//! Application layer containing the moderation use cases and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    ActionsResponse, BanEntry, BanRequest, BanStatusResponse, CommandResponse, HealthResponse,
    KickRequest, ModerateRequest, TimedBanEntry, TimedBanRequest, UnbanRequest, UserIdQuery,
};
pub use services::{
    ModerationService, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
};
