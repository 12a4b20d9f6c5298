//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with named optional fields and their defaults
//! - Response DTOs matching the wire format bot and game clients expect
//! - Mappers for converting domain statuses to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

mod lenient;

pub use requests::{
    BanRequest, KickRequest, ModerateRequest, TimedBanRequest, UnbanRequest, UserIdQuery,
};

pub use responses::{
    ActionsResponse, BanEntry, BanStatusResponse, CommandResponse, HealthResponse, TimedBanEntry,
};
