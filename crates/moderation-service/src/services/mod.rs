//! Business logic services
//!
//! This module contains the service layer that validates requests and
//! orchestrates the ban repositories.

pub mod context;
pub mod error;
pub mod moderation;

pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use moderation::ModerationService;
