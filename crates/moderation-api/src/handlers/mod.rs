//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod actions;
pub mod bans;
pub mod health;
pub mod moderate;
pub mod timed_bans;
