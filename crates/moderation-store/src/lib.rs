//! # moderation-store
//!
//! Storage layer implementing the ban repository traits.
//!
//! State is process-local and lost on restart. Each namespace is guarded by
//! its own lock; no operation spans both.

pub mod memory;

pub use memory::{InMemoryBanRepository, InMemoryTimedBanRepository};
