//! Environment collaborators consumed by the task store.
//!
//! # Responsibility
//! - Abstract the current-time source and unique-id generation.
//! - Provide deterministic implementations for tests and replay.

pub mod clock;
pub mod ids;
