//! Stateful use-case services.
//!
//! # Responsibility
//! - Own the canonical task collection and its mutation rules.
//! - Keep presentation layers decoupled from storage details.

pub mod task_store;
