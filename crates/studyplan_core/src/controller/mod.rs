//! Transient view-state controller.
//!
//! # Responsibility
//! - Hold filter, search, sort and edit-target state between renders.
//! - Route form submissions to task store `add` or `update`.
//!
//! # Invariants
//! - View parameters are never persisted and never touch the task store.
//! - The edited task is unchanged until the draft is submitted.

pub mod view_state;
