//! Completion Tracking
//!
//! A completed-course set and the statuses derived from it. Statuses are never
//! stored; they are recomputed from the graph and the set on every query.

mod shared;
mod tracker;

pub use shared::SharedTracker;
pub use tracker::{CompletionSummary, CompletionTracker, Status, ToggleOutcome};
