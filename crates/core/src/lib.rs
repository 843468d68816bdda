//! Goaltrack Core - Goal models, the goal store, and tracker session state.
//!
//! All state is in-memory and owned by the caller. Nothing here performs
//! I/O; a presentation layer drives the [`tracker::GoalTracker`] or the
//! [`goals::GoalStore`] directly and renders what they return.

pub mod constants;
pub mod errors;
pub mod goals;
pub mod tracker;

// Re-export the main entry points
pub use goals::{Goal, GoalStore, GoalStoreTrait, NewGoal};
pub use tracker::GoalTracker;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
