//! Tracker module - session state for the goal tracker widget.

mod tracker_model;
mod tracker_service;

pub use tracker_model::{parse_amount, GoalForm, ProgressEdit};
pub use tracker_service::GoalTracker;
