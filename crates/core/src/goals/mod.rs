//! Goals module - domain models, the goal store, and traits.

mod goals_id;
mod goals_model;
mod goals_store;
mod goals_traits;


pub use goals_id::{IdStrategy, SequentialIdGenerator, UuidIdGenerator};
pub use goals_model::{progress_percent, Goal, GoalProgress, NewGoal};
pub use goals_store::GoalStore;
pub use goals_traits::{GoalIdGenerator, GoalStoreTrait};
