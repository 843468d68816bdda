use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalProgress, NewGoal};

/// Source of ids for newly created goals.
///
/// Implementations must not hand out the same id twice over their lifetime.
pub trait GoalIdGenerator: Send {
    fn next_id(&mut self) -> String;
}

/// Trait for goal store operations
pub trait GoalStoreTrait {
    fn get_goals(&self) -> &[Goal];
    fn get_goal(&self, goal_id: &str) -> Option<&Goal>;
    fn create_goal(&mut self, new_goal: NewGoal) -> Result<Goal>;
    fn update_goal_progress(&mut self, goal_id: &str, new_current: f64) -> Result<Goal>;
    fn delete_goal(&mut self, goal_id: &str) -> usize;
    fn get_goals_progress(&self) -> Vec<GoalProgress>;
}
