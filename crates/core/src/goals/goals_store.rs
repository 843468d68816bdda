use log::{debug, warn};
use std::fmt;

use super::goals_id::IdStrategy;
use super::goals_model::{Goal, GoalProgress, NewGoal};
use super::goals_traits::{GoalIdGenerator, GoalStoreTrait};
use crate::errors::{Error, Result};

/// Ordered, id-unique collection of goals owned by one session.
///
/// New goals are appended, so iteration order is creation order. Every
/// rejected call leaves the collection exactly as it was.
pub struct GoalStore {
    goals: Vec<Goal>,
    id_generator: Box<dyn GoalIdGenerator>,
}

impl GoalStore {
    /// Creates an empty store using the default id strategy
    pub fn new() -> Self {
        Self::with_strategy(IdStrategy::default())
    }

    pub fn with_strategy(strategy: IdStrategy) -> Self {
        Self::with_id_generator(strategy.generator())
    }

    pub fn with_id_generator(id_generator: Box<dyn GoalIdGenerator>) -> Self {
        GoalStore {
            goals: Vec::new(),
            id_generator,
        }
    }

    pub fn len(&self) -> usize {
        self.goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.goals.is_empty()
    }

    fn position(&self, goal_id: &str) -> Option<usize> {
        self.goals.iter().position(|goal| goal.id == goal_id)
    }
}

impl Default for GoalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GoalStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoalStore")
            .field("goals", &self.goals)
            .finish_non_exhaustive()
    }
}

impl GoalStoreTrait for GoalStore {
    fn get_goals(&self) -> &[Goal] {
        &self.goals
    }

    fn get_goal(&self, goal_id: &str) -> Option<&Goal> {
        self.goals.iter().find(|goal| goal.id == goal_id)
    }

    /// Validates and appends a new goal
    fn create_goal(&mut self, new_goal: NewGoal) -> Result<Goal> {
        new_goal.validate()?;

        let id = self.id_generator.next_id();
        if self.position(&id).is_some() {
            warn!("Id generator produced '{}' which is already in use", id);
            return Err(Error::DuplicateId(id));
        }

        let goal = new_goal.into_goal(id);
        debug!(
            "Created goal {} '{}' (target: {}, current: {})",
            goal.id, goal.name, goal.target, goal.current
        );
        self.goals.push(goal.clone());
        Ok(goal)
    }

    /// Replaces `current` on the matching goal; nothing else changes
    fn update_goal_progress(&mut self, goal_id: &str, new_current: f64) -> Result<Goal> {
        let goal = self
            .goals
            .iter_mut()
            .find(|goal| goal.id == goal_id)
            .ok_or_else(|| Error::GoalNotFound(goal_id.to_string()))?;

        debug!(
            "Updating progress of goal {}: {} -> {}",
            goal.id, goal.current, new_current
        );
        goal.current = new_current;
        Ok(goal.clone())
    }

    /// Removes the matching goal and returns how many goals were removed
    fn delete_goal(&mut self, goal_id: &str) -> usize {
        match self.position(goal_id) {
            Some(index) => {
                let removed = self.goals.remove(index);
                debug!("Deleted goal {} '{}'", removed.id, removed.name);
                1
            }
            None => 0,
        }
    }

    fn get_goals_progress(&self) -> Vec<GoalProgress> {
        self.goals.iter().map(GoalProgress::from).collect()
    }
}
