//! Goal id generation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::goals_traits::GoalIdGenerator;
use crate::constants::SEQUENTIAL_ID_PREFIX;

/// Which id scheme a store uses for new goals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IdStrategy {
    /// Random UUID v4 per goal
    #[default]
    Uuid,
    /// Monotonic counter, `goal-1`, `goal-2`, ...
    Sequential,
}

impl IdStrategy {
    pub fn generator(self) -> Box<dyn GoalIdGenerator> {
        match self {
            IdStrategy::Uuid => Box::new(UuidIdGenerator),
            IdStrategy::Sequential => Box::new(SequentialIdGenerator::default()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl GoalIdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Counter-based ids. Two goals created back to back always get distinct
/// ids, unlike ids derived from a clock reading.
#[derive(Debug, Clone, Default)]
pub struct SequentialIdGenerator {
    last: u64,
}

impl SequentialIdGenerator {
    /// Starts counting after `last`, so the first id is `last + 1`.
    pub fn starting_after(last: u64) -> Self {
        Self { last }
    }
}

impl GoalIdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> String {
        self.last = self.last.wrapping_add(1);
        format!("{}-{}", SEQUENTIAL_ID_PREFIX, self.last)
    }
}
