//! Goals domain models.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CURRENT_AMOUNT, ZERO_TARGET_PROGRESS};
use crate::errors::{Error, Result, ValidationError};

/// Domain model representing a goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub name: String,
    pub target: f64,
    /// Not clamped: may be negative or run past `target`.
    pub current: f64,
}

impl Goal {
    /// Progress toward `target` as a whole percentage. See [`progress_percent`].
    pub fn progress_percent(&self) -> i64 {
        progress_percent(self)
    }
}

/// Input model for creating a new goal
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub name: String,
    pub target: f64,
    #[serde(default = "default_current_amount")]
    pub current: f64,
}

fn default_current_amount() -> f64 {
    DEFAULT_CURRENT_AMOUNT
}

impl NewGoal {
    /// Creates a goal input with no progress yet.
    pub fn new(name: impl Into<String>, target: f64) -> Self {
        Self {
            name: name.into(),
            target,
            current: DEFAULT_CURRENT_AMOUNT,
        }
    }

    pub fn with_current(mut self, current: f64) -> Self {
        self.current = current;
        self
    }

    /// Validates the new goal data.
    ///
    /// The name must contain something other than whitespace and the target
    /// must be strictly positive. `current` is accepted as is.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "name".to_string(),
            )));
        }
        if self.target.is_nan() || self.target <= 0.0 {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Goal target must be greater than zero, got {}",
                self.target
            ))));
        }
        Ok(())
    }

    pub(crate) fn into_goal(self, id: String) -> Goal {
        Goal {
            id,
            name: self.name,
            target: self.target,
            current: self.current,
        }
    }
}

/// A goal as the goal list renders it, with its computed progress.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub goal_id: String,
    pub name: String,
    pub target: f64,
    pub current: f64,
    pub progress_percent: i64,
}

impl From<&Goal> for GoalProgress {
    fn from(goal: &Goal) -> Self {
        GoalProgress {
            goal_id: goal.id.clone(),
            name: goal.name.clone(),
            target: goal.target,
            current: goal.current,
            progress_percent: goal.progress_percent(),
        }
    }
}

/// Computes `round(current / target * 100)`.
///
/// Halves round toward positive infinity, so `12.5` becomes `13` and `-12.5`
/// becomes `-12`. The result is not clamped to `0..=100`.
///
/// A zero target yields `0` rather than dividing. Creation already rejects
/// such goals, but goals built by hand or deserialized skip that check.
pub fn progress_percent(goal: &Goal) -> i64 {
    if goal.target == 0.0 {
        return ZERO_TARGET_PROGRESS;
    }

    let percent = goal.current / goal.target * 100.0;
    if percent.is_nan() {
        return 0;
    }

    // `percent - floor` is exact; `percent + 0.5` is not.
    let floor = percent.floor();
    let rounded = if percent - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    };

    // `as` saturates at the i64 bounds for infinite ratios.
    rounded as i64
}
