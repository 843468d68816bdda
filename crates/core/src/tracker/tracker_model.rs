//! Draft state for the goal form and the progress dialog.

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::goals::NewGoal;

/// Values typed into the "new goal" form, not yet submitted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GoalForm {
    pub name: String,
    pub target: f64,
    pub current: f64,
}

impl GoalForm {
    pub fn to_new_goal(&self) -> NewGoal {
        NewGoal::new(self.name.clone(), self.target).with_current(self.current)
    }

    pub fn clear(&mut self) {
        *self = GoalForm::default();
    }
}

/// An open "update progress" dialog for one goal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEdit {
    pub goal_id: String,
    pub new_current: f64,
}

/// Parses a numeric form field.
///
/// Blank input reads as zero, the way an emptied number field does.
/// Anything else must parse as a float.
pub fn parse_amount(input: &str) -> Result<f64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    Ok(trimmed.parse::<f64>()?)
}
