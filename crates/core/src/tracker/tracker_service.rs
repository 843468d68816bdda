use log::debug;

use super::tracker_model::{GoalForm, ProgressEdit};
use crate::errors::{Error, Result};
use crate::goals::{Goal, GoalProgress, GoalStore, GoalStoreTrait};

/// Session state behind the goal tracker widget: the goal store plus the
/// drafts of the creation form and the progress dialog.
#[derive(Debug, Default)]
pub struct GoalTracker {
    store: GoalStore,
    form: GoalForm,
    edit: Option<ProgressEdit>,
}

impl GoalTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(store: GoalStore) -> Self {
        GoalTracker {
            store,
            form: GoalForm::default(),
            edit: None,
        }
    }

    pub fn store(&self) -> &GoalStore {
        &self.store
    }

    pub fn goals(&self) -> &[Goal] {
        self.store.get_goals()
    }

    /// Rows for the goal list, in creation order.
    pub fn goals_progress(&self) -> Vec<GoalProgress> {
        self.store.get_goals_progress()
    }

    pub fn form(&self) -> &GoalForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut GoalForm {
        &mut self.form
    }

    /// Creates a goal from the form. The form is cleared only on success.
    pub fn submit_form(&mut self) -> Result<Goal> {
        let goal = self.store.create_goal(self.form.to_new_goal())?;
        self.form.clear();
        debug!("Goal form submitted, created {}", goal.id);
        Ok(goal)
    }

    pub fn edit(&self) -> Option<&ProgressEdit> {
        self.edit.as_ref()
    }

    pub fn is_editing(&self, goal_id: &str) -> bool {
        self.edit
            .as_ref()
            .is_some_and(|edit| edit.goal_id == goal_id)
    }

    /// Opens the progress dialog for a goal, seeded with its current value.
    /// Replaces any dialog that was already open.
    pub fn open_edit(&mut self, goal_id: &str) -> Result<&ProgressEdit> {
        let goal = self
            .store
            .get_goal(goal_id)
            .ok_or_else(|| Error::GoalNotFound(goal_id.to_string()))?;

        let edit = ProgressEdit {
            goal_id: goal.id.clone(),
            new_current: goal.current,
        };
        let edit = self.edit.insert(edit);
        Ok(&*edit)
    }

    pub fn set_edit_value(&mut self, new_current: f64) {
        if let Some(edit) = self.edit.as_mut() {
            edit.new_current = new_current;
        }
    }

    /// Applies the dialog value and closes the dialog.
    ///
    /// Returns `Ok(None)` when no dialog is open. The dialog closes even if
    /// its goal has been deleted in the meantime.
    pub fn save_edit(&mut self) -> Result<Option<Goal>> {
        let Some(edit) = self.edit.take() else {
            return Ok(None);
        };
        self.store
            .update_goal_progress(&edit.goal_id, edit.new_current)
            .map(Some)
    }

    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    /// Deletes a goal, closing its dialog if it was open.
    pub fn delete_goal(&mut self, goal_id: &str) -> usize {
        if self.is_editing(goal_id) {
            self.edit = None;
        }
        self.store.delete_goal(goal_id)
    }
}
