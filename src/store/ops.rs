use std::fmt;

use super::{Task, TaskStore};

/// Outcome of modifying a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifyOutcome {
    /// The task was found and updated.
    Modified,
    /// No task with the requested id; the store is unchanged.
    NotFound,
}

/// Outcome of removing a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    NotFound,
}

/// Outcome of adding a label to a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddLabelOutcome {
    /// Label appended to the task's set.
    Added,
    /// The task already carried the label; the set is unchanged.
    AlreadyPresent,
    /// No task with the requested id.
    NotFound,
}

/// Outcome of removing a label from a task.
///
/// Task-found and label-found are independent results and callers report
/// them distinctly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveLabelOutcome {
    /// Label found and removed.
    Removed,
    /// The task exists but does not carry the label.
    LabelMissing,
    /// No task with the requested id.
    NotFound,
}

/// Outcome of replacing a task's label set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetLabelsOutcome {
    Replaced,
    NotFound,
}

/// Error for an add when the highest id is already `u32::MAX`, so no new id
/// can be assigned without wrapping or reusing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdsExhausted;

impl fmt::Display for IdsExhausted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task id space exhausted")
    }
}

impl std::error::Error for IdsExhausted {}

impl TaskStore {
    /// Next id to assign: one past the highest existing id, or 1 when the
    /// store is empty; `None` once the highest id is `u32::MAX`. Because the
    /// file is the only persisted state, a removed id stays retired only
    /// while a higher id survives.
    pub fn next_id(&self) -> Option<u32> {
        self.tasks
            .iter()
            .map(|t| t.id)
            .max()
            .map_or(Some(1), |max| max.checked_add(1))
    }

    /// Add a new task and return a copy of it.
    ///
    /// Fails only when the id space is exhausted (a hand-edited file holding
    /// id `u32::MAX`); existing records are never touched, so callers may
    /// append the returned record's line instead of rewriting the file.
    pub fn add(
        &mut self,
        description: impl Into<String>,
        labels: &[String],
    ) -> Result<Task, IdsExhausted> {
        let id = self.next_id().ok_or(IdsExhausted)?;
        let mut task = Task::new(id, description);
        for label in labels {
            task.push_label(label);
        }
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Replace a task's description, and its labels when `new_labels` is
    /// provided. `None` keeps the existing label set; an empty slice clears
    /// it.
    pub fn modify(
        &mut self,
        id: u32,
        description: impl Into<String>,
        new_labels: Option<&[String]>,
    ) -> ModifyOutcome {
        match self.get_mut(id) {
            Some(task) => {
                task.description = description.into();
                if let Some(labels) = new_labels {
                    task.labels.clear();
                    for label in labels {
                        task.push_label(label);
                    }
                }
                ModifyOutcome::Modified
            }
            None => ModifyOutcome::NotFound,
        }
    }

    /// Remove a task by id. Surviving tasks keep their ids.
    pub fn remove(&mut self, id: u32) -> RemoveOutcome {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() < before {
            RemoveOutcome::Removed
        } else {
            RemoveOutcome::NotFound
        }
    }

    /// Add one label to a task. Idempotent on the label set.
    pub fn add_label(&mut self, id: u32, label: &str) -> AddLabelOutcome {
        match self.get_mut(id) {
            Some(task) => {
                if task.push_label(label) {
                    AddLabelOutcome::Added
                } else {
                    AddLabelOutcome::AlreadyPresent
                }
            }
            None => AddLabelOutcome::NotFound,
        }
    }

    /// Remove one label from a task, leaving the rest of the set alone.
    pub fn remove_label(&mut self, id: u32, label: &str) -> RemoveLabelOutcome {
        let label = label.trim();
        match self.get_mut(id) {
            Some(task) => {
                let before = task.labels.len();
                task.labels.retain(|l| l != label);
                if task.labels.len() < before {
                    RemoveLabelOutcome::Removed
                } else {
                    RemoveLabelOutcome::LabelMissing
                }
            }
            None => RemoveLabelOutcome::NotFound,
        }
    }

    /// Replace a task's label set outright. An empty slice clears it.
    pub fn set_labels(&mut self, id: u32, labels: &[String]) -> SetLabelsOutcome {
        match self.get_mut(id) {
            Some(task) => {
                task.labels.clear();
                for label in labels {
                    task.push_label(label);
                }
                SetLabelsOutcome::Replaced
            }
            None => SetLabelsOutcome::NotFound,
        }
    }

    /// Tasks ordered ascending by id, for display.
    pub fn sorted(&self) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self.tasks.iter().collect();
        tasks.sort_by_key(|t| t.id);
        tasks
    }

    /// Tasks carrying the exact label token, ordered ascending by id.
    pub fn with_label(&self, label: &str) -> Vec<&Task> {
        self.sorted()
            .into_iter()
            .filter(|t| t.has_label(label))
            .collect()
    }
}
