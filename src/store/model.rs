/// A single task record parsed from the tasks file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique id, assigned on add and never renumbered.
    pub id: u32,
    /// Free-text description (no `;`, no newline).
    pub description: String,
    /// Labels in first-insertion order, without duplicates.
    pub labels: Vec<String>,
}

impl Task {
    /// Create a task with no labels.
    pub fn new(id: u32, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            labels: Vec::new(),
        }
    }

    /// Check whether the task carries the exact label token.
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// Append a label unless it is empty or already present.
    ///
    /// The token is trimmed first. Returns true when the set changed.
    pub fn push_label(&mut self, label: &str) -> bool {
        let label = label.trim();
        if label.is_empty() || self.has_label(label) {
            return false;
        }
        self.labels.push(label.to_string());
        true
    }

    /// The label set joined for the third field and for table cells.
    pub fn labels_joined(&self) -> String {
        self.labels.join(",")
    }
}

/// All task records backing one file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    /// The records, ordered as they appeared in the file.
    pub tasks: Vec<Task>,
    /// Lines the last parse dropped as malformed.
    pub skipped: usize,
}

impl TaskStore {
    /// Look up a task by id. On duplicate ids the first match in file
    /// order wins.
    pub fn get(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub(super) fn get_mut(&mut self, id: u32) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Check whether the store holds no records at all.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
