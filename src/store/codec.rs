use std::fmt;

use super::{Task, TaskStore};

/// Delimiter between the id, description, and label fields.
pub(super) const FIELD_DELIMITER: char = ';';
/// Separator between label tokens inside the third field.
pub(super) const LABEL_SEPARATOR: char = ',';

/// Error for an id argument that is not a positive integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidId(pub String);

impl fmt::Display for InvalidId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid task id '{}'", self.0)
    }
}

impl std::error::Error for InvalidId {}

/// Parse an id argument supplied as raw text.
///
/// Callers are expected to run this before reading or writing any file, so a
/// mistyped id can never turn into a lossy rewrite.
pub fn parse_id(raw: &str) -> Result<u32, InvalidId> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| InvalidId(raw.to_string()))
}

impl TaskStore {
    /// Parse tasks-file content.
    ///
    /// Blank lines are ignored. Lines that do not parse (wrong field count,
    /// non-integer id) are dropped and counted in `skipped`; they will not
    /// survive the next full rewrite.
    pub fn parse(content: &str) -> Self {
        let mut tasks = Vec::new();
        let mut skipped = 0;

        for line in content.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            match parse_line(trimmed) {
                Some(task) => tasks.push(task),
                None => skipped += 1,
            }
        }

        Self { tasks, skipped }
    }
}

impl fmt::Display for TaskStore {
    /// Canonical file form: one newline-terminated line per record, in file
    /// order. An empty store serializes to the empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for task in &self.tasks {
            writeln!(f, "{}", task.to_line())?;
        }
        Ok(())
    }
}

impl Task {
    /// Canonical line form: `id;description;label1,label2`.
    ///
    /// The label field is always emitted, even when empty, so any full
    /// rewrite migrates legacy two-field lines to the current format.
    pub fn to_line(&self) -> String {
        format!("{};{};{}", self.id, self.description, self.labels_joined())
    }
}

/// Parse a single pre-trimmed, non-empty task line.
///
/// Two fields is the legacy pre-labels form, three is current. Anything else
/// is malformed, including extra delimiters from a stray `;` in a
/// description, and yields `None`.
pub(super) fn parse_line(line: &str) -> Option<Task> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if fields.len() < 2 || fields.len() > 3 {
        return None;
    }

    let id = fields[0].trim().parse::<u32>().ok()?;
    let mut task = Task::new(id, fields[1]);
    if let Some(raw) = fields.get(2) {
        for token in raw.split(LABEL_SEPARATOR) {
            task.push_label(token);
        }
    }

    Some(task)
}

/// Split a comma-separated label list into clean tokens.
///
/// Tokens are trimmed, empty tokens are dropped, and duplicates keep their
/// first occurrence only.
pub fn parse_labels(raw: &str) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for token in raw.split(LABEL_SEPARATOR) {
        let token = token.trim();
        if !token.is_empty() && !labels.iter().any(|l| l == token) {
            labels.push(token.to_string());
        }
    }
    labels
}
