//! Task store: the semicolon-delimited tasks file parsed into records.
//!
//! Supports the line format:
//! - `1;Buy milk;urgent,home` (id, description, labels)
//! - `2;Call Bob;` (empty label set)
//! - `3;Pay rent` (legacy two-field form, decodes with no labels)

mod codec;
mod model;
mod ops;

#[cfg(test)]
mod tests;

pub use codec::{parse_id, parse_labels, InvalidId};
pub use model::{Task, TaskStore};
pub use ops::{
    AddLabelOutcome, IdsExhausted, ModifyOutcome, RemoveLabelOutcome, RemoveOutcome,
    SetLabelsOutcome,
};
