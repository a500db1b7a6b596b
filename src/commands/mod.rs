pub mod add;
pub mod label;
pub mod modify;
pub mod rm;
pub mod show;

pub use add::cmd_add;
pub use label::{cmd_label_add, cmd_label_rm, cmd_label_set};
pub use modify::cmd_modify;
pub use rm::cmd_rm;
pub use show::cmd_show;

use std::fs;
use std::io::{self, Write};

use tasklist::color;
use tasklist::store::TaskStore;

/// Read the tasks file. `Ok(None)` means the file does not exist; what that
/// means is up to the command (empty store for add, a user-facing error for
/// the mutating commands, a plain message for show).
pub(crate) fn read_tasks(path: &str) -> Result<Option<String>, String> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(format!("failed to read {}: {}", path, e)),
    }
}

/// Decode file content, reporting dropped lines on stderr.
pub(crate) fn parse_store(content: &str, path: &str) -> TaskStore {
    let store = TaskStore::parse(content);
    if store.skipped > 0 {
        eprintln!(
            "{}",
            color::warning(&format!(
                "warning: skipped {} malformed line(s) in {}",
                store.skipped, path
            ))
        );
    }
    store
}

/// Rewrite the whole tasks file in canonical form.
pub(crate) fn write_tasks(path: &str, store: &TaskStore) -> Result<(), String> {
    fs::write(path, store.to_string()).map_err(|e| format!("failed to write {}: {}", path, e))
}

/// Append one task line, creating the file if needed.
///
/// Every line the tool writes ends with a newline, so appending is safe
/// without reading the tail of the file first.
pub(crate) fn append_task_line(path: &str, line: &str) -> Result<(), String> {
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| format!("failed to open {}: {}", path, e))?;
    writeln!(file, "{}", line).map_err(|e| format!("failed to write {}: {}", path, e))
}

/// Failure message for mutating commands when the tasks file is absent.
pub(crate) fn file_not_found(path: &str) -> String {
    format!("the file {} was not found", path)
}

/// Reject text that would corrupt the line format on the next parse.
pub(crate) fn check_field(kind: &str, value: &str) -> Result<(), String> {
    if value.contains(';') || value.contains('\n') {
        return Err(format!("{} may not contain ';' or newlines", kind));
    }
    Ok(())
}
