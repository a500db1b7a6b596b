use tasklist::color;
use tasklist::config::{CliArgs, Config};
use tasklist::store::{parse_id, parse_labels, ModifyOutcome};

use super::{check_field, file_not_found, parse_store, read_tasks, write_tasks};

/// Replace a task's description, and its labels when --labels is given.
pub fn cmd_modify(config: &Config, cli: &CliArgs) -> Result<(), String> {
    // Validate the id before touching the file so a typo like `modify abc`
    // can never end in a rewrite.
    let raw_id = cli
        .id_arg
        .as_deref()
        .ok_or_else(|| "missing task id".to_string())?;
    let id = parse_id(raw_id).map_err(|e| e.to_string())?;

    let description = cli.details.join(" ");
    if description.is_empty() {
        return Err("missing description".to_string());
    }
    check_field("description", &description)?;

    let new_labels = match cli.labels {
        Some(ref raw) => {
            check_field("labels", raw)?;
            Some(parse_labels(raw))
        }
        None => None,
    };

    let path = &config.files_tasks;
    let content = read_tasks(path)?.ok_or_else(|| file_not_found(path))?;
    let mut store = parse_store(&content, path);

    match store.modify(id, description, new_labels.as_deref()) {
        ModifyOutcome::Modified => {
            write_tasks(path, &store)?;
            println!("{}", color::success(&format!("Task {} modified.", id)));
            Ok(())
        }
        ModifyOutcome::NotFound => Err(format!("task id {} not found", id)),
    }
}
