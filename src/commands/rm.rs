use tasklist::color;
use tasklist::config::{CliArgs, Config};
use tasklist::store::{parse_id, RemoveOutcome};

use super::{file_not_found, parse_store, read_tasks, write_tasks};

/// Remove a task by id. Other tasks keep their ids.
pub fn cmd_rm(config: &Config, cli: &CliArgs) -> Result<(), String> {
    let raw_id = cli
        .id_arg
        .as_deref()
        .ok_or_else(|| "missing task id".to_string())?;
    let id = parse_id(raw_id).map_err(|e| e.to_string())?;

    let path = &config.files_tasks;
    let content = read_tasks(path)?.ok_or_else(|| file_not_found(path))?;
    let mut store = parse_store(&content, path);

    match store.remove(id) {
        RemoveOutcome::Removed => {
            write_tasks(path, &store)?;
            println!("{}", color::success(&format!("Task {} removed.", id)));
            Ok(())
        }
        RemoveOutcome::NotFound => Err(format!("task id {} not found", id)),
    }
}
