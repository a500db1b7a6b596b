use tasklist::color;
use tasklist::config::{CliArgs, Config};
use tasklist::store::{
    parse_id, parse_labels, AddLabelOutcome, RemoveLabelOutcome, SetLabelsOutcome, TaskStore,
};

use super::{check_field, file_not_found, parse_store, read_tasks, write_tasks};

/// Add one label to a task. Adding a label the task already has is fine
/// and leaves the file untouched.
pub fn cmd_label_add(config: &Config, cli: &CliArgs) -> Result<(), String> {
    let (id, label) = id_and_label(cli)?;

    let path = &config.files_tasks;
    let mut store = load_store(path)?;

    match store.add_label(id, &label) {
        AddLabelOutcome::Added => {
            write_tasks(path, &store)?;
            println!(
                "{}",
                color::success(&format!("Label '{}' added to task {}.", label, id))
            );
            Ok(())
        }
        AddLabelOutcome::AlreadyPresent => {
            println!("Label '{}' already set on task {}.", label, id);
            Ok(())
        }
        AddLabelOutcome::NotFound => Err(format!("task id {} not found", id)),
    }
}

/// Remove one label from a task.
pub fn cmd_label_rm(config: &Config, cli: &CliArgs) -> Result<(), String> {
    let (id, label) = id_and_label(cli)?;

    let path = &config.files_tasks;
    let mut store = load_store(path)?;

    match store.remove_label(id, &label) {
        RemoveLabelOutcome::Removed => {
            write_tasks(path, &store)?;
            println!(
                "{}",
                color::success(&format!("Label '{}' removed from task {}.", label, id))
            );
            Ok(())
        }
        RemoveLabelOutcome::LabelMissing => {
            Err(format!("label '{}' not found on task {}", label, id))
        }
        RemoveLabelOutcome::NotFound => Err(format!("task id {} not found", id)),
    }
}

/// Replace a task's labels with a comma-separated list. Omitting the list
/// clears every label.
pub fn cmd_label_set(config: &Config, cli: &CliArgs) -> Result<(), String> {
    let id = task_id(cli)?;

    let list = cli.label_list_arg.as_deref().unwrap_or("");
    check_field("labels", list)?;
    let labels = parse_labels(list);

    let path = &config.files_tasks;
    let mut store = load_store(path)?;

    match store.set_labels(id, &labels) {
        SetLabelsOutcome::Replaced => {
            write_tasks(path, &store)?;
            println!(
                "{}",
                color::success(&format!("Labels for task {} updated.", id))
            );
            Ok(())
        }
        SetLabelsOutcome::NotFound => Err(format!("task id {} not found", id)),
    }
}

fn task_id(cli: &CliArgs) -> Result<u32, String> {
    let raw_id = cli
        .id_arg
        .as_deref()
        .ok_or_else(|| "missing task id".to_string())?;
    parse_id(raw_id).map_err(|e| e.to_string())
}

fn id_and_label(cli: &CliArgs) -> Result<(u32, String), String> {
    let id = task_id(cli)?;
    let label = cli
        .label_arg
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .ok_or_else(|| "missing label".to_string())?;
    check_field("label", label)?;
    if label.contains(',') {
        // A comma would split this into two labels on the next parse.
        return Err("label may not contain ','".to_string());
    }
    Ok((id, label.to_string()))
}

fn load_store(path: &str) -> Result<TaskStore, String> {
    let content = read_tasks(path)?.ok_or_else(|| file_not_found(path))?;
    Ok(parse_store(&content, path))
}
