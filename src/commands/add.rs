use tasklist::color;
use tasklist::config::{CliArgs, Config};
use tasklist::store::{parse_labels, TaskStore};

use super::{append_task_line, check_field, parse_store, read_tasks};

/// Add a new task, appending its line to the tasks file.
pub fn cmd_add(config: &Config, cli: &CliArgs) -> Result<(), String> {
    let description = cli.details.join(" ");
    if description.is_empty() {
        return Err("missing description".to_string());
    }
    check_field("description", &description)?;

    let labels = match cli.labels {
        Some(ref raw) => {
            check_field("labels", raw)?;
            parse_labels(raw)
        }
        None => Vec::new(),
    };

    // A missing file is just an empty list; the append below creates it.
    let path = &config.files_tasks;
    let mut store = match read_tasks(path)? {
        Some(content) => parse_store(&content, path),
        None => TaskStore::default(),
    };

    let task = store.add(description, &labels).map_err(|e| e.to_string())?;
    append_task_line(path, &task.to_line())?;

    println!(
        "{}",
        color::success(&format!(
            "Successfully added task {} ({})",
            task.id, task.description
        ))
    );
    Ok(())
}
