use tasklist::color;
use tasklist::config::{CliArgs, Config};

use super::{parse_store, read_tasks};
use crate::table;

/// List tasks in a bordered table, optionally filtered by label.
pub fn cmd_show(config: &Config, cli: &CliArgs) -> Result<(), String> {
    let path = &config.files_tasks;
    let content = match read_tasks(path)? {
        Some(content) => content,
        None => {
            // No file yet means no tasks, not a failure.
            println!("{}", color::info("No tasks found."));
            return Ok(());
        }
    };
    let store = parse_store(&content, path);

    let tasks = match cli.label_arg {
        Some(ref filter) => store.with_label(filter),
        None => store.sorted(),
    };

    if tasks.is_empty() {
        match cli.label_arg {
            // The store has tasks, just none carrying this label.
            Some(ref filter) if !store.is_empty() => {
                println!("No tasks found with label '{}'.", color::label(filter));
            }
            _ => println!("{}", color::info("No tasks found.")),
        }
        return Ok(());
    }

    print!("{}", table::render(&tasks, config.display_min_desc_width));
    Ok(())
}
