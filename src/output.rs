use tasklist::config;

pub(crate) fn print_help() {
    let defaults = config::Config::default();
    println!(
        r#"task - manage a task list stored in a plain text file

USAGE:
    task [OPTIONS] <COMMAND> [ARGS]

COMMANDS:
    add <description>...          Add a task (use --labels to tag it)
    modify <id> <description>...  Replace a task's description; --labels
                                  replaces its labels, --labels "" clears them
    rm <id>                       Remove a task
    show [label]                  List tasks, optionally only those with a label
    label add <id> <label>        Add one label to a task
    label rm <id> <label>         Remove one label from a task
    label set <id> [a,b,c]        Replace a task's labels (omit list to clear)

OPTIONS:
    -h, --help            Show this help message
    -V, --version         Show version
    -f, --file <PATH>     Tasks file to operate on [default: {tasks}]
    -c, --config <PATH>   Config file to load [default: task.toml]
    --labels <LIST>       Comma-separated labels for add and modify

EXAMPLES:
    task add Buy milk --labels urgent,errands
    task show urgent
    task modify 1 Buy oat milk
    task label add 1 home
    task rm 1
"#,
        tasks = defaults.files_tasks
    );
}
