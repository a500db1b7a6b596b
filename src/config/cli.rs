/// CLI arguments parsed from the command line.
#[derive(Debug, Default)]
pub struct CliArgs {
    /// Subcommand to execute.
    pub command: Option<Command>,
    /// Command word that did not match any subcommand.
    pub unknown_command: Option<String>,
    /// Path to config file.
    pub config: Option<String>,
    /// Path to tasks file.
    pub file: Option<String>,
    /// Comma-separated labels for add/modify. `Some("")` clears on modify;
    /// `None` leaves labels alone.
    pub labels: Option<String>,
    /// Task id argument, kept as raw text so errors can echo it.
    pub id_arg: Option<String>,
    /// Label argument for `label add`/`label rm`, or the `show` filter.
    pub label_arg: Option<String>,
    /// Comma-separated label list for `label set` (omitted = clear).
    pub label_list_arg: Option<String>,
    /// Description words for add/modify, joined with spaces.
    pub details: Vec<String>,
    /// Show help.
    pub help: bool,
    /// Show version.
    pub version: bool,
}

/// task subcommands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Add a new task.
    Add,
    /// Replace a task's description (and optionally its labels).
    Modify,
    /// Remove a task.
    Rm,
    /// List tasks in a table.
    Show,
    /// Add one label to a task.
    LabelAdd,
    /// Remove one label from a task.
    LabelRm,
    /// Replace a task's label set.
    LabelSet,
}

impl Command {
    /// Parse a single-word command. The two-word `label` commands are
    /// resolved by `parse_args`, which consumes the subcommand word.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "add" => Some(Self::Add),
            "modify" => Some(Self::Modify),
            "rm" => Some(Self::Rm),
            "show" => Some(Self::Show),
            _ => None,
        }
    }
}

/// Parse CLI arguments from an iterator.
pub fn parse_args<I>(args: I) -> CliArgs
where
    I: IntoIterator<Item = String>,
{
    let mut cli = CliArgs::default();
    let mut args = args.into_iter().peekable();

    // Skip program name
    args.next();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => cli.help = true,
            "-V" | "--version" => cli.version = true,
            "-c" | "--config" => cli.config = args.next(),
            "-f" | "--file" => cli.file = args.next(),
            "--labels" => cli.labels = args.next(),
            _ if !arg.starts_with('-')
                && cli.command.is_none()
                && cli.unknown_command.is_none() =>
            {
                cli.command = match arg.as_str() {
                    // Two-word form: label add|rm|set
                    "label" => match args.peek().map(String::as_str) {
                        Some("add") => {
                            args.next();
                            Some(Command::LabelAdd)
                        }
                        Some("rm") => {
                            args.next();
                            Some(Command::LabelRm)
                        }
                        Some("set") => {
                            args.next();
                            Some(Command::LabelSet)
                        }
                        _ => None,
                    },
                    _ => Command::from_str(&arg),
                };

                match cli.command {
                    None => cli.unknown_command = Some(arg),
                    Some(Command::Modify) | Some(Command::Rm) => {
                        // The id comes right after the command word
                        if let Some(next) = args.peek() {
                            if !next.starts_with('-') {
                                cli.id_arg = args.next();
                            }
                        }
                    }
                    Some(Command::LabelAdd) | Some(Command::LabelRm) => {
                        if let Some(next) = args.peek() {
                            if !next.starts_with('-') {
                                cli.id_arg = args.next();
                            }
                        }
                        if let Some(next) = args.peek() {
                            if !next.starts_with('-') {
                                cli.label_arg = args.next();
                            }
                        }
                    }
                    Some(Command::LabelSet) => {
                        if let Some(next) = args.peek() {
                            if !next.starts_with('-') {
                                cli.id_arg = args.next();
                            }
                        }
                        if let Some(next) = args.peek() {
                            if !next.starts_with('-') {
                                cli.label_list_arg = args.next();
                            }
                        }
                    }
                    Some(Command::Show) => {
                        // Optional label filter
                        if let Some(next) = args.peek() {
                            if !next.starts_with('-') {
                                cli.label_arg = args.next();
                            }
                        }
                    }
                    // Description words are collected below
                    Some(Command::Add) => {}
                }
            }
            _ if !arg.starts_with('-') => cli.details.push(arg),
            _ => {} // Ignore unknown flags
        }
    }

    cli
}
