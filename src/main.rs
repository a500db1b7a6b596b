use std::env;
use std::process;

use tasklist::color;
use tasklist::config::{self, Command, Config};

mod commands;
mod output;
mod table;

use commands::{
    cmd_add, cmd_label_add, cmd_label_rm, cmd_label_set, cmd_modify, cmd_rm, cmd_show,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    let args: Vec<String> = env::args().collect();
    let cli = config::parse_args(args);

    if cli.help {
        output::print_help();
        return;
    }

    if cli.version {
        println!("task {}", VERSION);
        return;
    }

    if let Some(ref name) = cli.unknown_command {
        fail(&format!("unknown command: {}", name));
    }

    let command = match cli.command {
        Some(command) => command,
        None => {
            output::print_help();
            return;
        }
    };

    let config = match Config::load(&cli) {
        Ok(config) => config,
        Err(e) => fail(&e.to_string()),
    };

    let result = match command {
        Command::Add => cmd_add(&config, &cli),
        Command::Modify => cmd_modify(&config, &cli),
        Command::Rm => cmd_rm(&config, &cli),
        Command::Show => cmd_show(&config, &cli),
        Command::LabelAdd => cmd_label_add(&config, &cli),
        Command::LabelRm => cmd_label_rm(&config, &cli),
        Command::LabelSet => cmd_label_set(&config, &cli),
    };

    if let Err(e) = result {
        fail(&e);
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{}", color::error(&format!("error: {}", message)));
    process::exit(1);
}
