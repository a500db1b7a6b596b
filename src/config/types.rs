use std::path::Path;

use super::cli::CliArgs;
use super::{env, toml};

/// Config file consulted when `-c/--config` is not given.
const CONFIG_FILE: &str = "task.toml";

/// Tool configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to the tasks file.
    pub files_tasks: String,
    /// Minimum width of the description column in `show` output.
    pub display_min_desc_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            files_tasks: "tasks.txt".to_string(),
            // Matches the width of the "description" header itself.
            display_min_desc_width: 11,
        }
    }
}

impl Config {
    /// Load configuration from all sources with proper precedence.
    ///
    /// Precedence: CLI flags > env vars > config file > defaults.
    ///
    /// A config file named with `-c/--config` must load and parse; the
    /// default task.toml is optional, but must parse when present.
    pub fn load(cli_args: &CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(ref path) = cli_args.config {
            let file_config = Self::load_from_file(path)?;
            config.merge_from(&file_config);
        } else if Path::new(CONFIG_FILE).exists() {
            let file_config = Self::load_from_file(CONFIG_FILE)?;
            config.merge_from(&file_config);
        }

        // Apply environment variables
        config.apply_env();

        // Apply CLI args (highest precedence)
        config.apply_cli(cli_args);

        Ok(config)
    }

    /// Load configuration from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        toml::load_from_file(path)
    }

    /// Parse TOML content into configuration.
    pub(super) fn parse_toml(content: &str) -> Result<Self, ConfigError> {
        toml::parse_toml(content)
    }

    /// Apply environment variables.
    fn apply_env(&mut self) {
        env::apply_env(self);
    }

    /// Apply CLI arguments.
    pub(super) fn apply_cli(&mut self, args: &CliArgs) {
        if let Some(ref path) = args.file {
            self.files_tasks = path.clone();
        }
    }

    /// Merge values from another config (for file-based config).
    fn merge_from(&mut self, other: &Self) {
        self.files_tasks = other.files_tasks.clone();
        self.display_min_desc_width = other.display_min_desc_width;
    }
}

/// Configuration errors.
#[derive(Debug)]
pub enum ConfigError {
    /// I/O error reading config file.
    Io(String),
    /// Parse error in config file.
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "config I/O error: {}", msg),
            Self::Parse(msg) => write!(f, "config parse error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}
