use std::fs;
use std::path::Path;

use super::types::{Config, ConfigError};

pub(super) fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(&path).map_err(|e| ConfigError::Io(e.to_string()))?;
    Config::parse_toml(&content)
}

pub(super) fn parse_toml(content: &str) -> Result<Config, ConfigError> {
    let mut config = Config::default();
    let mut current_section = String::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Handle section headers like [files]
        if line.starts_with('[') && line.ends_with(']') {
            current_section = line[1..line.len() - 1].to_string();
            continue;
        }

        if let Some((key, value)) = parse_toml_line(line) {
            // Build full key with section prefix
            let full_key = if current_section.is_empty() {
                key.to_string()
            } else {
                format!("{}.{}", current_section, key)
            };

            match full_key.as_str() {
                "files.tasks" => {
                    config.files_tasks = value.trim_matches('"').to_string();
                }
                "display.min_desc_width" => {
                    config.display_min_desc_width = value.parse().map_err(|_| {
                        ConfigError::Parse(format!("invalid display.min_desc_width: {}", value))
                    })?;
                }
                _ => {} // Ignore unknown keys
            }
        }
    }

    Ok(config)
}

/// Parse a TOML line into a key-value pair.
fn parse_toml_line(line: &str) -> Option<(&str, &str)> {
    let parts: Vec<&str> = line.splitn(2, '=').collect();
    if parts.len() != 2 {
        return None;
    }
    Some((parts[0].trim(), parts[1].trim()))
}
