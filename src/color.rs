//! Terminal color utilities using ANSI escape codes.
//!
//! Provides colored output for status messages and errors.

/// ANSI color codes
pub mod codes {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
}

use codes::*;

/// Color success messages (green).
pub fn success(text: &str) -> String {
    format!("{}{}{}", GREEN, text, RESET)
}

/// Color error messages (red).
pub fn error(text: &str) -> String {
    format!("{}{}{}", RED, text, RESET)
}

/// Color warning messages (yellow).
pub fn warning(text: &str) -> String {
    format!("{}{}{}", YELLOW, text, RESET)
}

/// Color info messages (cyan).
pub fn info(text: &str) -> String {
    format!("{}{}{}", CYAN, text, RESET)
}

/// Color a label token (bold).
pub fn label(text: &str) -> String {
    format!("{}{}{}", BOLD, text, RESET)
}
