/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Grey out placeholder values ("--" or empty).
pub fn colorize_placeholder(value: &str, placeholder: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == placeholder {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Color of a status label in list output.
pub fn color_for_status(status: &str) -> &'static str {
    match status.to_lowercase().as_str() {
        "pregnant" | "scheduled" | "low" => YELLOW,
        "delivered" | "completed" | "active" | "in stock" => GREEN,
        "failed" | "aborted" | "deceased" | "out" => RED,
        "sold" => MAGENTA,
        _ => RESET,
    }
}
