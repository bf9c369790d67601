//! Numeric input handling: forms strip non-numeric characters while the
//! user types instead of rejecting the input.

use regex::Regex;
use std::sync::LazyLock;

static NON_NUMERIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9.]").unwrap());

/// Keep digits, a single decimal point and a leading minus sign.
pub fn sanitize_numeric(input: &str) -> String {
    let trimmed = input.trim();
    let negative = trimmed.starts_with('-');
    let digits = NON_NUMERIC.replace_all(trimmed, "");

    let mut out = String::with_capacity(digits.len() + 1);
    if negative {
        out.push('-');
    }

    let mut seen_dot = false;
    for c in digits.chars() {
        if c == '.' {
            if seen_dot {
                continue;
            }
            seen_dot = true;
        }
        out.push(c);
    }
    out
}

/// Sanitize then parse. Empty or unparsable input → `None`.
pub fn parse_numeric(input: &str) -> Option<f64> {
    let clean = sanitize_numeric(input);
    if clean.is_empty() || clean == "-" || clean == "." || clean == "-." {
        return None;
    }
    clean.parse::<f64>().ok().filter(|v| v.is_finite())
}
