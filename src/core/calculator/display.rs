//! Presentation helpers for derived values.

pub const PLACEHOLDER: &str = "--";

/// Two-decimal rendering, `placeholder` when the value is missing.
pub fn two_decimals(value: Option<f64>, placeholder: &str) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.2}", v),
        _ => placeholder.to_string(),
    }
}

/// Two decimals with an optional currency symbol prefix.
pub fn money(value: Option<f64>, currency: &str, placeholder: &str) -> String {
    match value {
        Some(v) if v.is_finite() && !currency.is_empty() => format!("{currency} {:.2}", v),
        _ => two_decimals(value, placeholder),
    }
}

/// Value followed by a unit, or the bare placeholder.
pub fn with_unit(value: Option<f64>, unit: &str, placeholder: &str) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.2} {}", v, unit),
        _ => placeholder.to_string(),
    }
}
