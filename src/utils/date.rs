use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (ny, nm) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(ny, nm, 1)?.pred_opt()
}

/// First and last day covered by `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
pub fn period_bounds(p: &str) -> Option<(NaiveDate, NaiveDate)> {
    let p = p.trim();

    // YYYY-MM-DD
    if let Some(d) = parse_date(p) {
        return Some((d, d));
    }

    // YYYY-MM
    if p.len() == 7
        && let Ok(first) = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d")
    {
        return Some((first, last_day_of_month(first.year(), first.month())?));
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
    {
        return Some((
            NaiveDate::from_ymd_opt(year, 1, 1)?,
            NaiveDate::from_ymd_opt(year, 12, 31)?,
        ));
    }

    None
}

/// Parse a period or a `start:end` range of periods into inclusive bounds.
///
/// Supported: `YYYY`, `YYYY-MM`, `YYYY-MM-DD` and ranges such as
/// `2024:2025`, `2025-06:2025-08`, `2025-06-01:2025-06-10`.
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidDate(format!("invalid period or range: {r}"));

    let (start, end) = match r.split_once(':') {
        Some((s, e)) => {
            if s.trim().len() != e.trim().len() {
                return Err(AppError::InvalidDate(
                    "start and end of a range must have the same format".into(),
                ));
            }
            let (start, _) = period_bounds(s).ok_or_else(invalid)?;
            let (_, end) = period_bounds(e).ok_or_else(invalid)?;
            (start, end)
        }
        None => period_bounds(r).ok_or_else(invalid)?,
    };

    if start > end {
        return Err(AppError::InvalidDate(format!(
            "range start {start} is after end {end}"
        )));
    }
    Ok((start, end))
}
