use crate::models::species::Species;
use chrono::{Days, NaiveDate};

/// Gestation length for a species given as free text. Unknown → `None`.
pub fn gestation_days(species: &str) -> Option<u32> {
    Species::parse(species).map(|s| s.gestation_days())
}

/// Service date plus gestation length, in calendar days.
pub fn expected_birth_date(service_date: NaiveDate, days: u32) -> Option<NaiveDate> {
    service_date.checked_add_days(Days::new(days as u64))
}
