//! Raw field values as collected by a form, keyed by field key.

use crate::core::calculator::numeric::parse_numeric;
use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_date;
use chrono::NaiveDate;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues(BTreeMap<String, String>);

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trimmed value, `None` when missing or blank.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn remove(&mut self, key: &str) {
        self.0.remove(key);
    }

    pub fn text(&self, key: &str) -> String {
        self.get(key).unwrap_or_default().to_string()
    }

    pub fn date(&self, key: &str) -> AppResult<NaiveDate> {
        self.opt_date(key)?
            .ok_or_else(|| AppError::InvalidField(format!("{key} is required")))
    }

    pub fn opt_date(&self, key: &str) -> AppResult<Option<NaiveDate>> {
        match self.get(key) {
            None => Ok(None),
            Some(s) => parse_date(s)
                .map(Some)
                .ok_or_else(|| AppError::InvalidDate(format!("{key}: {s}"))),
        }
    }

    pub fn number(&self, key: &str) -> AppResult<f64> {
        self.opt_number(key)?
            .ok_or_else(|| AppError::InvalidField(format!("{key} is required")))
    }

    pub fn opt_number(&self, key: &str) -> AppResult<Option<f64>> {
        match self.get(key) {
            None => Ok(None),
            Some(s) => parse_numeric(s)
                .map(Some)
                .ok_or_else(|| AppError::InvalidNumber(format!("{key}: {s}"))),
        }
    }

    pub fn count(&self, key: &str) -> AppResult<Option<u32>> {
        match self.opt_number(key)? {
            None => Ok(None),
            Some(n) if n >= 0.0 && n.fract() == 0.0 => Ok(Some(n as u32)),
            Some(n) => Err(AppError::InvalidNumber(format!(
                "{key}: {n} is not a whole count"
            ))),
        }
    }

    pub fn choice<T>(&self, key: &str, parse: fn(&str) -> Option<T>) -> AppResult<T> {
        self.opt_choice(key, parse)?
            .ok_or_else(|| AppError::InvalidField(format!("{key} is required")))
    }

    pub fn opt_choice<T>(&self, key: &str, parse: fn(&str) -> Option<T>) -> AppResult<Option<T>> {
        match self.get(key) {
            None => Ok(None),
            Some(s) => parse(s).map(Some).ok_or_else(|| AppError::InvalidChoice {
                field: key.to_string(),
                value: s.to_string(),
            }),
        }
    }

    /// Items of a multi-select field (comma separated).
    pub fn list(&self, key: &str) -> Vec<String> {
        self.get(key)
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|v| !v.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    // -----------------------------
    // Writers used by `to_fields`
    // -----------------------------

    pub fn put_date(&mut self, key: &str, value: Option<NaiveDate>) {
        if let Some(d) = value {
            self.set(key, d.format("%Y-%m-%d").to_string());
        }
    }

    pub fn put_number(&mut self, key: &str, value: Option<f64>) {
        if let Some(n) = value {
            self.set(key, n.to_string());
        }
    }

    pub fn put_text(&mut self, key: &str, value: &str) {
        if !value.trim().is_empty() {
            self.set(key, value);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
