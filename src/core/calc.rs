//! Stand-alone calculators behind the `calc` command. Each returns labelled
//! rows; inputs go through the same numeric sanitizing as form fields.

use crate::config::Config;
use crate::core::calculator::display::{money, two_decimals, with_unit};
use crate::core::calculator::numeric::parse_numeric;
use crate::core::calculator::{gestation, profit, rates};
use crate::errors::{AppError, AppResult};
use crate::models::species::Species;
use crate::utils::date::parse_date;
use chrono::NaiveDate;

pub type CalcRows = Vec<(&'static str, String)>;

fn required_date(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

fn optional_number(s: Option<&str>) -> AppResult<Option<f64>> {
    match s {
        None => Ok(None),
        Some(raw) => parse_numeric(raw)
            .map(Some)
            .ok_or_else(|| AppError::InvalidNumber(raw.to_string())),
    }
}

pub struct CalcLogic;

impl CalcLogic {
    pub fn gestation(species: &str, service_date: &str, cfg: &Config) -> AppResult<CalcRows> {
        let days = gestation::gestation_days(species).ok_or_else(|| AppError::InvalidChoice {
            field: "species".into(),
            value: species.to_string(),
        })?;
        let service = required_date(service_date)?;
        let due = gestation::expected_birth_date(service, days);

        let label = Species::parse(species)
            .map(|s| s.label())
            .unwrap_or_default();

        Ok(vec![
            ("Species", label.to_string()),
            ("Gestation (days)", days.to_string()),
            (
                "Expected birth date",
                due.map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| cfg.placeholder.clone()),
            ),
        ])
    }

    pub fn profit(sale: Option<&str>, market: Option<&str>, cfg: &Config) -> AppResult<CalcRows> {
        let value = profit::profit(optional_number(sale)?, optional_number(market)?);
        Ok(vec![(
            "Profit",
            money(value, &cfg.currency, &cfg.placeholder),
        )])
    }

    pub fn weight_gain(
        gain: Option<&str>,
        from: &str,
        sale_date: Option<&str>,
        cfg: &Config,
    ) -> AppResult<CalcRows> {
        let from = required_date(from)?;
        let sale = sale_date.map(required_date).transpose()?;
        let rate = rates::weight_gain_rate(optional_number(gain)?, from, sale);

        let days = sale.map(|s| (s - from).num_days());
        Ok(vec![
            (
                "Days",
                days.map(|d| d.to_string())
                    .unwrap_or_else(|| cfg.placeholder.clone()),
            ),
            ("Weight gain rate", with_unit(rate, "kg/day", &cfg.placeholder)),
        ])
    }

    pub fn production(
        quantity: Option<&str>,
        head_count: Option<u32>,
        cfg: &Config,
    ) -> AppResult<CalcRows> {
        let rate = rates::production_rate(optional_number(quantity)?, head_count);
        Ok(vec![(
            "Production rate",
            two_decimals(rate, &cfg.placeholder),
        )])
    }
}
