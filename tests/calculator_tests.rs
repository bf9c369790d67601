use chrono::NaiveDate;
use rfarmlog::config::Config;
use rfarmlog::core::calc::CalcLogic;
use rfarmlog::core::calculator::display::{PLACEHOLDER, money, two_decimals, with_unit};
use rfarmlog::core::calculator::gestation::{expected_birth_date, gestation_days};
use rfarmlog::core::calculator::numeric::{parse_numeric, sanitize_numeric};
use rfarmlog::core::calculator::profit::profit;
use rfarmlog::core::calculator::rates::{production_rate, weight_gain_rate};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn gestation_lengths_per_species() {
    assert_eq!(gestation_days("Dairy Cow"), Some(280));
    assert_eq!(gestation_days("Goat"), Some(150));
    assert_eq!(gestation_days("Swine"), Some(114));
    assert_eq!(gestation_days("Sheep"), Some(152));
    assert_eq!(gestation_days("cow"), Some(280));
    assert_eq!(gestation_days("Llama"), None);
    assert_eq!(gestation_days(""), None);
}

#[test]
fn expected_birth_date_is_service_plus_gestation() {
    assert_eq!(expected_birth_date(d("2023-12-20"), 280), Some(d("2024-09-25")));
    assert_eq!(expected_birth_date(d("2024-03-01"), 150), Some(d("2024-07-29")));
    assert_eq!(expected_birth_date(d("2024-01-10"), 114), Some(d("2024-05-03")));
    assert_eq!(expected_birth_date(d("2024-09-01"), 152), Some(d("2025-01-31")));
}

#[test]
fn profit_needs_both_prices() {
    assert_eq!(two_decimals(profit(Some(1800.0), Some(1750.0)), PLACEHOLDER), "50.00");
    assert_eq!(two_decimals(profit(Some(1700.0), Some(1750.0)), PLACEHOLDER), "-50.00");
    assert_eq!(two_decimals(profit(None, Some(1750.0)), PLACEHOLDER), "--");
    assert_eq!(two_decimals(profit(Some(1800.0), None), PLACEHOLDER), "--");
}

#[test]
fn production_rate_per_head() {
    assert_eq!(production_rate(Some(300.0), Some(12)), Some(25.0));
    assert_eq!(production_rate(Some(300.0), Some(0)), None);
    assert_eq!(production_rate(None, Some(12)), None);
    assert_eq!(production_rate(Some(300.0), None), None);
}

#[test]
fn weight_gain_rate_over_days_to_sale() {
    let rate = weight_gain_rate(Some(60.0), d("2024-01-01"), Some(d("2024-03-01")));
    assert_eq!(with_unit(rate, "kg/day", PLACEHOLDER), "1.00 kg/day");

    // same day or sale before the record date: undefined
    assert_eq!(weight_gain_rate(Some(60.0), d("2024-03-01"), Some(d("2024-03-01"))), None);
    assert_eq!(weight_gain_rate(Some(60.0), d("2024-03-01"), Some(d("2024-02-01"))), None);
    assert_eq!(weight_gain_rate(Some(60.0), d("2024-03-01"), None), None);
    assert_eq!(weight_gain_rate(None, d("2024-01-01"), Some(d("2024-03-01"))), None);
}

#[test]
fn money_uses_currency_prefix() {
    assert_eq!(money(Some(12.5), "€", "--"), "€ 12.50");
    assert_eq!(money(Some(12.5), "", "--"), "12.50");
    assert_eq!(money(None, "€", "n/a"), "n/a");
}

#[test]
fn numeric_input_is_sanitized() {
    assert_eq!(sanitize_numeric("1,800.50 €"), "1800.50");
    assert_eq!(sanitize_numeric("abc"), "");
    assert_eq!(sanitize_numeric("-12kg"), "-12");
    assert_eq!(sanitize_numeric("1.2.3"), "1.23");
    assert_eq!(parse_numeric(" 42 "), Some(42.0));
    assert_eq!(parse_numeric("-"), None);
    assert_eq!(parse_numeric(""), None);
}

#[test]
fn calc_logic_rows() {
    let cfg = Config::default();

    let rows = CalcLogic::gestation("sheep", "2024-09-01", &cfg).unwrap();
    assert!(rows.contains(&("Gestation (days)", "152".to_string())));
    assert!(rows.contains(&("Expected birth date", "2025-01-31".to_string())));

    assert!(CalcLogic::gestation("llama", "2024-09-01", &cfg).is_err());
    assert!(CalcLogic::gestation("goat", "not-a-date", &cfg).is_err());

    let rows = CalcLogic::profit(Some("1,800"), Some("1750"), &cfg).unwrap();
    assert_eq!(rows[0].1, "50.00");

    let rows = CalcLogic::profit(Some("1800"), None, &cfg).unwrap();
    assert_eq!(rows[0].1, "--");

    let rows = CalcLogic::production(Some("300"), Some(0), &cfg).unwrap();
    assert_eq!(rows[0].1, "--");
}
