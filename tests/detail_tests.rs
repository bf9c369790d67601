use chrono::NaiveDate;
use rfarmlog::config::Config;
use rfarmlog::core::detail::{DetailTab, available_tabs, render_tab};
use rfarmlog::errors::AppError;
use rfarmlog::models::{Record, RecordKind};

mod common;
use common::{animal, record};

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn value<'a>(rows: &'a [(String, String)], label: &str) -> Option<&'a str> {
    rows.iter()
        .find(|(l, _)| l == label)
        .map(|(_, v)| v.as_str())
}

fn cow_breeding(status: &str, extra: &[(&str, &str)]) -> Record {
    let mut fields = vec![
        ("animal_id", "A001"),
        ("species", "Dairy Cow"),
        ("method", "Artificial"),
        ("service_date", "2023-12-20"),
        ("status", status),
        ("notes", "Second lactation. Vet confirmed pregnancy by ultrasound at day 45, no complications noted so far."),
    ];
    fields.extend_from_slice(extra);
    record(RecordKind::Breeding, "BR-0001", &fields)
}

#[test]
fn tabs_depend_on_kind_and_status() {
    let a = animal("A001", "Bella", "Dairy Cow", "Female", "2021-03-14");
    assert_eq!(available_tabs(&a), vec![DetailTab::Overview, DetailTab::Notes]);

    let pregnant = cow_breeding("Pregnant", &[]);
    assert_eq!(
        available_tabs(&pregnant),
        vec![DetailTab::Overview, DetailTab::Metrics, DetailTab::Notes]
    );

    let delivered = cow_breeding(
        "Delivered",
        &[("birth_date", "2024-09-28"), ("offspring_count", "1")],
    );
    assert!(available_tabs(&delivered).contains(&DetailTab::Birth));
}

#[test]
fn unavailable_tab_is_an_error() {
    let cfg = Config::default();
    let a = animal("A001", "Bella", "Dairy Cow", "Female", "2021-03-14");
    let err = render_tab(&a, DetailTab::Metrics, &cfg, d("2024-01-01")).unwrap_err();
    assert!(matches!(err, AppError::TabUnavailable(_)));
}

#[test]
fn overview_lists_entered_fields_with_placeholders() {
    let cfg = Config::default();
    let a = animal("A001", "Bella", "Dairy Cow", "Female", "2021-03-14");
    let rows = render_tab(&a, DetailTab::Overview, &cfg, d("2024-01-01")).unwrap();

    assert_eq!(value(&rows, "ID"), Some("A001"));
    assert_eq!(value(&rows, "Name"), Some("Bella"));
    assert_eq!(value(&rows, "Species"), Some("Dairy Cow"));
    assert_eq!(value(&rows, "Breed"), Some("--"));
    assert_eq!(value(&rows, "Notes"), None);
}

#[test]
fn breeding_metrics_show_due_date_and_countdown() {
    let cfg = Config::default();
    let rec = cow_breeding("Pregnant", &[]);
    let rows = render_tab(&rec, DetailTab::Metrics, &cfg, d("2024-09-15")).unwrap();

    assert_eq!(value(&rows, "Gestation (days)"), Some("280"));
    assert_eq!(value(&rows, "Expected birth date"), Some("2024-09-25"));
    assert_eq!(value(&rows, "Days to due date"), Some("10"));
}

#[test]
fn birth_tab_compares_with_expected_date() {
    let cfg = Config::default();
    let rec = cow_breeding(
        "Delivered",
        &[
            ("birth_date", "2024-09-28"),
            ("offspring_count", "2"),
            ("live_births", "1"),
        ],
    );
    let rows = render_tab(&rec, DetailTab::Birth, &cfg, d("2024-10-01")).unwrap();

    assert_eq!(value(&rows, "Offspring"), Some("2"));
    assert_eq!(value(&rows, "Live births"), Some("1"));
    assert_eq!(value(&rows, "Days from expected"), Some("+3"));
    assert_eq!(value(&rows, "Birth notes"), Some("--"));

    let metrics = render_tab(&rec, DetailTab::Metrics, &cfg, d("2024-10-01")).unwrap();
    assert_eq!(value(&metrics, "Days to due date"), Some("--"));
}

#[test]
fn production_metrics_use_placeholder_when_undefined() {
    let mut cfg = Config::default();
    cfg.placeholder = "n/a".into();

    let rec = record(
        RecordKind::Production,
        "PR-0001",
        &[
            ("animal_id", "Herd 1"),
            ("date", "2024-05-01"),
            ("product", "Milk"),
            ("quantity", "300"),
            ("head_count", "12"),
            ("sale_price", "1800"),
            ("market_price", "1750"),
        ],
    );
    let rows = render_tab(&rec, DetailTab::Metrics, &cfg, d("2024-05-02")).unwrap();

    assert_eq!(value(&rows, "Profit"), Some("50.00"));
    assert_eq!(value(&rows, "Production rate"), Some("25.00 l/head"));
    assert_eq!(value(&rows, "Weight gain rate"), Some("n/a"));
}

#[test]
fn notes_are_wrapped() {
    let cfg = Config::default();
    let rec = cow_breeding("Pregnant", &[]);
    let rows = render_tab(&rec, DetailTab::Notes, &cfg, d("2024-01-01")).unwrap();

    assert!(rows.len() > 1);
    assert_eq!(rows[0].0, "Notes");
    assert!(rows[1..].iter().all(|(l, _)| l.is_empty()));
    assert!(rows.iter().all(|(_, v)| v.chars().count() <= 60));

    let a = animal("A001", "Bella", "Dairy Cow", "Female", "2021-03-14");
    let rows = render_tab(&a, DetailTab::Notes, &cfg, d("2024-01-01")).unwrap();
    assert_eq!(rows, vec![("Notes".to_string(), "--".to_string())]);
}
