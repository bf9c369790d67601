//! Tabbed detail view of a single record.
//!
//! Rendering is a pure switch on the selected tab: it returns labelled
//! rows and leaves printing to the caller.

use crate::config::Config;
use crate::core::calculator::display::{money, two_decimals, with_unit};
use crate::core::form::FormState;
use crate::core::form::schema::Visibility;
use crate::errors::{AppError, AppResult};
use crate::models::breeding::BreedingStatus;
use crate::models::record::{FarmRecord, Record};
use chrono::NaiveDate;
use clap::ValueEnum;

const NOTES_WIDTH: usize = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DetailTab {
    #[default]
    Overview,
    Metrics,
    Birth,
    Notes,
}

impl DetailTab {
    pub fn label(&self) -> &'static str {
        match self {
            DetailTab::Overview => "Overview",
            DetailTab::Metrics => "Metrics",
            DetailTab::Birth => "Birth",
            DetailTab::Notes => "Notes",
        }
    }
}

pub type DetailRows = Vec<(String, String)>;

pub fn available_tabs(record: &Record) -> Vec<DetailTab> {
    let mut tabs = vec![DetailTab::Overview];
    match record {
        Record::Breeding(b) => {
            tabs.push(DetailTab::Metrics);
            if b.status == BreedingStatus::Delivered {
                tabs.push(DetailTab::Birth);
            }
        }
        Record::Production(_) | Record::Inventory(_) | Record::Feeding(_) => {
            tabs.push(DetailTab::Metrics)
        }
        Record::Livestock(_) | Record::Health(_) => {}
    }
    tabs.push(DetailTab::Notes);
    tabs
}

pub fn render_tab(
    record: &Record,
    tab: DetailTab,
    cfg: &Config,
    today: NaiveDate,
) -> AppResult<DetailRows> {
    if !available_tabs(record).contains(&tab) {
        return Err(AppError::TabUnavailable(tab.label().to_string()));
    }

    Ok(match tab {
        DetailTab::Overview => overview(record, cfg),
        DetailTab::Metrics => metrics(record, cfg, today),
        DetailTab::Birth => birth(record, cfg),
        DetailTab::Notes => notes(record, cfg),
    })
}

fn row(label: &str, value: impl Into<String>) -> (String, String) {
    (label.to_string(), value.into())
}

/// Every unconditional, entered field of the form, in schema order.
fn overview(record: &Record, cfg: &Config) -> DetailRows {
    let form = FormState::from_record(record);
    let mut rows = vec![row("ID", record.id())];

    for spec in form.schema() {
        if spec.is_derived() || spec.key == "notes" || spec.visible != Visibility::Always {
            continue;
        }
        let value = form.value(spec.key).unwrap_or(cfg.placeholder.as_str());
        rows.push(row(spec.label, value));
    }
    rows
}

fn metrics(record: &Record, cfg: &Config, today: NaiveDate) -> DetailRows {
    let ph = cfg.placeholder.as_str();

    match record {
        Record::Breeding(b) => {
            let due = b.expected_birth_date();
            let days_left = match b.status {
                BreedingStatus::Served | BreedingStatus::Pregnant => b
                    .days_to_due(today)
                    .map(|d| d.to_string())
                    .unwrap_or_else(|| ph.to_string()),
                _ => ph.to_string(),
            };
            vec![
                row("Gestation (days)", b.gestation_days().to_string()),
                row(
                    "Expected birth date",
                    due.map(|d| d.format("%Y-%m-%d").to_string())
                        .unwrap_or_else(|| ph.to_string()),
                ),
                row("Days to due date", days_left),
            ]
        }
        Record::Production(p) => vec![
            row("Profit", money(p.profit(), &cfg.currency, ph)),
            row(
                "Production rate",
                with_unit(p.production_rate(), &format!("{}/head", p.unit), ph),
            ),
            row(
                "Weight gain rate",
                with_unit(p.weight_gain_rate(), "kg/day", ph),
            ),
        ],
        Record::Inventory(i) => vec![
            row("Stock", i.stock_status().label()),
            row("Total value", money(i.total_value(), &cfg.currency, ph)),
        ],
        Record::Feeding(f) => vec![
            row("Cost per kg", money(f.cost_per_kg(), &cfg.currency, ph)),
            row("Quantity (kg)", two_decimals(Some(f.quantity_kg), ph)),
        ],
        Record::Livestock(_) | Record::Health(_) => Vec::new(),
    }
}

fn birth(record: &Record, cfg: &Config) -> DetailRows {
    let Record::Breeding(b) = record else {
        return Vec::new();
    };
    let Some(details) = &b.birth else {
        return Vec::new();
    };

    let mut rows = vec![
        row("Birth date", details.birth_date.format("%Y-%m-%d").to_string()),
        row("Offspring", details.offspring_count.to_string()),
        row("Live births", details.live_births.to_string()),
    ];
    if let Some(expected) = b.expected_birth_date() {
        let delta = (details.birth_date - expected).num_days();
        rows.push(row("Days from expected", format!("{:+}", delta)));
    }
    if details.notes.is_empty() {
        rows.push(row("Birth notes", cfg.placeholder.clone()));
    } else {
        rows.extend(wrapped("Birth notes", &details.notes));
    }
    rows
}

fn notes(record: &Record, cfg: &Config) -> DetailRows {
    if record.notes().trim().is_empty() {
        return vec![row("Notes", cfg.placeholder.clone())];
    }
    wrapped("Notes", record.notes())
}

/// One row per wrapped line; only the first carries the label.
fn wrapped(label: &str, text: &str) -> DetailRows {
    textwrap::wrap(text, NOTES_WIDTH)
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let l = if i == 0 { label } else { "" };
            row(l, line.into_owned())
        })
        .collect()
}
