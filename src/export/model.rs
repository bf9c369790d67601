// src/export/model.rs

use crate::config::Config;
use crate::core::calculator::display::two_decimals;
use crate::core::form::FormState;
use crate::core::form::schema::schema_for;
use crate::models::record::{FarmRecord, Record, RecordKind};
use serde::Serialize;
use std::collections::BTreeMap;

/// Flat table used by CSV and XLSX: one column per form field plus the
/// derived metrics of the kind.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// JSON shape: the full typed record next to its derived values.
#[derive(Serialize, Debug)]
pub(crate) struct JsonExport<'a> {
    pub record: &'a Record,
    pub derived: BTreeMap<&'static str, String>,
}

fn metric_columns(kind: RecordKind) -> &'static [&'static str] {
    match kind {
        RecordKind::Production => &["production_rate", "weight_gain_rate"],
        RecordKind::Inventory => &["stock", "total_value"],
        RecordKind::Feeding => &["cost_per_kg"],
        RecordKind::Breeding | RecordKind::Livestock | RecordKind::Health => &[],
    }
}

/// Derived values of a record, keyed by column name. Form-level derived
/// fields (gestation, expected birth date, profit) come from the form.
pub(crate) fn derived_values(record: &Record, cfg: &Config) -> BTreeMap<&'static str, String> {
    let ph = cfg.placeholder.as_str();
    let mut out = BTreeMap::new();

    let form = FormState::from_record(record);
    for spec in schema_for(record.kind()).iter().filter(|s| s.is_derived()) {
        out.insert(
            spec.key,
            form.value(spec.key).unwrap_or(ph).to_string(),
        );
    }

    match record {
        Record::Production(p) => {
            out.insert("production_rate", two_decimals(p.production_rate(), ph));
            out.insert("weight_gain_rate", two_decimals(p.weight_gain_rate(), ph));
        }
        Record::Inventory(i) => {
            out.insert("stock", i.stock_status().label().to_string());
            out.insert("total_value", two_decimals(i.total_value(), ph));
        }
        Record::Feeding(f) => {
            out.insert("cost_per_kg", two_decimals(f.cost_per_kg(), ph));
        }
        Record::Breeding(_) | Record::Livestock(_) | Record::Health(_) => {}
    }
    out
}

impl ExportTable {
    pub fn build(kind: RecordKind, records: &[Record], cfg: &Config) -> Self {
        let schema = schema_for(kind);

        let mut headers = vec!["id".to_string()];
        headers.extend(schema.iter().map(|s| s.key.to_string()));
        headers.extend(metric_columns(kind).iter().map(|s| s.to_string()));

        let rows = records
            .iter()
            .map(|r| {
                let form = FormState::from_record(r);
                let derived = derived_values(r, cfg);

                let mut row = vec![r.id().to_string()];
                for spec in schema {
                    let v = if spec.is_derived() {
                        derived.get(spec.key).cloned().unwrap_or_default()
                    } else {
                        form.value(spec.key).unwrap_or_default().to_string()
                    };
                    row.push(v);
                }
                for col in metric_columns(kind) {
                    row.push(derived.get(col).cloned().unwrap_or_default());
                }
                row
            })
            .collect();

        Self { headers, rows }
    }
}
