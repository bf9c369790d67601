// src/export/json_csv.rs

use crate::config::Config;
use crate::errors::AppResult;
use crate::export::model::{JsonExport, derived_values};
use crate::export::{ExportTable, notify_export_success};
use crate::models::record::Record;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(records: &[Record], cfg: &Config, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let items: Vec<JsonExport> = records
        .iter()
        .map(|r| JsonExport {
            record: r,
            derived: derived_values(r, cfg),
        })
        .collect();

    let json_data = serde_json::to_string_pretty(&items)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV with a header row.
pub(crate) fn export_csv(table: &ExportTable, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(&table.headers)?;
    for row in &table.rows {
        wtr.write_record(row)?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
