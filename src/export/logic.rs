// src/export/logic.rs

use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{load_records, load_records_in_range};
use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::prepare_output;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::ExportTable;
use crate::export::xlsx::export_xlsx;
use crate::models::record::RecordKind;
use crate::ui::messages::warning;
use crate::utils::date::parse_range;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export every record of `kind`.
    ///
    /// `range` is `None`, `"all"` or a period/range understood by
    /// `utils::date::parse_range` (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`,
    /// `start:end`). Returns the number of exported records.
    pub fn export(
        pool: &DbPool,
        cfg: &Config,
        kind: RecordKind,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let bounds = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        let records = match bounds {
            Some((start, end)) => load_records_in_range(pool, kind, start, end)?,
            None => load_records(pool, kind)?,
        };

        if records.is_empty() {
            warning(format!("No {kind} records found for the selected range."));
            return Ok(0);
        }

        let path = prepare_output(file, force)?;

        match format {
            ExportFormat::Json => export_json(&records, cfg, &path)?,
            ExportFormat::Csv => export_csv(&ExportTable::build(kind, &records, cfg), &path)?,
            ExportFormat::Xlsx => export_xlsx(
                &ExportTable::build(kind, &records, cfg),
                kind.to_db_str(),
                &path,
            )?,
        }

        audit(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!(
                "Exported {} {} record(s) as {}",
                records.len(),
                kind,
                format.as_str()
            ),
        );

        Ok(records.len())
    }
}
