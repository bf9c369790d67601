//! `list` command: load one kind, run the query, print a table.

use crate::config::Config;
use crate::core::query::{MemoizedView, RecordQuery};
use crate::core::store::RecordStore;
use crate::db::pool::DbPool;
use crate::db::queries::{load_records, load_records_in_range};
use crate::errors::AppResult;
use crate::models::record::{FarmRecord, Record, RecordKind};
use crate::ui::messages::{info, warning};
use crate::utils::colors::{RESET, color_for_status};
use crate::utils::date::parse_range;
use crate::utils::formatting::truncate;
use crate::utils::table::Table;

const SUBJECT_WIDTH: usize = 40;

pub struct ListLogic;

impl ListLogic {
    /// Records of `kind` in view order. `period` narrows the load to a
    /// date range before the query runs.
    pub fn collect(
        pool: &DbPool,
        kind: RecordKind,
        query: &RecordQuery,
        period: Option<&str>,
    ) -> AppResult<Vec<Record>> {
        query.filters.validate(kind)?;

        let records = match period {
            Some(p) if !p.eq_ignore_ascii_case("all") => {
                let (start, end) = parse_range(p)?;
                load_records_in_range(pool, kind, start, end)?
            }
            _ => load_records(pool, kind)?,
        };

        let store = RecordStore::from_records(records)?;
        let mut view = MemoizedView::new();
        Ok(view.view(&store, query).into_iter().cloned().collect())
    }

    pub fn print(
        pool: &DbPool,
        cfg: &Config,
        kind: RecordKind,
        query: &RecordQuery,
        period: Option<&str>,
    ) -> AppResult<usize> {
        let records = Self::collect(pool, kind, query, period)?;

        if records.is_empty() {
            warning(format!("No {kind} records match."));
            return Ok(0);
        }

        let mut headers = vec!["ID", "Date", "Subject"];
        headers.extend(kind.dimensions());
        let mut table = Table::new(headers);

        for r in &records {
            table.add_row(list_row(r, kind, cfg));
        }

        print!("{}", table.render(&cfg.separator_char));
        info(format!("{} {} record(s)", records.len(), kind));
        Ok(records.len())
    }
}

fn list_row(record: &Record, kind: RecordKind, cfg: &Config) -> Vec<String> {
    let subject = record
        .search_fields()
        .into_iter()
        .skip(1)
        .filter(|f| !f.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" · ");

    let mut row = vec![
        record.id().to_string(),
        record.date_str(),
        truncate(&subject, SUBJECT_WIDTH),
    ];

    for dim in kind.dimensions() {
        let value = record
            .dimension(dim)
            .unwrap_or_else(|| cfg.placeholder.clone());
        if matches!(*dim, "status" | "stock") {
            row.push(format!("{}{}{}", color_for_status(&value), value, RESET));
        } else {
            row.push(value);
        }
    }
    row
}
