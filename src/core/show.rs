use crate::config::Config;
use crate::core::detail::{DetailTab, available_tabs, render_tab};
use crate::db::pool::DbPool;
use crate::db::queries::require_record;
use crate::errors::AppResult;
use crate::models::record::{FarmRecord, Record};
use crate::ui::messages::header;
use crate::utils::colors::{BOLD, CYAN, GREY, RESET, colorize_placeholder};
use crate::utils::date::today;
use crate::utils::formatting::pad_right;

pub struct ShowLogic;

impl ShowLogic {
    pub fn show(pool: &DbPool, cfg: &Config, id: &str, tab: DetailTab) -> AppResult<Record> {
        let record = require_record(pool, id)?;
        let rows = render_tab(&record, tab, cfg, today())?;

        header(
            format!("{} · {}", record.id(), record.kind()),
            &cfg.separator_char,
        );
        println!("{}\n", tab_bar(&record, tab));

        let label_w = rows.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
        for (label, value) in rows {
            println!(
                "{}{}{}  {}",
                CYAN,
                pad_right(&label, label_w),
                RESET,
                colorize_placeholder(&value, &cfg.placeholder)
            );
        }
        println!();

        Ok(record)
    }
}

/// Available tabs in order, the active one highlighted.
fn tab_bar(record: &Record, active: DetailTab) -> String {
    available_tabs(record)
        .into_iter()
        .map(|t| {
            if t == active {
                format!("{BOLD}[{}]{RESET}", t.label())
            } else {
                format!("{GREY} {} {RESET}", t.label())
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
