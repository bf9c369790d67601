use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    {
        if !(*migrate || *check || *vacuum || *show_info) {
            warning("Nothing to do: use --migrate, --check, --vacuum or --info.");
            return Ok(());
        }

        let pool = DbPool::new(&cfg.database)?;

        if *migrate {
            // Opening the pool already applied anything pending.
            let applied = run_pending_migrations(&pool.conn)?;
            success(format!("Schema is up to date ({applied} newly applied)."));
        }

        if *show_info {
            stats::print_db_info(&pool, &cfg.database)?;
        }

        if *check {
            run_check(&pool)?;
        }

        if *vacuum {
            info("Running VACUUM…");
            pool.conn.execute_batch("VACUUM;")?;
            success("Vacuum completed.");
        }
    }

    Ok(())
}

fn run_check(pool: &DbPool) -> AppResult<()> {
    info("Running integrity check…");

    let integrity: String = pool
        .conn
        .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;
    if integrity == "ok" {
        success("Integrity check passed.");
    } else {
        error(format!("Integrity check failed: {integrity}"));
    }

    let bad = stats::unreadable_records(pool)?;
    if bad.is_empty() {
        success("All records decode.");
    } else {
        error(format!(
            "{} record(s) cannot be read: {}",
            bad.len(),
            bad.join(", ")
        ));
    }
    Ok(())
}
