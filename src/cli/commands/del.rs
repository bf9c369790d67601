use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::db::queries::require_record;
use crate::errors::AppResult;
use crate::models::record::FarmRecord;
use crate::ui::messages::{info, success};
use crate::ui::prompt::confirm;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;

        // Fail on unknown ids before asking anything.
        let record = require_record(&pool, id)?;

        if !*yes {
            let prompt = format!(
                "Delete {} record {} dated {}? This action is irreversible.",
                record.kind(),
                record.id(),
                record.date_str()
            );
            if !confirm(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let removed = DeleteLogic::apply(&mut pool, id)?;
        success(format!("Record {} has been deleted.", removed.id()));
    }

    Ok(())
}
