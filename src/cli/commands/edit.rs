use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { id, fields } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        EditLogic::apply(&mut pool, id, fields)?;
    }

    Ok(())
}
