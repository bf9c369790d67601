use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Add a record of the given kind.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { kind, id, fields } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        AddLogic::apply(&mut pool, *kind, id.as_deref(), fields)?;
    }

    Ok(())
}
