use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::show::ShowLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id, tab } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        ShowLogic::show(&pool, cfg, id, *tab)?;
    }
    Ok(())
}
