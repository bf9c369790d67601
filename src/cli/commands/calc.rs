use crate::cli::parser::{CalcCommand, Commands};
use crate::config::Config;
use crate::core::calc::CalcLogic;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, RESET, colorize_placeholder};
use crate::utils::formatting::pad_right;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calc { calc } = cmd {
        let rows = match calc {
            CalcCommand::Gestation {
                species,
                service_date,
            } => CalcLogic::gestation(species, service_date, cfg)?,
            CalcCommand::Profit { sale, market } => {
                CalcLogic::profit(sale.as_deref(), market.as_deref(), cfg)?
            }
            CalcCommand::WeightGain {
                gain,
                from,
                sale_date,
            } => CalcLogic::weight_gain(gain.as_deref(), from, sale_date.as_deref(), cfg)?,
            CalcCommand::Production {
                quantity,
                head_count,
            } => CalcLogic::production(quantity.as_deref(), *head_count, cfg)?,
        };

        let w = rows.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
        for (label, value) in rows {
            println!(
                "{}{}{}  {}",
                CYAN,
                pad_right(label, w),
                RESET,
                colorize_placeholder(&value, &cfg.placeholder)
            );
        }
    }
    Ok(())
}
