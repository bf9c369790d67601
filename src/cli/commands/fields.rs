use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::fields::describe_fields;
use crate::errors::AppResult;
use crate::ui::messages::header;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Fields { kind } = cmd {
        header(format!("Fields for {kind} records"), &cfg.separator_char);
        print!("{}", describe_fields(*kind).render(&cfg.separator_char));
    }
    Ok(())
}
