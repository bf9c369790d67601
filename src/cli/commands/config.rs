use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::migrate::{migrate_config, missing_fields};
use crate::errors::AppResult;
use crate::ui::messages::{error, info, success, warning};
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        if *check {
            if !path.exists() {
                warning(format!("No configuration file at {}", path.display()));
            } else {
                let missing = missing_fields(&path)?;
                if missing.is_empty() {
                    success("Configuration file is complete.");
                } else {
                    warning(format!("Missing fields: {}", missing.join(", ")));
                    info("Run `rfarmlog config --migrate` to add them with default values.");
                }
            }
        }

        if *migrate {
            if path.exists() {
                migrate_config(&path)?;
            } else {
                warning(format!("No configuration file at {}", path.display()));
            }
        }

        if *edit_config {
            edit_file(&path, editor.as_deref());
        }
    }

    Ok(())
}

fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

/// Open the requested editor, falling back to the platform default.
fn edit_file(path: &std::path::Path, requested: Option<&str>) {
    let fallback = default_editor();
    let editor = requested.map(str::to_string).unwrap_or_else(|| fallback.clone());

    if matches!(Command::new(&editor).arg(path).status(), Ok(s) if s.success()) {
        success(format!(
            "Configuration file edited successfully using '{}'",
            editor
        ));
        return;
    }

    if editor == fallback {
        error(format!("Failed to edit configuration file using '{}'", editor));
        return;
    }

    warning(format!(
        "Editor '{}' not available, falling back to '{}'",
        editor, fallback
    ));
    if matches!(Command::new(&fallback).arg(path).status(), Ok(s) if s.success()) {
        success(format!(
            "Configuration file edited successfully using fallback '{}'",
            fallback
        ));
    } else {
        error(format!(
            "Failed to edit configuration file using fallback '{}'",
            fallback
        ));
    }
}
