// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use crate::ui::prompt::confirm;
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

/// Resolve the output path and make sure it may be written.
///
/// - `~/` is expanded and the result must be absolute
/// - an existing file is only replaced with `force` or after confirmation
pub(crate) fn prepare_output(file: &str, force: bool) -> AppResult<PathBuf> {
    let path = expand_tilde(file);

    if !path.is_absolute() {
        return Err(AppError::Export(format!(
            "Output file path must be absolute: {file}"
        )));
    }

    if path.exists() && !force {
        if !confirm(&format!("The file '{}' already exists. Overwrite?", path.display())) {
            return Err(AppError::Export(
                "Export cancelled: existing file not overwritten".into(),
            ));
        }
        info("Existing file will be overwritten.");
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    Ok(path)
}
