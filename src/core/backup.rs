use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt::confirm;
use crate::utils::path::expand_tilde;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database file to `dest_file`, optionally zipping it.
    /// Returns the final path, or `None` when the user declined to
    /// overwrite an existing file.
    pub fn backup(
        pool: &DbPool,
        cfg: &Config,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let src = Path::new(&cfg.database);
        let dest = expand_tilde(dest_file);

        if !src.exists() {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )));
        }

        if let Some(parent) = dest.parent() {
            fs::create_dir_all(parent)?;
        }

        let target = if compress {
            dest.with_extension("zip")
        } else {
            dest.clone()
        };
        if target.exists()
            && !force
            && !confirm(&format!(
                "The file '{}' already exists. Overwrite?",
                target.display()
            ))
        {
            info("Backup cancelled.");
            return Ok(None);
        }

        let copy = if compress {
            dest.with_extension("sqlite")
        } else {
            dest
        };
        fs::copy(src, &copy)?;
        success(format!("Backup created: {}", copy.display()));

        let final_path = if compress {
            let zipped = compress_backup(&copy, &target)?;
            if let Err(e) = fs::remove_file(&copy) {
                warning(format!("Failed to remove uncompressed backup: {}", e));
            }
            zipped
        } else {
            copy
        };

        audit(
            &pool.conn,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(Some(final_path))
    }
}

/// Compress a backup using .zip
fn compress_backup(path: &Path, zip_path: &Path) -> AppResult<PathBuf> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "rfarmlog.sqlite".to_string());

    let mut f = fs::File::open(path)?;
    zip.start_file(name, options)?;
    std::io::copy(&mut f, &mut zip)?;
    zip.finish()?;

    info(format!("Compressed: {}", zip_path.display()));
    Ok(zip_path.to_path_buf())
}
