use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::record::{FarmRecord, Record, RecordKind};
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

#[derive(Debug, Default)]
pub struct KindStats {
    pub count: i64,
    pub first: Option<String>,
    pub last: Option<String>,
}

pub fn kind_stats(pool: &DbPool, kind: RecordKind) -> AppResult<KindStats> {
    let row = pool
        .conn
        .query_row(
            "SELECT COUNT(*), MIN(record_date), MAX(record_date)
             FROM records WHERE kind = ?1",
            [kind.to_db_str()],
            |row| {
                Ok(KindStats {
                    count: row.get(0)?,
                    first: row.get(1)?,
                    last: row.get(2)?,
                })
            },
        )
        .optional()?;
    Ok(row.unwrap_or_default())
}

/// Ids whose stored payload no longer decodes, or decodes to a record of
/// another kind than the row says.
pub fn unreadable_records(pool: &DbPool) -> AppResult<Vec<String>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT id, kind, payload FROM records ORDER BY rowid ASC")?;
    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
        ))
    })?;

    let mut bad = Vec::new();
    for r in rows {
        let (id, kind, payload) = r?;
        let ok = serde_json::from_str::<Record>(&payload)
            .map(|rec| rec.kind().to_db_str() == kind && rec.id() == id)
            .unwrap_or(false);
        if !ok {
            bad.push(id);
        }
    }
    Ok(bad)
}

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) RECORDS PER KIND
    //
    println!("{}• Records:{}", CYAN, RESET);
    let mut total = 0;
    for kind in RecordKind::ALL {
        let s = kind_stats(pool, kind)?;
        total += s.count;

        let range = match (s.first, s.last) {
            (Some(f), Some(l)) => format!("{f} → {l}"),
            _ => format!("{GREY}--{RESET}"),
        };
        println!(
            "    {:<11} {}{:>5}{}  {}",
            kind.to_db_str(),
            GREEN,
            s.count,
            RESET,
            range
        );
    }
    println!("{}• Total:{} {}{}{}", CYAN, RESET, GREEN, total, RESET);

    println!();
    Ok(())
}
