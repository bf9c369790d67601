use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::record::{FarmRecord, Record, RecordKind};
use chrono::{Local, NaiveDate};
use rusqlite::{OptionalExtension, Row, params};

/// Rows are decoded from the JSON payload; the other columns only serve
/// lookups and ordering.
pub fn map_row(row: &Row) -> rusqlite::Result<Record> {
    let payload: String = row.get("payload")?;
    serde_json::from_str(&payload).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })
}

pub fn insert_record(pool: &DbPool, record: &Record) -> AppResult<()> {
    let now = Local::now().to_rfc3339();
    let payload = serde_json::to_string(record)?;

    let inserted = pool.conn.execute(
        "INSERT OR IGNORE INTO records (id, kind, record_date, payload, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
        params![
            record.id(),
            record.kind().to_db_str(),
            record.date_str(),
            payload,
            now,
        ],
    )?;

    if inserted == 0 {
        return Err(AppError::DuplicateRecord(record.id().to_string()));
    }
    Ok(())
}

pub fn update_record(pool: &DbPool, record: &Record) -> AppResult<()> {
    let now = Local::now().to_rfc3339();
    let payload = serde_json::to_string(record)?;

    let changed = pool.conn.execute(
        "UPDATE records SET record_date = ?2, payload = ?3, updated_at = ?4
         WHERE id = ?1",
        params![record.id(), record.date_str(), payload, now],
    )?;

    if changed == 0 {
        return Err(AppError::RecordNotFound(record.id().to_string()));
    }
    Ok(())
}

pub fn delete_record(pool: &DbPool, id: &str) -> AppResult<()> {
    let deleted = pool
        .conn
        .execute("DELETE FROM records WHERE id = ?1", [id])?;
    if deleted == 0 {
        return Err(AppError::RecordNotFound(id.to_string()));
    }
    Ok(())
}

pub fn load_record(pool: &DbPool, id: &str) -> AppResult<Option<Record>> {
    let rec = pool
        .conn
        .query_row("SELECT payload FROM records WHERE id = ?1", [id], map_row)
        .optional()?;
    Ok(rec)
}

/// Same as `load_record`, but a missing id is an error.
pub fn require_record(pool: &DbPool, id: &str) -> AppResult<Record> {
    load_record(pool, id)?.ok_or_else(|| AppError::RecordNotFound(id.to_string()))
}

/// All records of a kind, in insertion order.
pub fn load_records(pool: &DbPool, kind: RecordKind) -> AppResult<Vec<Record>> {
    let mut stmt = pool.conn.prepare(
        "SELECT payload FROM records
         WHERE kind = ?1
         ORDER BY rowid ASC",
    )?;

    let rows = stmt.query_map([kind.to_db_str()], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Records of a kind whose primary date falls in `start..=end`.
pub fn load_records_in_range(
    pool: &DbPool,
    kind: RecordKind,
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<Vec<Record>> {
    let mut stmt = pool.conn.prepare(
        "SELECT payload FROM records
         WHERE kind = ?1 AND record_date BETWEEN ?2 AND ?3
         ORDER BY record_date ASC, rowid ASC",
    )?;

    let rows = stmt.query_map(
        params![
            kind.to_db_str(),
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string(),
        ],
        map_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Next free generated id for a kind, e.g. `BR-0004` after `BR-0003`.
pub fn next_id(pool: &DbPool, kind: RecordKind) -> AppResult<String> {
    let prefix = format!("{}-", kind.id_prefix());

    let mut stmt = pool
        .conn
        .prepare("SELECT id FROM records WHERE id LIKE ?1")?;
    let ids = stmt.query_map([format!("{prefix}%")], |row| row.get::<_, String>(0))?;

    let mut max = 0u64;
    for id in ids {
        let id = id?;
        if let Some(n) = id
            .strip_prefix(&prefix)
            .and_then(|s| s.parse::<u64>().ok())
        {
            max = max.max(n);
        }
    }

    let next = max.checked_add(1).ok_or_else(|| {
        AppError::InvalidField(format!(
            "no free {prefix} id after {prefix}{max}; pass one with --id"
        ))
    })?;
    Ok(format!("{prefix}{next:04}"))
}

pub fn load_log(pool: &DbPool) -> AppResult<Vec<(i64, String, String, String, String)>> {
    let mut stmt = pool
        .conn
        .prepare_cached("SELECT id, date, operation, target, message FROM log ORDER BY id ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
            row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            row.get::<_, String>(4)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
