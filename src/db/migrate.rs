use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Schema steps, applied in order. A step is recorded in the `log` table
/// as `migration_applied` once it ran, so it never runs twice.
const MIGRATIONS: &[(&str, &str, &str)] = &[
    (
        "20250301_0001_create_records",
        "Created records table",
        r#"
        CREATE TABLE IF NOT EXISTS records (
            id           TEXT PRIMARY KEY,
            kind         TEXT NOT NULL CHECK(kind IN
                ('livestock','breeding','health','feeding','production','inventory')),
            record_date  TEXT NOT NULL,
            payload      TEXT NOT NULL,
            created_at   TEXT NOT NULL,
            updated_at   TEXT NOT NULL
        );
        "#,
    ),
    (
        "20250301_0002_records_kind_date_index",
        "Added kind/date index on records",
        r#"
        CREATE INDEX IF NOT EXISTS idx_records_kind_date ON records(kind, record_date);
        "#,
    ),
];

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, version: &str, message: &str, sql: &str) -> Result<()> {
    let tx = conn.unchecked_transaction()?;
    tx.execute_batch(sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    tx.commit()?;

    success(format!("Migration applied: {} → {}", version, message));
    Ok(())
}

/// Versions already recorded as applied.
pub fn applied_migrations(conn: &Connection) -> Result<Vec<String>> {
    ensure_log_table(conn)?;
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.collect()
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<usize> {
    ensure_log_table(conn)?;

    let mut count = 0;
    for (version, message, sql) in MIGRATIONS {
        if !is_applied(conn, version)? {
            apply(conn, version, message, sql)?;
            count += 1;
        }
    }
    Ok(count)
}
