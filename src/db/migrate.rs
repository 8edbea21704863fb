use rusqlite::{Connection, Result};

/// Ensure that the `days` table exists.
/// The column is named `type` (not `work_type`) to stay compatible with the
/// historical stored format; `models::work_type` owns the mapping. No CHECK
/// on `type`: rows that no longer parse are ignored at read time instead.
fn ensure_days_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS days (
            date    TEXT PRIMARY KEY,
            type    TEXT NOT NULL DEFAULT 'home',
            minutes INTEGER NOT NULL DEFAULT 480
        );
        "#,
    )?;
    Ok(())
}

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

/// Run every pending migration. Idempotent, safe to call on each startup.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_days_table(conn)?;
    ensure_log_table(conn)?;
    Ok(())
}
