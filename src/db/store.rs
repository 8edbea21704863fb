//! Key-value day store: one row per edited date, keyed by "YYYY-MM-DD".
//! Dates with no row fall back to the default record (home, 480).

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::day_record::DayRecord;
use crate::models::work_type::WorkType;
use chrono::NaiveDate;
use rusqlite::{OptionalExtension, params};

fn key(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Load the stored record for a date, if any.
/// A row whose `type` no longer parses is treated as absent: the caller
/// falls back to the default instead of seeing a parse failure.
pub fn load_record(pool: &mut DbPool, date: &NaiveDate) -> AppResult<Option<DayRecord>> {
    let mut stmt = pool
        .conn
        .prepare_cached("SELECT type, minutes FROM days WHERE date = ?1")?;

    let row: Option<(String, i32)> = stmt
        .query_row([key(date)], |row| Ok((row.get(0)?, row.get(1)?)))
        .optional()?;

    let Some((type_str, minutes)) = row else {
        return Ok(None);
    };

    match WorkType::from_db_str(&type_str) {
        Some(work_type) => Ok(Some(DayRecord::new(work_type, minutes))),
        None => Ok(None), // malformed row, ignore it
    }
}

/// Insert or replace the record for a date.
pub fn save_record(pool: &mut DbPool, date: &NaiveDate, rec: &DayRecord) -> AppResult<()> {
    pool.conn.execute(
        "INSERT INTO days (date, type, minutes)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(date) DO UPDATE SET type = ?2, minutes = ?3",
        params![key(date), rec.work_type.to_db_str(), rec.minutes],
    )?;
    Ok(())
}

pub fn delete_record(pool: &mut DbPool, date: &NaiveDate) -> AppResult<usize> {
    let n = pool
        .conn
        .execute("DELETE FROM days WHERE date = ?1", [key(date)])?;
    Ok(n)
}

pub fn delete_all(pool: &mut DbPool) -> AppResult<usize> {
    let n = pool.conn.execute("DELETE FROM days", [])?;
    Ok(n)
}
