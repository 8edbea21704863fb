//! Day-record mutations.
//!
//! The grid is the source of truth for which dates are editable: edits for
//! dates not visible in the given grid are silent no-ops. Writes go to the
//! store only; callers rebuild the grid afterwards, so a failed write leaves
//! the in-memory grid untouched.

use crate::db::pool::DbPool;
use crate::db::store;
use crate::errors::{AppError, AppResult};
use crate::models::day_record::DayRecord;
use crate::models::grid::GridItem;
use crate::models::month::MonthRef;
use crate::models::work_type::WorkType;
use chrono::NaiveDate;

pub const MAX_DAY_MINUTES: i32 = 1440;

/// Set the work type for a visible day. Returns false when the date is not
/// part of the grid (nothing written).
pub fn set_work_type(
    pool: &mut DbPool,
    grid: &[GridItem],
    date: &NaiveDate,
    new_type: WorkType,
) -> AppResult<bool> {
    let Some(day) = crate::core::grid::find_day(grid, date) else {
        return Ok(false);
    };

    // normalized() forces sick/vacation days back to a full 480
    let rec = DayRecord::new(new_type, day.minutes).normalized();

    store::save_record(pool, date, &rec)?;
    Ok(true)
}

/// Set the minutes for a visible day, bounded to a calendar day.
pub fn set_minutes(
    pool: &mut DbPool,
    grid: &[GridItem],
    date: &NaiveDate,
    new_minutes: i32,
) -> AppResult<bool> {
    if !(0..=MAX_DAY_MINUTES).contains(&new_minutes) {
        return Err(AppError::InvalidMinutes(new_minutes));
    }

    let Some(day) = crate::core::grid::find_day(grid, date) else {
        return Ok(false);
    };

    store::save_record(pool, date, &DayRecord::new(day.work_type, new_minutes))?;
    Ok(true)
}

/// Delete every stored record of a month, visible or not.
pub fn clear_month(pool: &mut DbPool, month: &MonthRef) -> AppResult<usize> {
    let mut removed = 0;
    for d in month.days() {
        removed += store::delete_record(pool, &d)?;
    }
    Ok(removed)
}

/// Delete every stored record.
pub fn clear_all(pool: &mut DbPool) -> AppResult<usize> {
    store::delete_all(pool)
}
