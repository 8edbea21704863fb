//! Attendance calculator: pure derived view over a built grid.

use crate::models::day_record::FULL_DAY_MINUTES;
use crate::models::grid::{GridDay, GridItem};
use crate::models::work_type::WorkType;

/// Policy default: 40% of total working minutes must be office minutes.
pub const DEFAULT_QUOTA_PERCENT: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attendance {
    pub working_days: usize,
    pub total_work_minutes: i64,
    pub office_minutes: i64,
    pub percentage: f64,
    /// Signed distance to the quota: positive = minutes still missing,
    /// negative = surplus already banked.
    pub delta_minutes: i64,
    /// Clamped variant of the same figure: 0 once the quota is met.
    pub needed_minutes: i64,
}

fn working_days(grid: &[GridItem]) -> impl Iterator<Item = &GridDay> {
    grid.iter()
        .filter_map(GridItem::as_day)
        .filter(|d| d.is_working_day())
}

/// Minutes counting toward the office quota.
/// Sick/vacation days satisfy the requirement outright (full 480),
/// home days contribute nothing.
fn office_minutes(grid: &[GridItem]) -> i64 {
    working_days(grid)
        .map(|day| match day.work_type {
            WorkType::Office => day.minutes as i64,
            WorkType::SickVacation => FULL_DAY_MINUTES as i64,
            _ => 0,
        })
        .sum()
}

pub fn calculate(grid: &[GridItem], quota_percent: f64) -> Attendance {
    let days = working_days(grid).count();
    let total = days as i64 * FULL_DAY_MINUTES as i64;
    let office = office_minutes(grid);

    let percentage = if total > 0 {
        office as f64 / total as f64 * 100.0
    } else {
        0.0
    };

    let required = total as f64 * quota_percent / 100.0;
    let deficit = required - office as f64;

    Attendance {
        working_days: days,
        total_work_minutes: total,
        office_minutes: office,
        percentage,
        delta_minutes: deficit.round() as i64,
        needed_minutes: if deficit > 0.0 {
            deficit.ceil() as i64
        } else {
            0
        },
    }
}

impl Attendance {
    pub fn quota_met(&self, quota_percent: f64) -> bool {
        self.percentage >= quota_percent
    }
}
