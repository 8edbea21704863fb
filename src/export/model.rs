use crate::models::grid::GridItem;
use serde::Serialize;

/// Flat export row: one line per visible day, week number denormalized
/// from the surrounding divider.
#[derive(Debug, Clone, Serialize)]
pub struct DayExport {
    pub date: String,
    pub week: u32,
    pub work_type: String,
    pub minutes: i32,
    pub is_holiday: bool,
    pub holiday_name: String,
}

pub fn grid_to_rows(grid: &[GridItem]) -> Vec<DayExport> {
    let mut rows = Vec::new();
    let mut week = 0;

    for item in grid {
        match item {
            GridItem::Divider { week: w } => week = *w,
            GridItem::Day(day) => rows.push(DayExport {
                date: day.date_str(),
                week,
                work_type: day.work_type.to_db_str().to_string(),
                minutes: day.minutes,
                is_holiday: day.is_holiday,
                holiday_name: day.holiday_name.clone().unwrap_or_default(),
            }),
        }
    }

    rows
}
