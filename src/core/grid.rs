//! Month grid builder.
//!
//! Walks every calendar day of a month and keeps the visible ones: weekdays,
//! plus any day (weekend included) named by the holiday table. Days are
//! grouped by ISO week with a divider opening each week's run.

use crate::db::pool::DbPool;
use crate::db::store;
use crate::errors::AppResult;
use crate::holidays;
use crate::models::day_record::FULL_DAY_MINUTES;
use crate::models::grid::{GridDay, GridItem};
use crate::models::month::MonthRef;
use crate::models::work_type::WorkType;
use crate::utils::date;

/// Build the ordered grid for a month. Read-only against the store, so
/// calling it twice without intervening mutations yields the same sequence.
pub fn build_grid(pool: &mut DbPool, month: &MonthRef) -> AppResult<Vec<GridItem>> {
    let mut items = Vec::new();
    let mut current_week: Option<u32> = None;

    for d in month.days() {
        let holiday_name = holidays::holiday_name(&d);

        // visible = weekday, or a holiday falling on a weekend
        if !date::is_weekday(&d) && holiday_name.is_none() {
            continue;
        }

        let week = date::iso_week(&d);
        if current_week != Some(week) {
            items.push(GridItem::Divider { week });
            current_week = Some(week);
        }

        let day = match holiday_name {
            // the holiday table overrides whatever is stored
            Some(name) => GridDay {
                date: d,
                work_type: WorkType::Holiday,
                minutes: FULL_DAY_MINUTES,
                is_holiday: true,
                holiday_name: Some(name.to_string()),
            },
            None => {
                let rec = store::load_record(pool, &d)?.unwrap_or_default();
                GridDay {
                    date: d,
                    work_type: rec.work_type,
                    minutes: rec.minutes,
                    is_holiday: false,
                    holiday_name: None,
                }
            }
        };

        items.push(GridItem::Day(day));
    }

    Ok(items)
}

/// Find the visible day for a date in an already built grid.
pub fn find_day<'a>(grid: &'a [GridItem], date: &chrono::NaiveDate) -> Option<&'a GridDay> {
    grid.iter()
        .filter_map(GridItem::as_day)
        .find(|day| day.date == *date)
}
