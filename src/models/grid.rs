use super::work_type::WorkType;
use chrono::NaiveDate;
use serde::Serialize;

/// One visible calendar day of the month grid.
/// Holiday days override whatever the store holds for that date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GridDay {
    pub date: NaiveDate,         // ⇔ days.date (TEXT "YYYY-MM-DD")
    pub work_type: WorkType,     // holiday override applied
    pub minutes: i32,            // forced to 480 on holidays
    pub is_holiday: bool,
    pub holiday_name: Option<String>,
}

/// Ordered month grid entry: a week divider or a visible day.
/// Invariants (kept by `core::grid::build_grid`):
/// - exactly one divider before the first visible day,
/// - a divider before every day opening a new ISO week,
/// - never two consecutive dividers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GridItem {
    Divider { week: u32 },
    Day(GridDay),
}

impl GridItem {
    pub fn as_day(&self) -> Option<&GridDay> {
        match self {
            GridItem::Day(d) => Some(d),
            GridItem::Divider { .. } => None,
        }
    }
}

impl GridDay {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// True for the days entering the attendance denominator.
    pub fn is_working_day(&self) -> bool {
        !self.is_holiday
    }
}
