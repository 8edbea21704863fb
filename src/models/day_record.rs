use super::work_type::WorkType;
use serde::Serialize;

/// Minutes of a full working day (8h).
pub const FULL_DAY_MINUTES: i32 = 480;

/// One stored day, keyed in the DB by its "YYYY-MM-DD" string.
/// A date with no stored row means the default record below.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DayRecord {
    #[serde(rename = "type")]
    pub work_type: WorkType, // ⇔ days.type ('home' | 'office' | 'sick-vacation')
    pub minutes: i32, // ⇔ days.minutes (INT, default 480)
}

impl Default for DayRecord {
    fn default() -> Self {
        Self {
            work_type: WorkType::Home,
            minutes: FULL_DAY_MINUTES,
        }
    }
}

impl DayRecord {
    pub fn new(work_type: WorkType, minutes: i32) -> Self {
        Self { work_type, minutes }
    }

    /// Sick/vacation days always count as a full day.
    pub fn normalized(mut self) -> Self {
        if self.work_type == WorkType::SickVacation {
            self.minutes = FULL_DAY_MINUTES;
        }
        self
    }
}
