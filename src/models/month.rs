use crate::utils::date;
use chrono::{Datelike, NaiveDate};

/// Explicit month context: the (year, month) pair the grid is built for.
/// Passed by value through the call chain, never held as global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRef {
    pub year: i32,
    pub month: u32, // 1..=12
}

impl MonthRef {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    pub fn current() -> Self {
        Self::from_date(date::today())
    }

    pub fn from_date(d: NaiveDate) -> Self {
        Self {
            year: d.year(),
            month: d.month(),
        }
    }

    /// Parse "YYYY-MM".
    pub fn parse(s: &str) -> Option<Self> {
        let d = NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d").ok()?;
        Some(Self::from_date(d))
    }

    /// Relative navigation with calendar rollover (month 13 → next January).
    pub fn shifted(&self, delta: i32) -> Self {
        let zero_based = self.year as i64 * 12 + (self.month as i64 - 1) + delta as i64;
        Self {
            year: zero_based.div_euclid(12) as i32,
            month: (zero_based.rem_euclid(12) + 1) as u32,
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        // month is normalized by construction
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap()
    }

    /// All calendar days of the month, visible or not.
    pub fn days(&self) -> Vec<NaiveDate> {
        date::all_days_of_month(self.year, self.month)
    }

    /// Human label, e.g. "May 2024".
    pub fn label(&self) -> String {
        self.first_day().format("%B %Y").to_string()
    }

    pub fn key(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }
}
