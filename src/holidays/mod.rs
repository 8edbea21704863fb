//! Static public-holiday table (Berlin).
//! Extending coverage is data entry, not logic: add rows per year as needed.

use chrono::NaiveDate;

const BERLIN_HOLIDAYS: &[(&str, &str)] = &[
    // 2023 holidays
    ("2023-01-01", "New Year's Day"),
    ("2023-04-07", "Good Friday"),
    ("2023-04-09", "Easter Sunday"),
    ("2023-04-10", "Easter Monday"),
    ("2023-05-01", "Labour Day"),
    ("2023-05-18", "Ascension Day"),
    ("2023-05-28", "Whit Sunday"),
    ("2023-05-29", "Whit Monday"),
    ("2023-10-03", "German Unity Day"),
    ("2023-12-25", "Christmas Day"),
    ("2023-12-26", "Boxing Day"),
    // 2024 holidays
    ("2024-01-01", "New Year's Day"),
    ("2024-03-29", "Good Friday"),
    ("2024-03-31", "Easter Sunday"),
    ("2024-04-01", "Easter Monday"),
    ("2024-05-01", "Labour Day"),
    ("2024-05-09", "Ascension Day"),
    ("2024-05-19", "Whit Sunday"),
    ("2024-05-20", "Whit Monday"),
    ("2024-10-03", "German Unity Day"),
    ("2024-12-25", "Christmas Day"),
    ("2024-12-26", "Boxing Day"),
    // 2025 holidays
    ("2025-01-01", "New Year's Day"),
    ("2025-04-18", "Good Friday"),
    ("2025-04-20", "Easter Sunday"),
    ("2025-04-21", "Easter Monday"),
    ("2025-05-01", "Labour Day"),
    ("2025-05-29", "Ascension Day"),
    ("2025-06-08", "Whit Sunday"),
    ("2025-06-09", "Whit Monday"),
    ("2025-10-03", "German Unity Day"),
    ("2025-12-25", "Christmas Day"),
    ("2025-12-26", "Boxing Day"),
];

/// Lookup by "YYYY-MM-DD" key.
pub fn holiday_name_str(date: &str) -> Option<&'static str> {
    BERLIN_HOLIDAYS
        .iter()
        .find(|(d, _)| *d == date)
        .map(|(_, name)| *name)
}

pub fn holiday_name(date: &NaiveDate) -> Option<&'static str> {
    holiday_name_str(&date.format("%Y-%m-%d").to_string())
}
