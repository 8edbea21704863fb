use crate::export::model::DayExport;
use csv::Writer;

/// Write the day rows as CSV to the given file.
pub fn write_csv(path: &str, rows: &[DayExport]) -> std::io::Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["date", "week", "type", "minutes", "holiday"])?;

    for row in rows {
        wtr.write_record(&[
            row.date.clone(),
            row.week.to_string(),
            row.work_type.clone(),
            row.minutes.to_string(),
            row.holiday_name.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
