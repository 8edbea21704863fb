use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::attendance::{self, Attendance};
use crate::core::grid::build_grid;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::grid::{GridDay, GridItem};
use crate::models::month::MonthRef;
use crate::utils::mins2readable;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show {
        month,
        shift,
        summary,
    } = cmd
    {
        let month_ref = resolve_month(month, *shift)?;

        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let grid = build_grid(&mut pool, &month_ref)?;
        let att = attendance::calculate(&grid, cfg.office_quota_percent);

        println!("=== {} ===", month_ref.label());

        if !*summary {
            print_grid(&grid, cfg.show_week_numbers);
        }

        print_summary(&att, cfg.office_quota_percent);
    }
    Ok(())
}

/// Resolve the displayed month: explicit --month, otherwise the current
/// month, optionally shifted by --shift N (calendar rollover applies).
pub fn resolve_month(month: &Option<String>, shift: Option<i32>) -> AppResult<MonthRef> {
    let base = match month {
        Some(m) => MonthRef::parse(m).ok_or_else(|| AppError::InvalidMonth(m.clone()))?,
        None => MonthRef::current(),
    };

    Ok(match shift {
        Some(delta) => base.shifted(delta),
        None => base,
    })
}

fn print_grid(grid: &[GridItem], show_week_numbers: bool) {
    for item in grid {
        match item {
            GridItem::Divider { week } => {
                if show_week_numbers {
                    println!("--- week {:02} ---", week);
                } else {
                    println!("---");
                }
            }
            GridItem::Day(day) => print_day(day),
        }
    }
}

fn print_day(day: &GridDay) {
    let weekday = day.date.format("%a");

    if let Some(name) = &day.holiday_name {
        println!("{} {} | {}", day.date, weekday, name);
    } else {
        println!(
            "{} {} | {:<13} | {}",
            day.date,
            weekday,
            day.work_type.describe(),
            mins2readable(day.minutes as i64),
        );
    }
}

fn print_summary(att: &Attendance, quota: f64) {
    println!(
        "\nWorking days: {} | Office: {} / {}",
        att.working_days,
        mins2readable(att.office_minutes),
        mins2readable(att.total_work_minutes),
    );
    println!(
        "Office attendance: {:.1}% (quota {:.0}%)",
        att.percentage, quota
    );

    if att.quota_met(quota) {
        println!("Quota met, surplus: {}", mins2readable(-att.delta_minutes));
    } else {
        println!(
            "Still needed at the office: {}",
            mins2readable(att.needed_minutes)
        );
    }
}
