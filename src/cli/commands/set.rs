use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::grid::build_grid;
use crate::core::mutate;
use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::month::MonthRef;
use crate::models::work_type::WorkType;
use crate::ui::messages::{success, warning};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Set {
        date: date_str,
        pos,
        minutes,
    } = cmd
    {
        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.into()))?;

        if pos.is_none() && minutes.is_none() {
            warning("Nothing to do: pass --pos and/or --minutes.");
            return Ok(());
        }

        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        // the grid of the date's month decides whether the day is editable
        let month = MonthRef::from_date(d);
        let grid = build_grid(&mut pool, &month)?;

        if let Some(code) = pos {
            let work_type =
                WorkType::from_code(code).ok_or_else(|| AppError::InvalidWorkType(code.clone()))?;

            if mutate::set_work_type(&mut pool, &grid, &d, work_type)? {
                success(format!("{} set to {}", d, work_type.describe()));
                ttlog(&pool.conn, "set", date_str, work_type.to_db_str())?;
            } else {
                warning(format!("{} is not a visible day, nothing stored.", d));
                return Ok(());
            }
        }

        if let Some(m) = minutes {
            // re-read so the minutes edit sees the type set just above
            let grid = build_grid(&mut pool, &month)?;

            if mutate::set_minutes(&mut pool, &grid, &d, *m)? {
                success(format!("{} set to {} minutes", d, m));
                ttlog(&pool.conn, "set", date_str, &format!("minutes={}", m))?;
            } else {
                warning(format!("{} is not a visible day, nothing stored.", d));
            }
        }
    }
    Ok(())
}
