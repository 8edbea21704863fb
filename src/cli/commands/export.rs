use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::grid::build_grid;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export;

use super::show::resolve_month;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        month,
        force,
    } = cmd
    {
        if std::path::Path::new(file).exists() && !*force {
            return Err(AppError::Export(format!(
                "file {} already exists, use --force to overwrite",
                file
            )));
        }

        let month_ref = resolve_month(month, None)?;

        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let grid = build_grid(&mut pool, &month_ref)?;

        export::export_grid(&grid, format, file)?;
    }
    Ok(())
}
