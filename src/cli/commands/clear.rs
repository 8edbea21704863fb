use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::mutate;
use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::month::MonthRef;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { month, all, yes } = cmd {
        if month.is_none() && !*all {
            warning("Nothing to do: pass --month YYYY-MM or --all.");
            return Ok(());
        }

        let month_ref = match month {
            Some(m) => Some(MonthRef::parse(m).ok_or_else(|| AppError::InvalidMonth(m.clone()))?),
            None => None,
        };

        //
        // Confirmation prompt
        //
        let prompt = if let Some(m) = &month_ref {
            format!(
                "Delete all stored days of {}? This action is irreversible.",
                m.label()
            )
        } else {
            "Delete ALL stored days? This action is irreversible.".to_string()
        };

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        //
        // Execute deletion
        //
        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let removed = if let Some(m) = &month_ref {
            let n = mutate::clear_month(&mut pool, m)?;
            ttlog(&pool.conn, "clear", &m.key(), "month cleared")?;
            n
        } else {
            let n = mutate::clear_all(&mut pool)?;
            ttlog(&pool.conn, "clear", "all", "all days cleared")?;
            n
        };

        success(format!("{} stored day(s) removed.", removed));
    }
    Ok(())
}
