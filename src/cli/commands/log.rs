use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let rows = load_log(&mut pool)?;

        if rows.is_empty() {
            println!("Log is empty.");
            return Ok(());
        }

        for (ts, op, msg) in rows {
            println!("{} | {:<6} | {}", ts, op, msg);
        }
    }

    Ok(())
}
