//! Connection wrapper for the day store.
//! The CLI opens one SQLite connection per invocation and hands it to the
//! store/grid code; no pooling beyond that is needed.

use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }
}
