#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rat() -> Command {
    cargo_bin_cmd!("rattend")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattend.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and record a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    // init DB (creates tables)
    rat()
        .args(["--db", db_path, "--test", "init"]) // uses --test init to create schema
        .assert()
        .success();

    // record a couple of office days via the CLI
    rat()
        .args(["--db", db_path, "set", "2024-05-06", "--pos", "O"])
        .assert()
        .success();

    rat()
        .args(["--db", db_path, "set", "2024-05-07", "--pos", "O"])
        .assert()
        .success();
}

/// Open a library-level pool on an initialized DB file
pub fn open_pool(db_path: &str) -> rattend::db::pool::DbPool {
    let pool = rattend::db::pool::DbPool::new(db_path).expect("open db");
    rattend::db::initialize::init_db(&pool.conn).expect("init db");
    pool
}
