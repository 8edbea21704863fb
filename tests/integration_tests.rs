use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db_with_data, rat, setup_test_db, temp_out};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init");

    rat()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_set_then_show_round_trip() {
    let db_path = setup_test_db("set_show");
    init_db_with_data(&db_path);

    rat()
        .args(["--db", &db_path, "show", "--month", "2024-05"])
        .assert()
        .success()
        .stdout(contains("May 2024"))
        .stdout(contains("2024-05-06"))
        .stdout(contains("Office"));
}

#[test]
fn test_show_marks_holidays() {
    let db_path = setup_test_db("holidays");

    rat()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rat()
        .args(["--db", &db_path, "show", "--month", "2024-05"])
        .assert()
        .success()
        .stdout(contains("Labour Day"))
        .stdout(contains("Ascension Day"))
        .stdout(contains("week 18"));
}

#[test]
fn test_show_shift_rolls_over_year() {
    let db_path = setup_test_db("shift");

    rat()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rat()
        .args([
            "--db", &db_path, "show", "--month", "2024-12", "--shift", "1", "--summary",
        ])
        .assert()
        .success()
        .stdout(contains("January 2025"));
}

#[test]
fn test_show_summary_reports_quota() {
    let db_path = setup_test_db("summary");
    init_db_with_data(&db_path);

    // 2 office days out of 20 working days in May 2024 = 10%
    rat()
        .args(["--db", &db_path, "show", "--month", "2024-05", "--summary"])
        .assert()
        .success()
        .stdout(contains("Office attendance: 10.0%"))
        .stdout(contains("Still needed at the office"));
}

#[test]
fn test_set_rejects_bad_work_type() {
    let db_path = setup_test_db("bad_pos");

    rat()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rat()
        .args(["--db", &db_path, "set", "2024-05-06", "--pos", "X"])
        .assert()
        .failure()
        .stderr(contains("Invalid work type"));
}

#[test]
fn test_set_rejects_bad_date() {
    let db_path = setup_test_db("bad_date");

    rat()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rat()
        .args(["--db", &db_path, "set", "2024-13-40", "--pos", "O"])
        .assert()
        .failure()
        .stderr(contains("Invalid date"));
}

#[test]
fn test_set_on_weekend_warns_and_stores_nothing() {
    let db_path = setup_test_db("weekend");

    rat()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // 2024-05-04 is a Saturday with no holiday: not visible, silent no-op
    rat()
        .args(["--db", &db_path, "set", "2024-05-04", "--pos", "O"])
        .assert()
        .success()
        .stdout(contains("not a visible day"));

    rat()
        .args(["--db", &db_path, "show", "--month", "2024-05"])
        .assert()
        .success()
        .stdout(contains("2024-05-04").not());
}

#[test]
fn test_clear_all_resets_month() {
    let db_path = setup_test_db("clear_all");
    init_db_with_data(&db_path);

    rat()
        .args(["--db", &db_path, "clear", "--all", "--yes"])
        .assert()
        .success()
        .stdout(contains("removed"));

    rat()
        .args(["--db", &db_path, "show", "--month", "2024-05", "--summary"])
        .assert()
        .success()
        .stdout(contains("Office attendance: 0.0%"));
}

#[test]
fn test_clear_single_month_leaves_others() {
    let db_path = setup_test_db("clear_month");
    init_db_with_data(&db_path);

    rat()
        .args(["--db", &db_path, "set", "2024-06-03", "--pos", "O"])
        .assert()
        .success();

    rat()
        .args(["--db", &db_path, "clear", "--month", "2024-05", "--yes"])
        .assert()
        .success();

    rat()
        .args(["--db", &db_path, "show", "--month", "2024-05", "--summary"])
        .assert()
        .success()
        .stdout(contains("Office attendance: 0.0%"));

    rat()
        .args(["--db", &db_path, "show", "--month", "2024-06"])
        .assert()
        .success()
        .stdout(contains("Office"));
}

#[test]
fn test_export_csv_month_grid() {
    let db_path = setup_test_db("export_csv");
    let out = temp_out("export_csv", "csv");
    init_db_with_data(&db_path);

    rat()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--month", "2024-05",
        ])
        .assert()
        .success()
        .stdout(contains("export completed"));

    let content = std::fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("date,week,type,minutes,holiday"));
    assert!(content.contains("2024-05-06,19,office,480,"));
    assert!(content.contains("2024-05-01,18,holiday,480,Labour Day"));
}

#[test]
fn test_export_json_month_grid() {
    let db_path = setup_test_db("export_json");
    let out = temp_out("export_json", "json");
    init_db_with_data(&db_path);

    rat()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out, "--month", "2024-05",
        ])
        .assert()
        .success();

    let content = std::fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");

    let days = rows.as_array().unwrap();
    assert!(days.iter().any(|d| {
        d["date"] == "2024-05-01" && d["is_holiday"] == true && d["holiday_name"] == "Labour Day"
    }));
}

#[test]
fn test_export_refuses_to_overwrite() {
    let db_path = setup_test_db("export_force");
    let out = temp_out("export_force", "csv");
    init_db_with_data(&db_path);

    std::fs::write(&out, "existing").unwrap();

    rat()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--month", "2024-05",
        ])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    // --force overwrites
    rat()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--month", "2024-05",
            "--force",
        ])
        .assert()
        .success();
}

#[test]
fn test_log_on_fresh_database() {
    let db_path = setup_test_db("log_fresh");

    // no init beforehand: the command creates the schema itself
    rat()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Log is empty."));
}

#[test]
fn test_config_print_lists_live_settings() {
    let out = rat().args(["config", "--print"]).assert().success();

    // every printed knob is one the commands actually read
    let stdout = String::from_utf8(out.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("database:"));
    assert!(stdout.contains("office_quota_percent:"));
    assert!(stdout.contains("show_week_numbers:"));
    assert!(!stdout.contains("full_day_minutes"));
}

#[test]
fn test_log_records_mutations() {
    let db_path = setup_test_db("log");
    init_db_with_data(&db_path);

    rat()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("set"))
        .stdout(contains("office"));
}
