use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{
    add_plan, config_file_in, extract_id, init_db, lp, lp_with_home, plan_rows, setup_test_db,
    temp_dir, temp_out,
};

#[test]
fn test_init_creates_empty_collection() {
    let db_path = setup_test_db("init_empty");

    lp().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    lp().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No lesson plans found."));
}

#[test]
fn test_add_acknowledges_and_lists() {
    let db_path = setup_test_db("add_and_list");
    init_db(&db_path);

    lp().args([
        "--db",
        &db_path,
        "add",
        "--subject",
        "Mathematics",
        "--class",
        "10-B",
        "--topic",
        "Quadratic equations",
        "--type",
        "Lecture",
        "--date",
        "2025-03-10",
    ])
    .assert()
    .success()
    .stdout(contains("Lesson plan added successfully!"))
    .stdout(contains("Quadratic equations"));

    lp().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Mathematics"))
        .stdout(contains("10-B"))
        .stdout(contains("2025-03-10"))
        .stdout(contains("Planned"));
}

#[test]
fn test_add_accepts_empty_fields() {
    let db_path = setup_test_db("add_empty_fields");
    init_db(&db_path);

    let output = lp().args(["--db", &db_path, "add"]).output().unwrap();
    assert!(output.status.success());
    assert!(extract_id(&String::from_utf8_lossy(&output.stdout)).is_some());
}

#[test]
fn test_add_rejects_unknown_status() {
    let db_path = setup_test_db("add_bad_status");
    init_db(&db_path);

    lp().args(["--db", &db_path, "add", "--subject", "Art", "--status", "Someday"])
        .assert()
        .failure()
        .stderr(contains("Invalid status"));
}

#[test]
fn test_list_sorted_by_date() {
    let db_path = setup_test_db("list_sorted");
    init_db(&db_path);

    let third = add_plan(&db_path, "History", "9-A", "Rome", "2024-01-03");
    let first = add_plan(&db_path, "History", "9-A", "Greece", "2024-01-01");
    let second = add_plan(&db_path, "History", "9-A", "Egypt", "2024-01-02");

    let out = lp().args(["--db", &db_path, "list"]).output().unwrap();
    let stdout = String::from_utf8_lossy(&out.stdout);
    let rows = plan_rows(&stdout);

    assert_eq!(rows.len(), 3, "rows: {rows:?}");
    assert!(rows[0].starts_with(&first));
    assert!(rows[1].starts_with(&second));
    assert!(rows[2].starts_with(&third));
}

#[test]
fn test_list_filter_case_insensitive() {
    let db_path = setup_test_db("list_filter");
    init_db(&db_path);

    add_plan(&db_path, "Math", "9-A", "Fractions", "2024-01-01");
    add_plan(&db_path, "Science", "9-B", "Cells", "2024-01-02");
    add_plan(&db_path, "Mathematics", "10-A", "Vectors", "2024-01-03");

    lp().args(["--db", &db_path, "list", "--filter", "MATH"])
        .assert()
        .success()
        .stdout(contains("Fractions"))
        .stdout(contains("Vectors"))
        .stdout(contains("Cells").not())
        .stdout(contains("2 of 3"));
}

#[test]
fn test_toggle_twice_restores_planned() {
    let db_path = setup_test_db("toggle_twice");
    init_db(&db_path);

    let id = add_plan(&db_path, "Math", "9-A", "Fractions", "2024-01-01");

    lp().args(["--db", &db_path, "toggle", &id])
        .assert()
        .success()
        .stdout(contains("is now Completed"));

    lp().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Completed"));

    lp().args(["--db", &db_path, "toggle", &id])
        .assert()
        .success()
        .stdout(contains("is now Planned"));
}

#[test]
fn test_toggle_unknown_id_is_noop() {
    let db_path = setup_test_db("toggle_unknown");
    init_db(&db_path);

    lp().args(["--db", &db_path, "toggle", "0-missing"])
        .assert()
        .success()
        .stdout(contains("Nothing changed"));
}

#[test]
fn test_delete_with_confirmation() {
    let db_path = setup_test_db("delete_confirm");
    init_db(&db_path);

    let keep = add_plan(&db_path, "Math", "9-A", "Fractions", "2024-01-01");
    let gone = add_plan(&db_path, "Science", "9-B", "Cells", "2024-01-02");

    lp().args(["--db", &db_path, "del", &gone])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    let out = lp().args(["--db", &db_path, "list"]).output().unwrap();
    let stdout = String::from_utf8_lossy(&out.stdout);
    let rows = plan_rows(&stdout);
    assert_eq!(rows.len(), 1);
    assert!(rows[0].starts_with(&keep));
    assert!(!stdout.contains("Cells"));
}

#[test]
fn test_delete_declined_keeps_plan() {
    let db_path = setup_test_db("delete_declined");
    init_db(&db_path);

    let id = add_plan(&db_path, "Math", "9-A", "Fractions", "2024-01-01");

    lp().args(["--db", &db_path, "del", &id])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    lp().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Fractions"));
}

#[test]
fn test_delete_yes_flag_and_unknown_id() {
    let db_path = setup_test_db("delete_yes");
    init_db(&db_path);

    let id = add_plan(&db_path, "Math", "9-A", "Fractions", "2024-01-01");

    lp().args(["--db", &db_path, "del", "0-missing", "--yes"])
        .assert()
        .success()
        .stdout(contains("Nothing deleted"));

    lp().args(["--db", &db_path, "del", &id, "--yes"])
        .assert()
        .success()
        .stdout(contains("has been deleted"));

    lp().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No lesson plans found."));
}

#[test]
fn test_stats_dashboard() {
    let db_path = setup_test_db("stats_dashboard");
    init_db(&db_path);

    add_plan(&db_path, "Math", "9-A", "Fractions", "2024-01-01");
    let sci = add_plan(&db_path, "Science", "9-A", "Cells", "2024-01-02");
    lp().args([
        "--db", &db_path, "add", "--subject", "Science", "--class", "10-C", "--type",
        "Exam / Test",
    ])
    .assert()
    .success();
    lp().args(["--db", &db_path, "toggle", &sci]).assert().success();

    let out = lp().args(["--db", &db_path, "stats"]).output().unwrap();
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);

    for (label, value) in [
        ("Subjects:", 2),
        ("Classes:", 2),
        ("Lessons planned:", 3),
        ("Completed:", 1),
        ("Upcoming exams:", 1),
    ] {
        let line = format!("• {label:<16} {value}");
        assert!(stdout.contains(&line), "missing '{line}' in:\n{stdout}");
    }
}

#[test]
fn test_export_html_escapes_topic() {
    let db_path = setup_test_db("export_html");
    init_db(&db_path);
    add_plan(&db_path, "Math", "9-A", "<script>alert(1)</script>", "2024-01-01");

    let out = temp_out("export_html", "html");
    lp().args(["--db", &db_path, "export", "--format", "html", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported html");
    assert!(content.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(!content.contains("<script>"));
    assert!(content.contains(r#"<p id="stat-planned">1</p>"#));
}

#[test]
fn test_export_json_and_csv_with_filter() {
    let db_path = setup_test_db("export_json_csv");
    init_db(&db_path);
    add_plan(&db_path, "Math", "9-A", "Fractions", "2024-01-01");
    add_plan(&db_path, "Science", "9-B", "Cells", "2024-01-02");

    let json_out = temp_out("export_json_filter", "json");
    lp().args([
        "--db", &db_path, "export", "--format", "json", "--file", &json_out, "--filter", "math",
    ])
    .assert()
    .success();

    let json = fs::read_to_string(&json_out).expect("read exported json");
    assert!(json.contains("\"classSection\": \"9-A\""));
    assert!(!json.contains("Cells"));

    let csv_out = temp_out("export_csv_all", "csv");
    lp().args(["--db", &db_path, "export", "--format", "csv", "--file", &csv_out])
        .assert()
        .success();

    let csv = fs::read_to_string(&csv_out).expect("read exported csv");
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("id,teacher,subject,classSection,topic,type,date,status,createdAt")
    );
    assert_eq!(lines.count(), 2);
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("export_relative");
    init_db(&db_path);

    lp().args(["--db", &db_path, "export", "--file", "relative.html"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_corrupt_storage_recovers_to_empty() {
    let db_path = setup_test_db("corrupt_storage");
    init_db(&db_path);

    {
        let conn = rusqlite::Connection::open(&db_path).expect("open db");
        conn.execute(
            "UPDATE storage SET value = '{broken' WHERE key = 'academicPlans'",
            [],
        )
        .expect("corrupt payload");
    }

    lp().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No lesson plans found."));

    add_plan(&db_path, "Math", "9-A", "Fractions", "2024-01-01");

    lp().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("recover"))
        .stdout(contains("add"));
}

#[test]
fn test_db_info_reports_plan_count() {
    let db_path = setup_test_db("db_info");
    init_db(&db_path);
    add_plan(&db_path, "Math", "9-A", "Fractions", "2024-01-01");
    add_plan(&db_path, "Art", "9-B", "Color", "2024-01-02");

    lp().args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("academicPlans"))
        .stdout(contains("plans:   2"))
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_relative_db_is_shared_by_init_and_other_commands() {
    let cwd = temp_dir("relative_db_cwd");

    lp().current_dir(&cwd)
        .args(["--db", "plans.sqlite", "--test", "init"])
        .assert()
        .success();
    assert!(cwd.join("plans.sqlite").exists());

    lp().current_dir(&cwd)
        .args(["--db", "plans.sqlite", "add", "--subject", "Math", "--topic", "Fractions"])
        .assert()
        .success();

    lp().current_dir(&cwd)
        .args(["--db", "plans.sqlite", "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("add"));

    lp().current_dir(&cwd)
        .args(["--db", "plans.sqlite", "list"])
        .assert()
        .success()
        .stdout(contains("Fractions"));
}

#[test]
fn test_config_check_and_migrate_keep_existing_values() {
    let home = temp_dir("config_migrate_home");
    let db_path = setup_test_db("config_migrate");
    let conf = config_file_in(&home);
    fs::create_dir_all(conf.parent().unwrap()).unwrap();
    fs::write(
        &conf,
        format!("database: {db_path}\nstorage_key: myPlans\n"),
    )
    .unwrap();

    lp_with_home(&home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Missing fields"))
        .stdout(contains("confirm_delete"))
        .stdout(contains("topic_width"))
        .stdout(contains("separator_char"))
        .stdout(contains("storage_key").not());

    lp_with_home(&home)
        .args(["config", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Configuration migrated"));

    let migrated = fs::read_to_string(&conf).unwrap();
    assert!(migrated.contains("storage_key: myPlans"), "{migrated}");
    assert!(migrated.contains("confirm_delete: true"), "{migrated}");

    lp_with_home(&home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration file is complete."));

    // The custom key is the one the planner writes to.
    lp_with_home(&home)
        .args(["add", "--subject", "Math", "--topic", "Fractions"])
        .assert()
        .success();

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let payload: String = conn
        .query_row(
            "SELECT value FROM storage WHERE key = 'myPlans'",
            [],
            |row| row.get(0),
        )
        .expect("plans under the configured key");
    assert!(payload.contains("Fractions"));
}

#[test]
fn test_config_show_created_at_adds_column() {
    let home = temp_dir("config_created_home");
    let db_path = setup_test_db("config_created");
    let conf = config_file_in(&home);
    fs::create_dir_all(conf.parent().unwrap()).unwrap();
    fs::write(
        &conf,
        format!("database: {db_path}\nshow_created_at: true\n"),
    )
    .unwrap();

    lp_with_home(&home)
        .args(["add", "--subject", "Math", "--topic", "Fractions"])
        .assert()
        .success();

    lp_with_home(&home)
        .args(["list"])
        .assert()
        .success()
        .stdout(contains("Created"));
}

#[test]
fn test_list_created_flag_shows_timestamp_column() {
    let db_path = setup_test_db("list_created");
    init_db(&db_path);
    add_plan(&db_path, "Math", "9-A", "Fractions", "2024-01-01");

    lp().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Created").not());

    lp().args(["--db", &db_path, "list", "--created"])
        .assert()
        .success()
        .stdout(contains("Created"))
        .stdout(contains("Z"));
}

#[test]
fn test_db_vacuum_keeps_plans() {
    let db_path = setup_test_db("db_vacuum");
    init_db(&db_path);
    add_plan(&db_path, "Math", "9-A", "Fractions", "2024-01-01");

    lp().args(["--db", &db_path, "db", "--vacuum"])
        .assert()
        .success()
        .stdout(contains("Vacuum completed."));

    lp().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Fractions"));
}
